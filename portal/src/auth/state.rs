//! # Authentication State Machine
//!
//! One tagged union for the whole sign-in / sign-up / OTP / password-reset
//! flow, advanced only through [`AuthState::transition`]. Exactly one form
//! mode can be active at a time.
//!
//! ```text
//!                    Submit(Register)            Succeeded
//!  Anonymous(SignUp) ───────────────► Submitting ─────────► AwaitingOtp
//!         ▲ SwitchEntryMode                                      │ Submit(VerifyOtp)
//!         ▼                                                      ▼
//!  Anonymous(SignIn) ◄──────────────────────── Succeeded ── Submitting
//!     │        │ Submit(Login)
//!     │        └───────────► Submitting ── LoggedIn ──► Authenticated ── Logout ──► Anonymous(SignIn)
//!     │ ForgotPasswordRequested
//!     ▼
//!  ForgotPassword ── Submit ──► Submitting ── Succeeded ──► ResettingPassword
//!                                                               │ Submit(ResetPassword)
//!                         Anonymous(SignIn) ◄── Succeeded ── Submitting
//! ```
//!
//! `Failed` from any `Submitting(p)` returns to the state `p` was submitted from.

use std::fmt;

use shared::UserProfile;
use thiserror::Error;

use super::session::Session;

/// Which entry form the anonymous dialog shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    SignIn,
    SignUp,
}

impl EntryMode {
    pub fn toggled(self) -> Self {
        match self {
            EntryMode::SignIn => EntryMode::SignUp,
            EntryMode::SignUp => EntryMode::SignIn,
        }
    }
}

/// Backend call in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingRequest {
    Login,
    Register,
    VerifyOtp,
    ResendOtp,
    ForgotPassword,
    ResetPassword,
}

impl PendingRequest {
    /// State the request was submitted from; failures return here.
    pub fn origin(self) -> AuthState {
        match self {
            PendingRequest::Login => AuthState::Anonymous(EntryMode::SignIn),
            PendingRequest::Register => AuthState::Anonymous(EntryMode::SignUp),
            PendingRequest::VerifyOtp | PendingRequest::ResendOtp => AuthState::AwaitingOtp,
            PendingRequest::ForgotPassword => AuthState::ForgotPassword,
            PendingRequest::ResetPassword => AuthState::ResettingPassword,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PendingRequest::Login => "login",
            PendingRequest::Register => "register",
            PendingRequest::VerifyOtp => "verify-otp",
            PendingRequest::ResendOtp => "resend-otp",
            PendingRequest::ForgotPassword => "forgot-password",
            PendingRequest::ResetPassword => "reset-password",
        }
    }
}

impl fmt::Display for PendingRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Form the dialog renders
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    SignIn,
    SignUp,
    Otp,
    Forgot,
    Reset,
}

impl FormMode {
    pub fn title(&self) -> &'static str {
        match self {
            FormMode::SignIn => "CRED Sign In",
            FormMode::SignUp => "Join CRED",
            FormMode::Otp => "Verify OTP",
            FormMode::Forgot => "Forgot Password",
            FormMode::Reset => "Reset Password",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            FormMode::SignIn => "Sign In to CRED",
            FormMode::SignUp => "Join CRED",
            FormMode::Otp => "Verify OTP",
            FormMode::Forgot => "Send Reset Code",
            FormMode::Reset => "Reset Password",
        }
    }
}

/// Authentication state
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    Anonymous(EntryMode),
    Submitting(PendingRequest),
    AwaitingOtp,
    ForgotPassword,
    ResettingPassword,
    Authenticated(Session),
}

impl Default for AuthState {
    fn default() -> Self {
        AuthState::Anonymous(EntryMode::SignIn)
    }
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum AuthEvent {
    /// Form submitted (validation already passed)
    Submit(PendingRequest),
    /// Backend accepted a non-login request
    Succeeded,
    /// Backend accepted the login
    LoggedIn(Session),
    /// Backend rejected the request or the transport failed
    Failed,
    ForgotPasswordRequested,
    SwitchEntryMode,
    BackToSignIn,
    Logout,
    /// Backend rejected the session's token
    SessionExpired,
    /// Fresh profile for the signed-in user
    ProfileRefreshed(UserProfile),
    /// Dialog closed; drop any half-finished flow
    Reset,
}

impl AuthEvent {
    fn name(&self) -> &'static str {
        match self {
            AuthEvent::Submit(_) => "Submit",
            AuthEvent::Succeeded => "Succeeded",
            AuthEvent::LoggedIn(_) => "LoggedIn",
            AuthEvent::Failed => "Failed",
            AuthEvent::ForgotPasswordRequested => "ForgotPasswordRequested",
            AuthEvent::SwitchEntryMode => "SwitchEntryMode",
            AuthEvent::BackToSignIn => "BackToSignIn",
            AuthEvent::Logout => "Logout",
            AuthEvent::SessionExpired => "SessionExpired",
            AuthEvent::ProfileRefreshed(_) => "ProfileRefreshed",
            AuthEvent::Reset => "Reset",
        }
    }
}

/// Event not accepted in the current state
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("event {event} is not valid in state {state}")]
pub struct InvalidTransition {
    pub state: &'static str,
    pub event: &'static str,
}

impl AuthState {
    /// Advance the machine. On error the caller keeps its current state.
    pub fn transition(&self, event: AuthEvent) -> Result<AuthState, InvalidTransition> {
        use AuthEvent as E;
        use AuthState as S;
        use PendingRequest as P;

        let next = match (self, event) {
            (S::Anonymous(EntryMode::SignIn), E::Submit(P::Login)) => S::Submitting(P::Login),
            (S::Anonymous(EntryMode::SignUp), E::Submit(P::Register)) => S::Submitting(P::Register),
            (S::Anonymous(EntryMode::SignIn), E::ForgotPasswordRequested) => S::ForgotPassword,
            (S::Anonymous(mode), E::SwitchEntryMode) => S::Anonymous(mode.toggled()),

            (S::AwaitingOtp, E::Submit(p @ (P::VerifyOtp | P::ResendOtp))) => S::Submitting(p),
            (S::ForgotPassword, E::Submit(P::ForgotPassword)) => S::Submitting(P::ForgotPassword),
            (S::ResettingPassword, E::Submit(P::ResetPassword)) => S::Submitting(P::ResetPassword),

            (S::AwaitingOtp | S::ForgotPassword | S::ResettingPassword, E::BackToSignIn) => {
                S::Anonymous(EntryMode::SignIn)
            }

            (S::Submitting(P::Login), E::LoggedIn(session)) => S::Authenticated(session),
            (S::Submitting(P::Register), E::Succeeded) => S::AwaitingOtp,
            (S::Submitting(P::VerifyOtp), E::Succeeded) => S::Anonymous(EntryMode::SignIn),
            (S::Submitting(P::ResendOtp), E::Succeeded) => S::AwaitingOtp,
            (S::Submitting(P::ForgotPassword), E::Succeeded) => S::ResettingPassword,
            (S::Submitting(P::ResetPassword), E::Succeeded) => S::Anonymous(EntryMode::SignIn),
            (S::Submitting(p), E::Failed) => p.origin(),

            (S::Authenticated(_), E::Logout | E::SessionExpired) => S::Anonymous(EntryMode::SignIn),
            (S::Authenticated(session), E::ProfileRefreshed(user)) => {
                S::Authenticated(Session::new(session.token.clone(), user))
            }

            (
                S::Anonymous(_) | S::AwaitingOtp | S::ForgotPassword | S::ResettingPassword,
                E::Reset,
            ) => S::Anonymous(EntryMode::SignIn),

            (state, event) => {
                return Err(InvalidTransition {
                    state: state.name(),
                    event: event.name(),
                })
            }
        };

        Ok(next)
    }

    pub fn name(&self) -> &'static str {
        match self {
            AuthState::Anonymous(EntryMode::SignIn) => "Anonymous(SignIn)",
            AuthState::Anonymous(EntryMode::SignUp) => "Anonymous(SignUp)",
            AuthState::Submitting(_) => "Submitting",
            AuthState::AwaitingOtp => "AwaitingOtp",
            AuthState::ForgotPassword => "ForgotPassword",
            AuthState::ResettingPassword => "ResettingPassword",
            AuthState::Authenticated(_) => "Authenticated",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, AuthState::Submitting(_))
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            AuthState::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    /// Request the current form submits, if it has one.
    pub fn submission(&self) -> Option<PendingRequest> {
        match self {
            AuthState::Anonymous(EntryMode::SignIn) => Some(PendingRequest::Login),
            AuthState::Anonymous(EntryMode::SignUp) => Some(PendingRequest::Register),
            AuthState::AwaitingOtp => Some(PendingRequest::VerifyOtp),
            AuthState::ForgotPassword => Some(PendingRequest::ForgotPassword),
            AuthState::ResettingPassword => Some(PendingRequest::ResetPassword),
            AuthState::Submitting(_) | AuthState::Authenticated(_) => None,
        }
    }

    /// Form to render. While submitting, the form that was submitted.
    pub fn form_mode(&self) -> Option<FormMode> {
        match self {
            AuthState::Anonymous(EntryMode::SignIn) => Some(FormMode::SignIn),
            AuthState::Anonymous(EntryMode::SignUp) => Some(FormMode::SignUp),
            AuthState::AwaitingOtp => Some(FormMode::Otp),
            AuthState::ForgotPassword => Some(FormMode::Forgot),
            AuthState::ResettingPassword => Some(FormMode::Reset),
            AuthState::Submitting(pending) => pending.origin().form_mode(),
            AuthState::Authenticated(_) => None,
        }
    }
}
