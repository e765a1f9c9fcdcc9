//! # Authentication Handlers
//!
//! User actions on the auth dialog. Each handler advances [`AuthState`]
//! through its transition function; submissions spawn the backend call and
//! report back through [`AppEvent::AuthCompleted`].

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use tracing::Instrument;
use uuid::Uuid;

use crate::app::events::{AppEvent, AuthOutcome};
use crate::app::state::{AppState, NotificationLevel};
use crate::auth::{AuthEvent, AuthState, EntryMode, PendingRequest, PreparedRequest, Session};
use crate::core::error::AppError;
use crate::core::service::ApiService;
use crate::services::session_store::{clear_session, SessionStore};

/// Apply a UI-level event. Rejected events leave the state untouched.
fn apply(state: &mut AppState, event: AuthEvent) -> bool {
    let current = state.auth.name();
    match state.auth.transition(event) {
        Ok(next) => {
            tracing::debug!(from = current, to = next.name(), "Auth state transition");
            state.auth = next;
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected auth transition");
            false
        }
    }
}

/// Show the dialog on the sign-in or sign-up form.
pub(crate) fn open_dialog(state: Arc<RwLock<AppState>>, mode: EntryMode) {
    let mut state = state.write();
    if state.is_authenticated() {
        tracing::debug!("Already signed in, not opening auth dialog");
        return;
    }

    if !state.auth.is_submitting() && state.auth != AuthState::Anonymous(mode) {
        apply(&mut state, AuthEvent::Reset);
        if mode == EntryMode::SignUp {
            apply(&mut state, AuthEvent::SwitchEntryMode);
        }
        state.form.clear();
    }
    state.dialog_open = true;
}

/// Hide the dialog and drop any half-finished flow.
///
/// An in-flight submission keeps running; its result is still applied.
pub(crate) fn close_dialog(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    state.dialog_open = false;
    if state.auth.is_submitting() || state.is_authenticated() {
        return;
    }
    apply(&mut state, AuthEvent::Reset);
    state.form.clear();
}

/// Toggle between sign-in and sign-up, keeping the typed email.
pub(crate) fn switch_entry_mode(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if apply(&mut state, AuthEvent::SwitchEntryMode) {
        state.form.reset_for_mode_switch();
    }
}

pub(crate) fn request_forgot_password(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if apply(&mut state, AuthEvent::ForgotPasswordRequested) {
        state.form.error = None;
        state.form.notice = None;
    }
}

pub(crate) fn back_to_sign_in(state: Arc<RwLock<AppState>>) {
    let mut state = state.write();
    if apply(&mut state, AuthEvent::BackToSignIn) {
        state.form.clear_secrets();
        state.form.error = None;
        state.form.notice = None;
    }
}

/// Submit the form the dialog currently shows.
///
/// Returns `true` when a backend call was started.
pub(crate) fn submit(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> bool {
    let request = match state.read().auth.submission() {
        Some(request) => request,
        None => {
            tracing::debug!("Submit ignored: no form to submit");
            return false;
        }
    };
    start_request(state, event_tx, request)
}

/// Ask the backend to email a fresh OTP.
pub(crate) fn resend_otp(state: Arc<RwLock<AppState>>, event_tx: Sender<AppEvent>) -> bool {
    start_request(state, event_tx, PendingRequest::ResendOtp)
}

fn start_request(
    state: Arc<RwLock<AppState>>,
    event_tx: Sender<AppEvent>,
    request: PendingRequest,
) -> bool {
    // Validation, the in-flight gate and the transition share one write lock
    let (prepared, api_client, submission_id) = {
        let mut state = state.write();

        if state.auth.is_submitting() {
            tracing::debug!(request = %request, "Submit ignored: request already in flight");
            return false;
        }

        let prepared = match state.form.prepare(request) {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::debug!(request = %request, error = %e, "Form validation failed");
                state.form.error = Some(e.user_message());
                return false;
            }
        };

        if !apply(&mut state, AuthEvent::Submit(request)) {
            return false;
        }

        let submission_id = Uuid::new_v4();
        state.pending_submission = Some(submission_id);
        state.form.error = None;
        state.form.notice = None;
        (prepared, state.api_client.clone(), submission_id)
    };

    let span = tracing::info_span!("auth_submit", request = %request, submission_id = %submission_id);
    tokio::spawn(
        async move {
            let started = std::time::Instant::now();
            let result = perform(api_client.as_ref(), prepared).await;
            tracing::info!(
                success = result.is_ok(),
                duration_ms = started.elapsed().as_millis() as u64,
                "Auth request finished"
            );
            let event = AppEvent::AuthCompleted {
                submission_id,
                request,
                result,
            };
            if event_tx.send(event).await.is_err() {
                tracing::debug!("Event channel closed, dropping auth result");
            }
        }
        .instrument(span),
    );

    true
}

async fn perform(api: &dyn ApiService, prepared: PreparedRequest) -> Result<AuthOutcome, AppError> {
    match prepared {
        PreparedRequest::Login(request) => {
            let response = api.login(request).await?;
            let token = response
                .access_token
                .filter(|token| !token.is_empty())
                .ok_or_else(|| {
                    AppError::Decode("Login response did not include an access token".to_string())
                })?;
            Ok(AuthOutcome::LoggedIn(Session::new(token, response.user)))
        }
        PreparedRequest::Register(request) => {
            Ok(AuthOutcome::Accepted(api.register(request).await?.message))
        }
        PreparedRequest::VerifyOtp(request) => {
            Ok(AuthOutcome::Accepted(api.verify_otp(request).await?.message))
        }
        PreparedRequest::ResendOtp(request) => {
            Ok(AuthOutcome::Accepted(api.resend_otp(request).await?.message))
        }
        PreparedRequest::ForgotPassword(request) => {
            Ok(AuthOutcome::Accepted(api.forgot_password(request).await?.message))
        }
        PreparedRequest::ResetPassword(request) => {
            Ok(AuthOutcome::Accepted(api.reset_password(request).await?.message))
        }
    }
}

/// End the session: forget the persisted credentials and drop the bearer.
pub(crate) fn logout(state: Arc<RwLock<AppState>>, store: &dyn SessionStore) {
    if end_session(state.clone(), store, AuthEvent::Logout) {
        state.write().notify(NotificationLevel::Info, "Signed out");
    }
}

/// Shared by logout and a rejected token.
pub(crate) fn end_session(state: Arc<RwLock<AppState>>, store: &dyn SessionStore, event: AuthEvent) -> bool {
    let mut state = state.write();
    let user_id = state.current_user().map(|u| u.id.clone());
    if !apply(&mut state, event) {
        return false;
    }

    if let Err(e) = clear_session(store) {
        tracing::error!(error = %e, "Failed to clear persisted session");
    }
    state.api_client = state.api_client.with_bearer(None);
    state.form.clear();
    tracing::info!(user_id = ?user_id, "Session ended");
    true
}
