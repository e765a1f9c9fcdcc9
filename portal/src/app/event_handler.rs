//! # Event Handler
//!
//! Applies results from background tasks to [`AppState`]. Runs on the main
//! thread from [`App::on_tick`]; each event takes the write lock once.

use chrono::Utc;
use shared::{CryptoPriceSnapshot, ProfileResponse};
use uuid::Uuid;

use crate::app::events::{AppEvent, AuthOutcome};
use crate::app::handlers;
use crate::app::state::{AppState, NotificationLevel};
use crate::app::App;
use crate::auth::{AuthEvent, AuthState, PendingRequest, Session};
use crate::core::error::AppError;
use crate::services::session_store::persist_session;

/// Shown after a restored token is rejected by the backend
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please sign in again.";

pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::AuthCompleted {
                submission_id,
                request,
                result,
            } => self.handle_auth_completed(submission_id, request, result),
            AppEvent::PricesUpdated(snapshot) => self.handle_prices_updated(snapshot),
            AppEvent::SessionChecked { token, result } => self.handle_session_checked(token, result),
        }
    }
}

/// Default confirmation for a successful non-login request
fn default_notice(request: PendingRequest) -> &'static str {
    match request {
        PendingRequest::Login => "Signed in",
        PendingRequest::Register => "Registration successful! Please check your email for OTP verification.",
        PendingRequest::VerifyOtp => "Account verified successfully! You can now login.",
        PendingRequest::ResendOtp => "A new OTP has been sent to your email.",
        PendingRequest::ForgotPassword => "Password reset instructions have been sent to your email.",
        PendingRequest::ResetPassword => "Password reset successfully! You can now login.",
    }
}

impl App {
    fn handle_auth_completed(
        &mut self,
        submission_id: Uuid,
        request: PendingRequest,
        result: Result<AuthOutcome, AppError>,
    ) {
        let mut state = self.state.write();

        if state.pending_submission != Some(submission_id)
            || state.auth != AuthState::Submitting(request)
        {
            tracing::debug!(
                request = %request,
                submission_id = %submission_id,
                state = state.auth.name(),
                "Dropping stale auth completion"
            );
            return;
        }
        state.pending_submission = None;

        match result {
            Ok(AuthOutcome::LoggedIn(session)) => self.complete_login(&mut state, session),
            Ok(AuthOutcome::Accepted(message)) => {
                let Ok(next) = state.auth.transition(AuthEvent::Succeeded) else {
                    tracing::error!(request = %request, "Backend accepted a request the state machine cannot complete");
                    return;
                };
                state.auth = next;
                tracing::info!(
                    request = %request,
                    state = state.auth.name(),
                    backend_message = message.as_deref().unwrap_or(""),
                    "Auth request succeeded"
                );

                match request {
                    PendingRequest::VerifyOtp | PendingRequest::ResetPassword => {
                        state.form.clear_secrets();
                    }
                    PendingRequest::Register | PendingRequest::ResendOtp => state.form.otp.clear(),
                    PendingRequest::ForgotPassword | PendingRequest::Login => {}
                }
                state.form.notice = Some(default_notice(request).to_string());
            }
            Err(e) => {
                tracing::warn!(request = %request, error = %e, "Auth request failed");
                match state.auth.transition(AuthEvent::Failed) {
                    Ok(next) => state.auth = next,
                    Err(e) => tracing::error!(error = %e, "Could not leave submitting state"),
                }
                state.form.error = Some(e.user_message());
            }
        }
    }

    fn complete_login(&self, state: &mut AppState, session: Session) {
        let next = match state.auth.transition(AuthEvent::LoggedIn(session.clone())) {
            Ok(next) => next,
            Err(e) => {
                tracing::error!(error = %e, "Login result rejected by state machine");
                return;
            }
        };

        if let Err(e) = persist_session(self.store.as_ref(), &session) {
            tracing::error!(error = %e, "Failed to persist session; it will not survive a restart");
        }

        state.api_client = state.api_client.with_bearer(Some(session.token.clone()));
        tracing::info!(user_id = %session.user.id, "Signed in");
        state.notify(
            NotificationLevel::Success,
            format!("Welcome back, {}", session.user.name),
        );
        state.auth = next;
        state.form.clear();
        state.dialog_open = false;
    }

    fn handle_prices_updated(&mut self, snapshot: CryptoPriceSnapshot) {
        let mut state = self.state.write();
        state.prices = snapshot;
        state.prices_updated_at = Some(Utc::now());
    }

    fn handle_session_checked(&mut self, token: String, result: Result<ProfileResponse, AppError>) {
        let current_token = self.state.read().auth.session().map(|s| s.token.clone());
        if current_token.as_deref() != Some(token.as_str()) {
            tracing::debug!("Session changed since the check started, ignoring result");
            return;
        }

        match result {
            Ok(fresh) => {
                let mut state = self.state.write();
                let Some(user) = state.auth.session().map(|s| s.user.refreshed(fresh)) else {
                    return;
                };
                let next = match state.auth.transition(AuthEvent::ProfileRefreshed(user)) {
                    Ok(next) => next,
                    Err(e) => {
                        tracing::warn!(error = %e, "Profile refresh rejected");
                        return;
                    }
                };
                if let Some(session) = next.session() {
                    if let Err(e) = persist_session(self.store.as_ref(), session) {
                        tracing::error!(error = %e, "Failed to persist refreshed profile");
                    }
                    tracing::debug!(user_id = %session.user.id, "Restored session confirmed");
                }
                state.auth = next;
            }
            Err(e) if e.is_unauthorized() => {
                tracing::info!("Restored token rejected by backend, signing out");
                if handlers::auth::end_session(self.state.clone(), self.store.as_ref(), AuthEvent::SessionExpired) {
                    let mut state = self.state.write();
                    state.form.error = Some(SESSION_EXPIRED_MESSAGE.to_string());
                    state.dialog_open = true;
                    state.notify(NotificationLevel::Error, SESSION_EXPIRED_MESSAGE);
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not confirm restored session, keeping it");
            }
        }
    }
}
