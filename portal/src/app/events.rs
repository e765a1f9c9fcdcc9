//! # Application Events
//!
//! Results sent from background tasks to the main thread.

use shared::{CryptoPriceSnapshot, ProfileResponse};
use uuid::Uuid;

use crate::auth::{PendingRequest, Session};
use crate::core::error::AppError;

/// Successful auth call
#[derive(Debug, Clone, PartialEq)]
pub enum AuthOutcome {
    /// Login returned a token and profile
    LoggedIn(Session),
    /// Any other auth call; carries the backend's `message` if it sent one
    Accepted(Option<String>),
}

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// An auth dialog submission finished
    AuthCompleted {
        submission_id: Uuid,
        request: PendingRequest,
        result: Result<AuthOutcome, AppError>,
    },
    /// Price feed produced a fresh snapshot
    PricesUpdated(CryptoPriceSnapshot),
    /// Restored token checked against `/user/profile`
    SessionChecked {
        token: String,
        result: Result<ProfileResponse, AppError>,
    },
}
