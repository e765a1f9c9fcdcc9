//! # Common Error Types
//!
//! Consolidated error handling for the portal client.
//!
//! ## Error Categories
//!
//! - **Validation**: Form input rejected locally, before any network call
//! - **Network**: Transport failure (connection refused, DNS, timeout)
//! - **Api**: Backend answered with a non-2xx status
//! - **Decode**: Backend answered 2xx with a body we could not read
//! - **Storage**: Persisted session store could not be read or written
//! - **Config**: Invalid environment configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use portal::core::error::AppError;
//!
//! let err = AppError::Api { status: 401, message: Some("Invalid credentials".to_string()) };
//! assert_eq!(err.user_message(), "Invalid credentials");
//!
//! let err = AppError::Network("connection refused".to_string());
//! assert_eq!(err.user_message(), "An error occurred");
//! ```

use thiserror::Error;

/// Message shown when the backend gave no usable error text.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Application-wide error type.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AppError {
    /// Input validation error (missing field, password mismatch).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request never produced an HTTP response.
    #[error("Network error: {0}")]
    Network(String),

    /// Backend rejected the request. `message` is the payload's `detail`.
    #[error("API error ({status}): {}", message.as_deref().unwrap_or(FALLBACK_ERROR_MESSAGE))]
    Api { status: u16, message: Option<String> },

    /// Response body did not match the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Session store I/O or format error.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration value.
    #[error("Config error: {0}")]
    Config(String),
}

impl AppError {
    /// Text to show inline in the auth dialog.
    ///
    /// Validation messages and backend `detail` strings are shown verbatim;
    /// everything else collapses to [`FALLBACK_ERROR_MESSAGE`].
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Api {
                message: Some(msg), ..
            } => msg.clone(),
            _ => FALLBACK_ERROR_MESSAGE.to_string(),
        }
    }

    /// True for 401 responses (expired or revoked token).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Api { status: 401, .. })
    }
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Network(err.to_string())
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
