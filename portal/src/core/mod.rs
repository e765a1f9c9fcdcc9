//! # Core Abstractions
//!
//! Error types and service traits shared by the whole client.
//!
//! - **[`error`]**: Application error type (`AppError`, `Result<T>`)
//! - **[`service`]**: `ApiService`, the backend seam used for dependency injection
//!
//! ```rust,ignore
//! use portal::core::service::ApiService;
//!
//! // In production: the reqwest-backed client
//! let api: Arc<dyn ApiService> = Arc::new(portal::services::api::ApiClient::new(url, timeout));
//!
//! // In tests: a mock implementation
//! let api: Arc<dyn ApiService> = Arc::new(MockApi::default());
//! ```

pub mod error;
#[cfg(test)]
pub(crate) mod mock;
pub mod service;

pub use error::{AppError, Result};
pub use service::ApiService;
