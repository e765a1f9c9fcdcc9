//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the backend via the
//! REST API mounted under `<BACKEND_URL>/api`.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, OTP verification and password reset
//! - [`market`] - Crypto price feed and supported assets
//! - [`investment`] - Investment packages, deposits and withdrawals
//! - [`reports`] - Incident report tickets
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Optional fields**: Omitted when `None` using `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **Record ids**: accept both `id` and the database's `_id`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /api/login
//! Content-Type: application/json
//!
//! { "email": "alice@example.com", "password": "MyPassword123!" }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "access_token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "token_type": "bearer",
//!   "user": { "id": "5f0c...", "name": "Alice", "email": "alice@example.com", "is_admin": false }
//! }
//! ```
//!
//! Failures carry `{ "detail": "Invalid credentials" }`.

pub mod auth;
pub mod investment;
pub mod market;
pub mod reports;

pub use auth::*;
pub use investment::*;
pub use market::*;
pub use reports::*;
