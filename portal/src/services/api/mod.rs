//! # Backend API Client Module
//!
//! HTTP client for the backend REST API mounted under `<BACKEND_URL>/api`.
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs         - Module exports and documentation
//! ├── client.rs      - ApiClient (request context with optional bearer token)
//! ├── auth.rs        - login, register, verify-otp, forgot/reset password, profile
//! ├── market.rs      - crypto price feed
//! ├── investment.rs  - packages, invest, withdraw, my-investments
//! └── reports.rs     - report submit, list, reply
//! ```

pub mod auth;
pub mod client;
pub mod investment;
pub mod market;
pub mod reports;

pub use client::ApiClient;
