//! # Services
//!
//! ```text
//! services/
//! ├── api/            - reqwest client for the CRED backend
//! │                     (auth, prices, investments, reports)
//! └── session_store   - persisted token and profile
//! ```
//!
//! Both sit behind traits ([`crate::core::ApiService`] and
//! [`session_store::SessionStore`]) so the app can be driven by in-memory
//! doubles in tests.

pub mod api;
pub mod session_store;
