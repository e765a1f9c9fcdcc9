//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the CRED portal client and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Authentication and user profile DTOs
//!   - **[`dto::market`]**: Crypto price snapshot and assets
//!   - **[`dto::investment`]**: Investment packages and requests
//!   - **[`dto::reports`]**: Incident report tickets
//! - **[`utils`]**: Amount conversion and display formatting
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::market::{CryptoAsset, CryptoPriceSnapshot};
//! use shared::utils::format_crypto_amount;
//!
//! let prices = CryptoPriceSnapshot { btc: 50_000.0, eth: 3_000.0, usdt: 1.0 };
//! assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Btc, &prices), "0.02000000");
//! ```

pub mod dto;
pub mod utils;

// Wildcard re-exports: shared is a DTO library where all exports are public API
pub use dto::*;
pub use utils::*;
