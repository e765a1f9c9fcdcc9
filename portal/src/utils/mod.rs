//! # Utility Functions
//!
//! - **[`envs`]**: environment variable parsing
//! - **[`runtime`]**: the shared Tokio runtime
//! - **[`validation`]**: form input validation
//!
//! Amount conversion and formatting live in [`shared::utils`].

pub mod envs;
pub mod runtime;
pub mod validation;
