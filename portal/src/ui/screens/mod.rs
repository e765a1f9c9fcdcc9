//! # Screens
//!
//! - **[`dashboard`]**: account summary and investment calculator (central panel)
//! - **[`auth`]**: sign-in, registration, OTP and password reset dialog
//!
//! Screens snapshot what they need from [`crate::app::AppState`] under a short
//! read lock, render without holding it, then call `app.handle_*` methods.

pub mod auth;
pub mod dashboard;
