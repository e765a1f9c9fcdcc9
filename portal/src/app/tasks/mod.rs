//! # Async Tasks
//!
//! Background work that reports back through [`crate::app::AppEvent`].

pub mod account;
pub mod market;
