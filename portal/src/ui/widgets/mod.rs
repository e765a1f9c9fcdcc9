//! # Custom Widgets
//!
//! Reusable egui components shared by the screens.

pub mod forms;
pub mod notifications;
pub mod price_bar;
