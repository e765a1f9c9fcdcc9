//! # CRED Portal - Library Root
//!
//! Native desktop client for the CRED investment portal. The binary in
//! `main.rs` is a thin shell; everything testable lives here.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  ui       egui/eframe rendering              │
//! │   │ handle_* calls        ▲ state snapshots  │
//! │   ▼                       │                  │
//! │  app      App + AppState (Arc<RwLock<_>>)    │
//! │   │ tokio::spawn          ▲ AppEvent channel │
//! │   ▼                       │                  │
//! │  services ApiClient, SessionStore            │
//! └──────────────────────────────────────────────┘
//!                 │ HTTP/JSON
//!                 ▼
//!          CRED backend (/api/*)
//! ```
//!
//! ## Modules
//!
//! - **app**: orchestrator, event handling, background tasks
//! - **auth**: session state machine, form model and validation
//! - **config**: environment-driven settings
//! - **core**: `AppError` and the `ApiService` seam
//! - **debug**: tracing setup
//! - **services**: HTTP client and session persistence
//! - **ui**: screens and widgets
//! - **utils**: env parsing, runtime, validation helpers
//!
//! ## Testing
//!
//! ```bash
//! cargo test -p portal
//! ```

pub mod app;
pub mod auth;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod ui;
pub mod utils;

pub use app::{App, AppEvent, AppState};
pub use core::{AppError, Result};
