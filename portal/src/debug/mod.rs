//! # Logging
//!
//! Tracing setup for the portal binary.
//!
//! - **File logging**: `logs/portal.log`, rotated daily, non-blocking writes
//! - **stderr mirror**: on by default, `PORTAL_LOG_STDERR=0` turns it off
//! - **Panic hook**: panics are logged with location and backtrace
//!
//! ## Usage
//!
//! ```rust,no_run
//! let _log_guard = portal::debug::init();
//! tracing::info!(endpoint = "/api/login", duration_ms = 234, "API call completed");
//! ```
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: filter directive (default `portal=info,warn`)
//! - `PORTAL_LOG_DIR`: log directory (default `logs`)
//! - `PORTAL_LOG_STDERR`: `0` to log to file only

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::{init, LogGuard};
