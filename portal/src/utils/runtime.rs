//! Process-wide Tokio runtime for the GUI binary.
//!
//! egui owns the main thread, so background work (backend calls, the price
//! feed) runs on a multi-threaded runtime built once and entered from `main`.

use once_cell::sync::OnceCell;
use tokio::runtime::{Builder, Runtime};

use crate::core::error::{AppError, Result};

static TOKIO_RT: OnceCell<Runtime> = OnceCell::new();

/// Shared runtime, built on first use.
pub fn runtime() -> Result<&'static Runtime> {
    TOKIO_RT.get_or_try_init(|| {
        Builder::new_multi_thread()
            .enable_all()
            .thread_name("portal-worker")
            .build()
            .map_err(|e| AppError::Config(format!("failed to start tokio runtime: {e}")))
    })
}
