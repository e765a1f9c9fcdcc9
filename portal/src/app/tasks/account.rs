//! # Account Tasks
//!
//! Background checks on the signed-in account.

use std::sync::Arc;

use async_channel::Sender;

use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// Check a restored token against `/user/profile`.
///
/// `api` must already carry `token` as its bearer.
pub(crate) fn verify_session(api: Arc<dyn ApiService>, token: String, event_tx: Sender<AppEvent>) {
    tokio::spawn(async move {
        let result = api.get_profile().await;
        if let Err(e) = &result {
            tracing::debug!(error = %e, "Restored session check failed");
        }
        if event_tx
            .send(AppEvent::SessionChecked { token, result })
            .await
            .is_err()
        {
            tracing::debug!("Event channel closed, dropping session check");
        }
    });
}
