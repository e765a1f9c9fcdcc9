//! # Price Feed
//!
//! Polls `/crypto-prices` on a fixed interval. The first fetch happens as
//! soon as the feed starts; failures are logged and the previous snapshot
//! stays on screen.

use std::sync::Arc;
use std::time::Duration;

use async_channel::Sender;
use shared::CryptoPriceSnapshot;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::app::events::AppEvent;
use crate::core::service::ApiService;

/// Handle to the polling task. Dropping it stops the feed.
#[derive(Debug)]
pub struct PriceFeed {
    handle: JoinHandle<()>,
}

impl PriceFeed {
    /// Start polling with `api`, sending every fresh snapshot to `event_tx`.
    pub fn spawn(api: Arc<dyn ApiService>, interval: Duration, event_tx: Sender<AppEvent>) -> Self {
        tracing::info!(interval_ms = interval.as_millis() as u64, "Starting price feed");

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let Some(snapshot) = refresh_prices(api.as_ref()).await else {
                    continue;
                };
                if event_tx.send(AppEvent::PricesUpdated(snapshot)).await.is_err() {
                    tracing::debug!("Event channel closed, stopping price feed");
                    break;
                }
            }
        });

        Self { handle }
    }

    /// Cancel the timer. Idempotent.
    pub fn stop(&self) {
        self.handle.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for PriceFeed {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// One fetch. `None` means "keep what you have"; the error is only logged.
pub async fn refresh_prices(api: &dyn ApiService) -> Option<CryptoPriceSnapshot> {
    match api.get_crypto_prices().await {
        Ok(snapshot) => {
            tracing::debug!(
                btc = snapshot.btc,
                eth = snapshot.eth,
                usdt = snapshot.usdt,
                "Fetched crypto prices"
            );
            Some(snapshot)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Price fetch failed, keeping last snapshot");
            None
        }
    }
}
