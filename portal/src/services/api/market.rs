//! # Market Data Endpoints
//!
//! Crypto price feed.

use reqwest::Method;
use shared::{CryptoPriceSnapshot, CryptoPricesResponse};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;

/// Get current BTC/ETH/USDT prices in USD.
#[tracing::instrument(skip(client))]
pub async fn get_crypto_prices(client: &ApiClient) -> Result<CryptoPriceSnapshot> {
    let start = std::time::Instant::now();
    tracing::debug!("Fetching crypto prices");

    let response = client.request(Method::GET, "/crypto-prices").send().await?;
    let body = read_json::<CryptoPricesResponse>(response).await?;

    tracing::debug!(
        duration_ms = start.elapsed().as_millis() as u64,
        btc = body.prices.btc,
        eth = body.prices.eth,
        usdt = body.prices.usdt,
        "Prices fetched successfully"
    );
    Ok(body.prices)
}
