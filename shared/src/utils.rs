//! # Shared Utility Functions
//!
//! Conversions between USD amounts and crypto amounts for display.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::market::{CryptoAsset, CryptoPriceSnapshot};
//! use shared::utils::{crypto_amount, format_crypto_amount};
//!
//! let prices = CryptoPriceSnapshot { btc: 50_000.0, eth: 3_000.0, usdt: 1.0 };
//! assert_eq!(crypto_amount(1000.0, prices.btc), 0.02);
//! assert_eq!(format_crypto_amount(250.0, CryptoAsset::Usdt, &prices), "250.00");
//! ```

use crate::dto::market::{CryptoAsset, CryptoPriceSnapshot};

/// Convert a USD amount into an amount of an asset priced at `price` USD.
///
/// A missing (zero, negative or non-finite) price counts as 1, matching the
/// backend's fallback for assets it could not price.
pub fn crypto_amount(usd: f64, price: f64) -> f64 {
    let price = if price.is_finite() && price > 0.0 { price } else { 1.0 };
    usd / price
}

/// Format the crypto amount for `usd` with the asset's display precision.
///
/// # Examples
///
/// ```rust
/// use shared::dto::market::{CryptoAsset, CryptoPriceSnapshot};
/// use shared::utils::format_crypto_amount;
///
/// let prices = CryptoPriceSnapshot { btc: 50_000.0, eth: 2_500.0, usdt: 1.0 };
/// assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Btc, &prices), "0.02000000");
/// assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Eth, &prices), "0.40000000");
/// assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Usdt, &prices), "1000.00");
/// ```
pub fn format_crypto_amount(usd: f64, asset: CryptoAsset, prices: &CryptoPriceSnapshot) -> String {
    let amount = crypto_amount(usd, prices.price_of(asset));
    format!("{:.*}", asset.decimals(), amount)
}

/// Format a USD value with two decimals.
pub fn format_usd(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prices() -> CryptoPriceSnapshot {
        CryptoPriceSnapshot {
            btc: 50_000.0,
            eth: 3_000.0,
            usdt: 1.0,
        }
    }

    #[test]
    fn test_btc_amount_uses_eight_decimals() {
        assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Btc, &prices()), "0.02000000");
    }

    #[test]
    fn test_usdt_amount_uses_two_decimals() {
        assert_eq!(format_crypto_amount(1000.0, CryptoAsset::Usdt, &prices()), "1000.00");
        assert_eq!(format_crypto_amount(12.346, CryptoAsset::Usdt, &prices()), "12.35");
    }

    #[test]
    fn test_eth_amount() {
        assert_eq!(format_crypto_amount(1500.0, CryptoAsset::Eth, &prices()), "0.50000000");
    }

    #[test]
    fn test_missing_price_falls_back_to_one() {
        assert_eq!(crypto_amount(42.0, 0.0), 42.0);
        assert_eq!(crypto_amount(42.0, -3.0), 42.0);
        assert_eq!(crypto_amount(42.0, f64::NAN), 42.0);
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(1.0), "$1.00");
        assert_eq!(format_usd(64250.456), "$64250.46");
    }
}
