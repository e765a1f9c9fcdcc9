use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Current USD prices of the supported assets
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CryptoPriceSnapshot {
    pub btc: f64,
    pub eth: f64,
    pub usdt: f64,
}

impl Default for CryptoPriceSnapshot {
    /// Placeholder prices shown until the first successful fetch.
    fn default() -> Self {
        Self {
            btc: 50_000.0,
            eth: 3_000.0,
            usdt: 1.0,
        }
    }
}

impl CryptoPriceSnapshot {
    /// USD price of a single asset.
    pub fn price_of(&self, asset: CryptoAsset) -> f64 {
        match asset {
            CryptoAsset::Btc => self.btc,
            CryptoAsset::Eth => self.eth,
            CryptoAsset::Usdt => self.usdt,
        }
    }
}

/// `GET /crypto-prices` response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CryptoPricesResponse {
    pub prices: CryptoPriceSnapshot,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Assets accepted for deposits and withdrawals
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CryptoAsset {
    Btc,
    Eth,
    Usdt,
}

impl CryptoAsset {
    pub fn all() -> &'static [CryptoAsset] {
        &[CryptoAsset::Btc, CryptoAsset::Eth, CryptoAsset::Usdt]
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            CryptoAsset::Btc => "BTC",
            CryptoAsset::Eth => "ETH",
            CryptoAsset::Usdt => "USDT",
        }
    }

    /// Decimal places used when displaying an amount of this asset.
    pub fn decimals(&self) -> usize {
        match self {
            CryptoAsset::Btc | CryptoAsset::Eth => 8,
            CryptoAsset::Usdt => 2,
        }
    }
}

impl fmt::Display for CryptoAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when parsing an unknown asset symbol
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAsset(pub String);

impl fmt::Display for UnknownAsset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown crypto asset: {}", self.0)
    }
}

impl std::error::Error for UnknownAsset {}

impl FromStr for CryptoAsset {
    type Err = UnknownAsset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "btc" => Ok(CryptoAsset::Btc),
            "eth" => Ok(CryptoAsset::Eth),
            "usdt" => Ok(CryptoAsset::Usdt),
            _ => Err(UnknownAsset(s.to_string())),
        }
    }
}
