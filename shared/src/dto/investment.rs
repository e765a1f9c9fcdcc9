use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::market::CryptoAsset;

/// Investment package offered by the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestmentPackage {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub min_investment: f64,
    pub apy: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub features: Vec<String>,
}

/// `GET /investment/packages` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PackagesResponse {
    #[serde(default)]
    pub packages: Vec<InvestmentPackage>,
    /// Deposit address per asset (`btc`, `eth`, `usdt`)
    #[serde(default)]
    pub crypto_addresses: HashMap<String, String>,
}

/// Investment request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestRequest {
    pub package_id: String,
    pub amount: f64,
    pub crypto_type: CryptoAsset,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<String>,
}

/// Withdrawal request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WithdrawRequest {
    pub amount: f64,
    pub crypto_type: CryptoAsset,
    pub wallet_address: String,
}

/// A single investment record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    #[serde(alias = "_id")]
    pub id: String,
    pub package_id: String,
    #[serde(default)]
    pub package_name: String,
    pub amount: f64,
    pub crypto_type: String,
    #[serde(default)]
    pub transaction_hash: Option<String>,
    pub status: String,
    #[serde(default)]
    pub apy: Option<String>,
    #[serde(default)]
    pub returns: f64,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// `GET /investment/my-investments` response
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct InvestmentsResponse {
    #[serde(default)]
    pub investments: Vec<Investment>,
}
