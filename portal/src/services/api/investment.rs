//! # Investment Endpoints
//!
//! Packages, deposits and withdrawal requests. Results are passed through as
//! the backend returned them.

use reqwest::{Method, RequestBuilder};
use shared::{
    InvestRequest, Investment, InvestmentsResponse, MessageResponse, PackagesResponse,
    WithdrawRequest,
};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;

/// List investment packages and deposit addresses.
pub async fn get_packages(client: &ApiClient) -> Result<PackagesResponse> {
    let response = client.request(Method::GET, "/investment/packages").send().await?;
    read_json(response).await
}

/// Record a deposit into a package.
#[tracing::instrument(skip(client, request), fields(package_id = %request.package_id, crypto = %request.crypto_type))]
pub async fn invest(client: &ApiClient, request: InvestRequest) -> Result<MessageResponse> {
    let response = invest_request(client, &request).send().await?;
    read_json(response).await
}

fn invest_request(client: &ApiClient, request: &InvestRequest) -> RequestBuilder {
    client.request(Method::POST, "/investment/invest").json(request)
}

/// Submit a withdrawal request.
#[tracing::instrument(skip(client, request), fields(crypto = %request.crypto_type))]
pub async fn withdraw(client: &ApiClient, request: WithdrawRequest) -> Result<MessageResponse> {
    let response = withdraw_request(client, &request).send().await?;
    read_json(response).await
}

fn withdraw_request(client: &ApiClient, request: &WithdrawRequest) -> RequestBuilder {
    client.request(Method::POST, "/investment/withdraw").json(request)
}

/// List the authenticated user's investments.
pub async fn get_my_investments(client: &ApiClient) -> Result<Vec<Investment>> {
    let response = client
        .request(Method::GET, "/investment/my-investments")
        .send()
        .await?;
    read_json::<InvestmentsResponse>(response)
        .await
        .map(|body| body.investments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use shared::CryptoAsset;
    use std::time::Duration;

    fn client() -> ApiClient {
        ApiClient::new("http://127.0.0.1:8001/api", Duration::from_secs(5))
    }

    fn body_json(request: &reqwest::Request) -> serde_json::Value {
        let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
        serde_json::from_slice(bytes).unwrap()
    }

    #[test]
    fn test_withdraw_request_is_authorized_post() {
        let request = WithdrawRequest {
            amount: 250.0,
            crypto_type: CryptoAsset::Eth,
            wallet_address: "0xabc".to_string(),
        };
        let built = withdraw_request(&client().authorized("jwt-abc"), &request).build().unwrap();

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.url().as_str(), "http://127.0.0.1:8001/api/investment/withdraw");
        assert_eq!(built.headers().get(AUTHORIZATION).unwrap(), "Bearer jwt-abc");
        assert_eq!(built.headers().get(CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(
            body_json(&built),
            serde_json::json!({"amount": 250.0, "crypto_type": "eth", "wallet_address": "0xabc"})
        );
    }

    #[test]
    fn test_invest_request_body() {
        let request = InvestRequest {
            package_id: "standard".to_string(),
            amount: 10000.0,
            crypto_type: CryptoAsset::Btc,
            transaction_hash: Some("0xfeed".to_string()),
        };
        let built = invest_request(&client().authorized("jwt-abc"), &request).build().unwrap();

        assert_eq!(built.method(), Method::POST);
        assert_eq!(built.url().path(), "/api/investment/invest");
        assert_eq!(built.headers().get(AUTHORIZATION).unwrap(), "Bearer jwt-abc");
        let body = body_json(&built);
        assert_eq!(body["package_id"], "standard");
        assert_eq!(body["crypto_type"], "btc");
        assert_eq!(body["transaction_hash"], "0xfeed");
    }
}
