//! # API Client
//!
//! HTTP client for the backend API, carrying the session's bearer token.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::ErrorResponse;

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

/// HTTP client for communicating with the backend API server.
///
/// A value of this type is the request context for one session: it either
/// carries a bearer token or it does not. Logging in or out produces a new
/// value (see [`ApiClient::with_bearer`]) instead of mutating shared headers.
/// Clones share reqwest's connection pool.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    base_url: String,
    bearer: Option<String>,
}

impl ApiClient {
    /// Create an anonymous client for `api_base_url` (e.g. `https://host/api`).
    pub fn new(api_base_url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "Failed to build configured HTTP client, using defaults");
                Client::new()
            });

        Self {
            client,
            base_url: api_base_url.into().trim_end_matches('/').to_string(),
            bearer: None,
        }
    }

    /// Same connection pool, authenticated with `token`.
    pub fn authorized(&self, token: impl Into<String>) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer: Some(token.into()),
        }
    }

    /// Same connection pool, no credentials.
    pub fn anonymous(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            bearer: None,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request, attaching the bearer token when the client has one.
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.client.request(method, self.url(path));
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }
}

/// Turn a response into `T`, or into an [`AppError`] carrying the backend's `detail`.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return response
            .json::<T>()
            .await
            .map_err(|e| AppError::Decode(e.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(api_error(status.as_u16(), &body))
}

/// Build an API error from a status code and raw error body.
pub(crate) fn api_error(status: u16, body: &str) -> AppError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.detail);
    AppError::Api { status, message }
}

#[async_trait::async_trait]
impl ApiService for ApiClient {
    fn bearer(&self) -> Option<String> {
        self.bearer.clone()
    }

    fn with_bearer(&self, token: Option<String>) -> Arc<dyn ApiService> {
        match token {
            Some(token) => Arc::new(self.authorized(token)),
            None => Arc::new(self.anonymous()),
        }
    }

    async fn login(&self, request: shared::LoginRequest) -> Result<shared::LoginResponse> {
        super::auth::login(self, request).await
    }

    async fn register(&self, request: shared::RegisterRequest) -> Result<shared::MessageResponse> {
        super::auth::register(self, request).await
    }

    async fn verify_otp(&self, request: shared::VerifyOtpRequest) -> Result<shared::MessageResponse> {
        super::auth::verify_otp(self, request).await
    }

    async fn resend_otp(&self, request: shared::ResendOtpRequest) -> Result<shared::MessageResponse> {
        super::auth::resend_otp(self, request).await
    }

    async fn forgot_password(&self, request: shared::ForgotPasswordRequest) -> Result<shared::MessageResponse> {
        super::auth::forgot_password(self, request).await
    }

    async fn reset_password(&self, request: shared::ResetPasswordRequest) -> Result<shared::MessageResponse> {
        super::auth::reset_password(self, request).await
    }

    async fn get_profile(&self) -> Result<shared::ProfileResponse> {
        super::auth::get_profile(self).await
    }

    async fn get_crypto_prices(&self) -> Result<shared::CryptoPriceSnapshot> {
        super::market::get_crypto_prices(self).await
    }

    async fn get_investment_packages(&self) -> Result<shared::PackagesResponse> {
        super::investment::get_packages(self).await
    }

    async fn invest(&self, request: shared::InvestRequest) -> Result<shared::MessageResponse> {
        super::investment::invest(self, request).await
    }

    async fn withdraw(&self, request: shared::WithdrawRequest) -> Result<shared::MessageResponse> {
        super::investment::withdraw(self, request).await
    }

    async fn get_my_investments(&self) -> Result<Vec<shared::Investment>> {
        super::investment::get_my_investments(self).await
    }

    async fn submit_report(&self, report: shared::ReportSubmission) -> Result<shared::ReportCreated> {
        super::reports::submit_report(self, report).await
    }

    async fn get_my_reports(&self) -> Result<Vec<shared::Report>> {
        super::reports::get_my_reports(self).await
    }

    async fn reply_to_report(&self, reply: shared::ReportReply) -> Result<shared::MessageResponse> {
        super::reports::reply_to_report(self, reply).await
    }
}
