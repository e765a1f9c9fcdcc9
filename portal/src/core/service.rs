//! # Service Traits
//!
//! Traits for dependency injection, enabling better testability and modularity.

use std::sync::Arc;

use async_trait::async_trait;
use shared::{
    CryptoPriceSnapshot, ForgotPasswordRequest, InvestRequest, Investment, LoginRequest,
    LoginResponse, MessageResponse, PackagesResponse, RegisterRequest, Report, ReportCreated,
    ReportReply, ReportSubmission, ResendOtpRequest, ResetPasswordRequest, ProfileResponse,
    VerifyOtpRequest, WithdrawRequest,
};

use crate::core::error::Result;

/// Backend API operations.
///
/// Implemented by [`crate::services::api::ApiClient`] and by test mocks. An
/// implementation is a request context: it either carries a session's bearer
/// token or it is anonymous, and [`ApiService::with_bearer`] derives the
/// other flavour.
#[async_trait]
pub trait ApiService: Send + Sync {
    /// Bearer token attached to outgoing requests, if any.
    fn bearer(&self) -> Option<String>;

    /// A service sharing this one's transport, authenticated with `token`
    /// (or anonymous for `None`).
    fn with_bearer(&self, token: Option<String>) -> Arc<dyn ApiService>;

    async fn login(&self, request: LoginRequest) -> Result<LoginResponse>;

    async fn register(&self, request: RegisterRequest) -> Result<MessageResponse>;

    async fn verify_otp(&self, request: VerifyOtpRequest) -> Result<MessageResponse>;

    async fn resend_otp(&self, request: ResendOtpRequest) -> Result<MessageResponse>;

    async fn forgot_password(&self, request: ForgotPasswordRequest) -> Result<MessageResponse>;

    async fn reset_password(&self, request: ResetPasswordRequest) -> Result<MessageResponse>;

    /// Profile of the user the bearer token belongs to
    async fn get_profile(&self) -> Result<ProfileResponse>;

    async fn get_crypto_prices(&self) -> Result<CryptoPriceSnapshot>;

    async fn get_investment_packages(&self) -> Result<PackagesResponse>;

    async fn invest(&self, request: InvestRequest) -> Result<MessageResponse>;

    async fn withdraw(&self, request: WithdrawRequest) -> Result<MessageResponse>;

    async fn get_my_investments(&self) -> Result<Vec<Investment>>;

    async fn submit_report(&self, report: ReportSubmission) -> Result<ReportCreated>;

    async fn get_my_reports(&self) -> Result<Vec<Report>>;

    async fn reply_to_report(&self, reply: ReportReply) -> Result<MessageResponse>;
}
