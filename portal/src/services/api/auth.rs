//! # Authentication Endpoints
//!
//! Login, registration, OTP verification and password reset.

use reqwest::Method;
use shared::{
    ForgotPasswordRequest, LoginRequest, LoginResponse, MessageResponse, RegisterRequest,
    ProfileResponse, ResendOtpRequest, ResetPasswordRequest, VerifyOtpRequest,
};

use super::client::{read_json, ApiClient};
use crate::core::error::Result;

/// Login with email and password.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn login(client: &ApiClient, request: LoginRequest) -> Result<LoginResponse> {
    tracing::info!("Attempting login");
    let start = std::time::Instant::now();

    let response = client
        .request(Method::POST, "/login")
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Login network error");
            e
        })?;

    let result = read_json::<LoginResponse>(response).await;
    let duration_ms = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => tracing::info!(duration_ms, "Login successful"),
        Err(e) => tracing::warn!(error = %e, duration_ms, "Login failed"),
    }
    result
}

/// Create a pending account. The backend emails a verification OTP.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn register(client: &ApiClient, request: RegisterRequest) -> Result<MessageResponse> {
    tracing::info!("Registering account");
    let response = client
        .request(Method::POST, "/register")
        .json(&request)
        .send()
        .await?;
    read_json(response).await
}

/// Activate an account with the emailed OTP.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn verify_otp(client: &ApiClient, request: VerifyOtpRequest) -> Result<MessageResponse> {
    let response = client
        .request(Method::POST, "/verify-otp")
        .json(&request)
        .send()
        .await?;
    read_json(response).await
}

/// Request a fresh verification OTP.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn resend_otp(client: &ApiClient, request: ResendOtpRequest) -> Result<MessageResponse> {
    let response = client
        .request(Method::POST, "/resend-otp")
        .json(&request)
        .send()
        .await?;
    read_json(response).await
}

/// Request a password reset OTP.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn forgot_password(client: &ApiClient, request: ForgotPasswordRequest) -> Result<MessageResponse> {
    let response = client
        .request(Method::POST, "/forgot-password")
        .json(&request)
        .send()
        .await?;
    read_json(response).await
}

/// Apply a new password using the reset OTP.
#[tracing::instrument(skip(client, request), fields(email = %request.email))]
pub async fn reset_password(client: &ApiClient, request: ResetPasswordRequest) -> Result<MessageResponse> {
    let response = client
        .request(Method::POST, "/reset-password")
        .json(&request)
        .send()
        .await?;
    read_json(response).await
}

/// Fetch the authenticated user's profile.
pub async fn get_profile(client: &ApiClient) -> Result<ProfileResponse> {
    let response = client.request(Method::GET, "/user/profile").send().await?;
    read_json(response).await
}
