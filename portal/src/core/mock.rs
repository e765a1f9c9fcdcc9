//! In-memory [`ApiService`] for tests.
//!
//! Records every call with the bearer it was made with. Responses are
//! scripted per endpoint; unscripted auth calls succeed.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use shared::{
    CryptoPriceSnapshot, ForgotPasswordRequest, InvestRequest, Investment, LoginRequest,
    LoginResponse, MessageResponse, PackagesResponse, ProfileResponse, RegisterRequest, Report, ReportCreated,
    ReportReply, ReportSubmission, ResendOtpRequest, ResetPasswordRequest, UserProfile,
    VerifyOtpRequest, WithdrawRequest,
};

use crate::core::error::{AppError, Result};
use crate::core::service::ApiService;

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub endpoint: &'static str,
    pub bearer: Option<String>,
}

#[derive(Default)]
struct Script {
    calls: Vec<RecordedCall>,
    failures: HashMap<&'static str, AppError>,
    login: Option<Result<LoginResponse>>,
    profile: Option<Result<ProfileResponse>>,
    prices: VecDeque<Result<CryptoPriceSnapshot>>,
}

#[derive(Clone, Default)]
pub struct MockApi {
    bearer: Option<String>,
    script: Arc<Mutex<Script>>,
}

pub fn sample_user() -> UserProfile {
    UserProfile {
        id: "u-1".to_string(),
        name: "Alice".to_string(),
        email: "alice@example.com".to_string(),
        phone: None,
        role: None,
        is_admin: false,
        total_investment: 0.0,
        total_returns: 0.0,
        active_investments: 0,
        created_at: None,
    }
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `endpoint` fail with `error` until cleared.
    pub fn fail(&self, endpoint: &'static str, error: AppError) {
        self.script.lock().failures.insert(endpoint, error);
    }

    pub fn set_login(&self, result: Result<LoginResponse>) {
        self.script.lock().login = Some(result);
    }

    pub fn set_profile(&self, result: Result<ProfileResponse>) {
        self.script.lock().profile = Some(result);
    }

    /// Queue price results; once drained, fetches fail.
    pub fn push_prices(&self, result: Result<CryptoPriceSnapshot>) {
        self.script.lock().prices.push_back(result);
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.script.lock().calls.clone()
    }

    pub fn count(&self, endpoint: &str) -> usize {
        self.script
            .lock()
            .calls
            .iter()
            .filter(|c| c.endpoint == endpoint)
            .count()
    }

    fn record(&self, endpoint: &'static str) -> Result<()> {
        let mut script = self.script.lock();
        script.calls.push(RecordedCall {
            endpoint,
            bearer: self.bearer.clone(),
        });
        match script.failures.get(endpoint) {
            Some(e) => Err(e.clone()),
            None => Ok(()),
        }
    }

    fn ack(&self, endpoint: &'static str) -> Result<MessageResponse> {
        self.record(endpoint)?;
        Ok(MessageResponse::default())
    }
}

#[async_trait]
impl ApiService for MockApi {
    fn bearer(&self) -> Option<String> {
        self.bearer.clone()
    }

    fn with_bearer(&self, token: Option<String>) -> Arc<dyn ApiService> {
        Arc::new(MockApi {
            bearer: token,
            script: Arc::clone(&self.script),
        })
    }

    async fn login(&self, _request: LoginRequest) -> Result<LoginResponse> {
        self.record("login")?;
        self.script.lock().login.clone().unwrap_or_else(|| {
            Ok(LoginResponse {
                access_token: Some("jwt-fresh".to_string()),
                token_type: Some("bearer".to_string()),
                user: sample_user(),
            })
        })
    }

    async fn register(&self, _request: RegisterRequest) -> Result<MessageResponse> {
        self.ack("register")
    }

    async fn verify_otp(&self, _request: VerifyOtpRequest) -> Result<MessageResponse> {
        self.ack("verify-otp")
    }

    async fn resend_otp(&self, _request: ResendOtpRequest) -> Result<MessageResponse> {
        self.ack("resend-otp")
    }

    async fn forgot_password(&self, _request: ForgotPasswordRequest) -> Result<MessageResponse> {
        self.ack("forgot-password")
    }

    async fn reset_password(&self, _request: ResetPasswordRequest) -> Result<MessageResponse> {
        self.ack("reset-password")
    }

    async fn get_profile(&self) -> Result<ProfileResponse> {
        self.record("user/profile")?;
        self.script
            .lock()
            .profile
            .clone()
            .unwrap_or_else(|| Ok(sample_user().into()))
    }

    async fn get_crypto_prices(&self) -> Result<CryptoPriceSnapshot> {
        self.record("crypto-prices")?;
        self.script
            .lock()
            .prices
            .pop_front()
            .unwrap_or_else(|| Err(AppError::Network("no scripted prices".to_string())))
    }

    async fn get_investment_packages(&self) -> Result<PackagesResponse> {
        self.record("investment/packages")?;
        Ok(PackagesResponse::default())
    }

    async fn invest(&self, _request: InvestRequest) -> Result<MessageResponse> {
        self.ack("investment/invest")
    }

    async fn withdraw(&self, _request: WithdrawRequest) -> Result<MessageResponse> {
        self.ack("investment/withdraw")
    }

    async fn get_my_investments(&self) -> Result<Vec<Investment>> {
        self.record("investment/my-investments")?;
        Ok(Vec::new())
    }

    async fn submit_report(&self, _report: ReportSubmission) -> Result<ReportCreated> {
        self.record("reports/submit")?;
        Ok(ReportCreated {
            message: None,
            report_id: "r-1".to_string(),
        })
    }

    async fn get_my_reports(&self) -> Result<Vec<Report>> {
        self.record("reports/my-reports")?;
        Ok(Vec::new())
    }

    async fn reply_to_report(&self, _reply: ReportReply) -> Result<MessageResponse> {
        self.ack("reports/reply")
    }
}
