//! # Auth Dialog Form
//!
//! Transient field values for the auth dialog and the per-mode validation
//! that runs before any network call.

use shared::{
    ForgotPasswordRequest, LoginRequest, RegisterRequest, ResendOtpRequest, ResetPasswordRequest,
    VerifyOtpRequest,
};

use super::state::PendingRequest;
use crate::core::error::AppError;
use crate::utils::validation::{
    validate_email, validate_otp, validate_password_match, validate_required,
};

/// Maximum OTP length accepted by the input field
pub const OTP_MAX_LEN: usize = 6;

/// Field values of the auth dialog. Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub email: String,
    pub password: String,
    pub name: String,
    pub phone: String,
    pub confirm_password: String,
    pub otp: String,
    pub new_password: String,
    /// Inline error shown above the form
    pub error: Option<String>,
    /// Inline confirmation (registration sent, account verified, ...)
    pub notice: Option<String>,
}

/// Validated request, ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreparedRequest {
    Login(LoginRequest),
    Register(RegisterRequest),
    VerifyOtp(VerifyOtpRequest),
    ResendOtp(ResendOtpRequest),
    ForgotPassword(ForgotPasswordRequest),
    ResetPassword(ResetPasswordRequest),
}

impl PreparedRequest {
    pub fn kind(&self) -> PendingRequest {
        match self {
            PreparedRequest::Login(_) => PendingRequest::Login,
            PreparedRequest::Register(_) => PendingRequest::Register,
            PreparedRequest::VerifyOtp(_) => PendingRequest::VerifyOtp,
            PreparedRequest::ResendOtp(_) => PendingRequest::ResendOtp,
            PreparedRequest::ForgotPassword(_) => PendingRequest::ForgotPassword,
            PreparedRequest::ResetPassword(_) => PendingRequest::ResetPassword,
        }
    }
}

impl AuthForm {
    /// Empty form.
    pub fn clear(&mut self) {
        *self = AuthForm::default();
    }

    /// Drop OTP and password fields, keep email/name/phone.
    pub fn clear_secrets(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
        self.otp.clear();
        self.new_password.clear();
    }

    /// Sign-in/sign-up toggle: keep the email, drop everything else.
    pub fn reset_for_mode_switch(&mut self) {
        let email = std::mem::take(&mut self.email);
        self.clear();
        self.email = email;
    }

    /// Set the OTP field from user input, keeping digits only.
    pub fn set_otp(&mut self, input: &str) {
        self.otp = input
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(OTP_MAX_LEN)
            .collect();
    }

    fn email(&self) -> String {
        self.email.trim().to_string()
    }

    /// Validate the fields `request` needs and build its payload.
    pub fn prepare(&self, request: PendingRequest) -> Result<PreparedRequest, AppError> {
        match request {
            PendingRequest::Login => {
                validate_email(&self.email).into_result()?;
                validate_required(&self.password, "Password").into_result()?;
                Ok(PreparedRequest::Login(LoginRequest {
                    email: self.email(),
                    password: self.password.clone(),
                }))
            }
            PendingRequest::Register => {
                validate_required(&self.name, "Full name").into_result()?;
                validate_email(&self.email).into_result()?;
                validate_required(&self.password, "Password").into_result()?;
                validate_required(&self.confirm_password, "Password confirmation").into_result()?;
                validate_password_match(&self.password, &self.confirm_password).into_result()?;
                let phone = self.phone.trim();
                Ok(PreparedRequest::Register(RegisterRequest {
                    name: self.name.trim().to_string(),
                    email: self.email(),
                    phone: (!phone.is_empty()).then(|| phone.to_string()),
                    password: self.password.clone(),
                }))
            }
            PendingRequest::VerifyOtp => {
                validate_email(&self.email).into_result()?;
                validate_otp(&self.otp).into_result()?;
                Ok(PreparedRequest::VerifyOtp(VerifyOtpRequest {
                    email: self.email(),
                    otp: self.otp.clone(),
                }))
            }
            PendingRequest::ResendOtp => {
                validate_email(&self.email).into_result()?;
                Ok(PreparedRequest::ResendOtp(ResendOtpRequest { email: self.email() }))
            }
            PendingRequest::ForgotPassword => {
                validate_email(&self.email).into_result()?;
                Ok(PreparedRequest::ForgotPassword(ForgotPasswordRequest { email: self.email() }))
            }
            PendingRequest::ResetPassword => {
                validate_email(&self.email).into_result()?;
                validate_otp(&self.otp).into_result()?;
                validate_required(&self.new_password, "New password").into_result()?;
                validate_required(&self.confirm_password, "Password confirmation").into_result()?;
                validate_password_match(&self.new_password, &self.confirm_password).into_result()?;
                Ok(PreparedRequest::ResetPassword(ResetPasswordRequest {
                    email: self.email(),
                    otp: self.otp.clone(),
                    new_password: self.new_password.clone(),
                }))
            }
        }
    }
}
