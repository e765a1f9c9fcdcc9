use serde::{Deserialize, Deserializer, Serialize};

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Registration request (creates a pending, unverified account)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub password: String,
}

/// OTP verification request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Ask the backend to email a fresh verification OTP
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResendOtpRequest {
    pub email: String,
}

/// Forgot password request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Password reset request (OTP from the forgot-password email + new password)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub otp: String,
    pub new_password: String,
}

/// Login response.
///
/// Older backends answered with `{ user }` and a session cookie; the bearer
/// variant adds `access_token`. Both shapes deserialize, callers decide
/// whether a missing token is acceptable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    pub user: UserProfile,
}

/// Plain acknowledgement returned by register, verify-otp, forgot and reset
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// User profile as returned by the backend.
///
/// Login payloads omit several fields that `/user/profile` carries, so
/// everything except identity defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub total_investment: f64,
    #[serde(default)]
    pub total_returns: f64,
    #[serde(default)]
    pub active_investments: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl UserProfile {
    /// Role name, derived from `is_admin` when the backend does not send one.
    pub fn role(&self) -> &str {
        match self.role.as_deref() {
            Some(role) => role,
            None if self.is_admin => "admin",
            None => "user",
        }
    }
}

/// `/user/profile` payload.
///
/// The route does not send `is_admin` or `role`, so they stay `None` here
/// and [`UserProfile::refreshed`] keeps the values from login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub is_admin: Option<bool>,
    #[serde(default)]
    pub is_verified: Option<bool>,
    #[serde(default)]
    pub total_investment: f64,
    #[serde(default)]
    pub total_returns: f64,
    #[serde(default)]
    pub active_investments: u32,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl From<UserProfile> for ProfileResponse {
    fn from(user: UserProfile) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            role: user.role,
            is_admin: Some(user.is_admin),
            is_verified: None,
            total_investment: user.total_investment,
            total_returns: user.total_returns,
            active_investments: user.active_investments,
            created_at: user.created_at,
        }
    }
}

impl UserProfile {
    /// This profile updated with a `/user/profile` payload.
    ///
    /// Fields the payload omits keep their current value.
    pub fn refreshed(&self, fresh: ProfileResponse) -> UserProfile {
        UserProfile {
            id: fresh.id,
            name: fresh.name,
            email: fresh.email,
            phone: fresh.phone,
            role: fresh.role.or_else(|| self.role.clone()),
            is_admin: fresh.is_admin.unwrap_or(self.is_admin),
            total_investment: fresh.total_investment,
            total_returns: fresh.total_returns,
            active_investments: fresh.active_investments,
            created_at: fresh.created_at.or_else(|| self.created_at.clone()),
        }
    }
}

/// Error payload.
///
/// `detail` is a string for handled errors and a list of
/// `{ loc, msg, type }` objects for request validation failures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    #[serde(default, deserialize_with = "deserialize_detail")]
    pub detail: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawDetail {
    Text(String),
    Items(Vec<DetailItem>),
    Other(serde_json::Value),
}

#[derive(Deserialize)]
struct DetailItem {
    #[serde(default)]
    msg: Option<String>,
}

fn deserialize_detail<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawDetail>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawDetail::Text(text)) if !text.trim().is_empty() => Some(text),
        Some(RawDetail::Items(items)) => items.into_iter().find_map(|item| item.msg),
        _ => None,
    })
}
