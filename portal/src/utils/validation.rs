//! Validation utilities for user input

use crate::core::error::AppError;

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Convert into a `Result`, mapping failures to [`AppError::Validation`].
    pub fn into_result(self) -> Result<(), AppError> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

/// Validate that a required field is not blank
pub fn validate_required(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return ValidationResult::err(format!("{} is required", field));
    }
    ValidationResult::ok()
}

/// Validate email format
pub fn validate_email(email: &str) -> ValidationResult {
    let email = email.trim();
    if email.is_empty() {
        return ValidationResult::err("Email is required");
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return ValidationResult::err("Invalid email format");
    }

    if parts[0].is_empty() {
        return ValidationResult::err("Email username cannot be empty");
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return ValidationResult::err("Invalid email domain");
    }

    ValidationResult::ok()
}

/// Validate that a password and its confirmation match
pub fn validate_password_match(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::err("Passwords do not match");
    }
    ValidationResult::ok()
}

/// Validate a one-time password: digits only, 4 to 6 of them
pub fn validate_otp(otp: &str) -> ValidationResult {
    if otp.is_empty() {
        return ValidationResult::err("OTP is required");
    }

    if !otp.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::err("OTP must contain only digits");
    }

    if otp.len() < 4 || otp.len() > 6 {
        return ValidationResult::err("OTP must be 4 to 6 digits");
    }

    ValidationResult::ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(validate_email("test@example.com").is_valid);
        assert!(validate_email("user@domain.co.uk").is_valid);
        assert!(validate_email(" padded@example.com ").is_valid);
        assert!(!validate_email("").is_valid);
        assert!(!validate_email("invalid").is_valid);
        assert!(!validate_email("@example.com").is_valid);
        assert!(!validate_email("test@").is_valid);
        assert!(!validate_email("a@b@c.com").is_valid);
    }

    #[test]
    fn test_required_validation() {
        assert!(validate_required("Alice", "Name").is_valid);
        let result = validate_required("   ", "Name");
        assert!(!result.is_valid);
        assert_eq!(result.error.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_password_match() {
        assert!(validate_password_match("Secret123", "Secret123").is_valid);
        assert!(!validate_password_match("Secret123", "Secret124").is_valid);
    }

    #[test]
    fn test_otp_validation() {
        assert!(validate_otp("123456").is_valid);
        assert!(!validate_otp("").is_valid);
        assert!(!validate_otp("12a456").is_valid);
        assert!(!validate_otp("123").is_valid);
        assert!(!validate_otp("1234567").is_valid);
    }

    #[test]
    fn test_into_result() {
        assert!(validate_otp("123456").into_result().is_ok());
        assert_eq!(
            validate_password_match("a", "b").into_result(),
            Err(AppError::Validation("Passwords do not match".to_string()))
        );
    }
}
