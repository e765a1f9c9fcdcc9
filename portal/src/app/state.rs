//! # Application State
//!
//! Everything the UI renders, behind one `Arc<RwLock<AppState>>`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shared::{CryptoAsset, CryptoPriceSnapshot, UserProfile};
use uuid::Uuid;

use crate::auth::{AuthForm, AuthState};
use crate::core::service::ApiService;

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// Toast-style message queued for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

/// Investment calculator inputs on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    /// USD amount as typed
    pub amount: String,
    pub asset: CryptoAsset,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            amount: "1000".to_string(),
            asset: CryptoAsset::Btc,
        }
    }
}

impl CalculatorState {
    /// Parsed USD amount; `None` for blank, negative or non-numeric input.
    pub fn amount_usd(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Global application state
pub struct AppState {
    /// Authentication state machine
    pub auth: AuthState,
    /// Auth dialog fields
    pub form: AuthForm,
    /// Whether the auth dialog is shown
    pub dialog_open: bool,
    /// Request context: anonymous, or carrying the session's bearer token
    pub api_client: Arc<dyn ApiService>,
    /// Correlates the in-flight submission with its completion
    pub pending_submission: Option<Uuid>,
    /// Last good price snapshot
    pub prices: CryptoPriceSnapshot,
    /// When `prices` was last replaced by a fetch
    pub prices_updated_at: Option<DateTime<Utc>>,
    pub calculator: CalculatorState,
    /// Pending notifications to display
    pub notifications: Vec<Notification>,
}

impl AppState {
    pub fn new(auth: AuthState, api_client: Arc<dyn ApiService>) -> Self {
        Self {
            auth,
            form: AuthForm::default(),
            dialog_open: false,
            api_client,
            pending_submission: None,
            prices: CryptoPriceSnapshot::default(),
            prices_updated_at: None,
            calculator: CalculatorState::default(),
            notifications: Vec::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn current_user(&self) -> Option<&UserProfile> {
        self.auth.session().map(|s| &s.user)
    }

    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) {
        self.notifications.push(Notification {
            level,
            message: message.into(),
        });
    }

    /// Take all queued notifications.
    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.notifications)
    }
}
