//! # Application Orchestrator
//!
//! The [`App`] struct ties the UI, background tasks and shared state together.
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │                   Main Thread (egui)                      │
//! │  App                                                      │
//! │  - on_tick()          drain AppEvents, apply to state     │
//! │  - handle_*_click()   user actions -> handlers::auth      │
//! │                                                           │
//! │  State: Arc<RwLock<AppState>>  (locks held briefly)       │
//! └──────────────────────────┬────────────────────────────────┘
//!                            │ async_channel (unbounded)
//! ┌──────────────────────────▼────────────────────────────────┐
//! │                  Tokio worker threads                     │
//! │  - auth submissions    (handlers::auth)                   │
//! │  - price feed          (tasks::market::PriceFeed)         │
//! │  - session check       (tasks::account::verify_session)   │
//! └───────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Startup
//!
//! [`App::bootstrap`] reads the persisted session once. A restored session
//! starts the app authenticated, with the API client already carrying the
//! bearer token; no login call is made. [`App::start`] then launches the
//! price feed and, for a restored session, a background profile check.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use portal::app::App;
//! use portal::config::Config;
//! use portal::services::api::ApiClient;
//! use portal::services::session_store::FileSessionStore;
//!
//! # async fn run() {
//! let config = Config::default();
//! let api = Arc::new(ApiClient::new(config.api_base_url(), config.request_timeout));
//! let store = Arc::new(FileSessionStore::open(&config.session_file));
//!
//! let mut app = App::bootstrap(&config, api, store);
//! app.start();
//! loop {
//!     app.on_tick();
//!     // render from app.state.read()
//! #   break;
//! }
//! # }
//! ```

mod event_handler;
mod events;
pub mod handlers;
mod state;
pub mod tasks;

pub use event_handler::SESSION_EXPIRED_MESSAGE;
pub use events::{AppEvent, AuthOutcome};
pub use state::*;

use std::sync::Arc;
use std::time::Duration;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::auth::{AuthState, EntryMode};
use crate::config::Config;
use crate::core::service::ApiService;
use crate::services::session_store::{load_session, SessionStore};
use tasks::market::PriceFeed;

/// Main application orchestrator.
pub struct App {
    /// Shared application state. Hold locks briefly.
    pub state: Arc<RwLock<AppState>>,

    /// Results from background tasks, drained in [`App::on_tick`]
    pub event_rx: Receiver<AppEvent>,

    event_tx: Sender<AppEvent>,

    /// Persisted credentials
    store: Arc<dyn SessionStore>,

    price_feed: Option<PriceFeed>,

    price_poll_interval: Duration,
}

impl App {
    /// Build the app, restoring a persisted session if there is one.
    ///
    /// `api` is the anonymous request context; a restored session swaps in
    /// a bearer-carrying one derived from it. Spawns nothing.
    pub fn bootstrap(config: &Config, api: Arc<dyn ApiService>, store: Arc<dyn SessionStore>) -> Self {
        let (auth, api_client) = match load_session(store.as_ref()) {
            Some(session) => {
                let client = api.with_bearer(Some(session.token.clone()));
                (AuthState::Authenticated(session), client)
            }
            None => (AuthState::default(), api.with_bearer(None)),
        };

        tracing::info!(
            authenticated = auth.is_authenticated(),
            "App state initialized"
        );

        let (event_tx, event_rx) = unbounded();

        App {
            state: Arc::new(RwLock::new(AppState::new(auth, api_client))),
            event_rx,
            event_tx,
            store,
            price_feed: None,
            price_poll_interval: config.price_poll_interval,
        }
    }

    /// Launch background work. Must run inside a Tokio runtime.
    pub fn start(&mut self) {
        let (api, restored_token) = {
            let state = self.state.read();
            (
                state.api_client.clone(),
                state.auth.session().map(|s| s.token.clone()),
            )
        };

        if self.price_feed.is_none() {
            self.price_feed = Some(PriceFeed::spawn(
                api.with_bearer(None),
                self.price_poll_interval,
                self.event_tx.clone(),
            ));
        }

        if let Some(token) = restored_token {
            tasks::account::verify_session(api, token, self.event_tx.clone());
        }
    }

    /// Stop the price feed. Dropping the app does the same.
    pub fn stop(&mut self) {
        if let Some(feed) = self.price_feed.take() {
            feed.stop();
            tracing::info!("Price feed stopped");
        }
    }

    /// Called every frame: apply all pending background results.
    pub fn on_tick(&mut self) {
        let mut processed = 0u32;
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
            processed += 1;
        }
        if processed > 0 {
            tracing::trace!(events = processed, "on_tick processed events");
        }
    }

    fn handle_event(&mut self, event: AppEvent) {
        use event_handler::AppEventHandler;
        self.handle_event_impl(event);
    }

    // ========== GUI Action Methods - Delegating to Handlers ==========

    pub fn handle_open_auth_dialog(&mut self, mode: EntryMode) {
        handlers::auth::open_dialog(self.state.clone(), mode);
    }

    pub fn handle_close_auth_dialog(&mut self) {
        handlers::auth::close_dialog(self.state.clone());
    }

    pub fn handle_switch_entry_mode(&mut self) {
        handlers::auth::switch_entry_mode(self.state.clone());
    }

    pub fn handle_forgot_password_click(&mut self) {
        handlers::auth::request_forgot_password(self.state.clone());
    }

    pub fn handle_back_to_sign_in(&mut self) {
        handlers::auth::back_to_sign_in(self.state.clone());
    }

    /// Submit the current form. `false` when nothing was sent.
    pub fn handle_submit_click(&mut self) -> bool {
        handlers::auth::submit(self.state.clone(), self.event_tx.clone())
    }

    pub fn handle_resend_otp_click(&mut self) -> bool {
        handlers::auth::resend_otp(self.state.clone(), self.event_tx.clone())
    }

    pub fn handle_logout_click(&mut self) {
        handlers::auth::logout(self.state.clone(), self.store.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{AuthForm, PendingRequest};
    use crate::core::error::AppError;
    use crate::core::mock::{sample_user, MockApi};
    use crate::services::session_store::{MemorySessionStore, TOKEN_KEY, USER_KEY};
    use shared::{format_crypto_amount, CryptoAsset, CryptoPriceSnapshot, LoginResponse, UserProfile};
    use uuid::Uuid;

    fn user_json() -> String {
        serde_json::to_string(&sample_user()).unwrap()
    }

    fn boot(api: &MockApi, store: &Arc<MemorySessionStore>) -> App {
        App::bootstrap(&Config::default(), Arc::new(api.clone()), store.clone())
    }

    fn restored_store() -> Arc<MemorySessionStore> {
        let user = user_json();
        Arc::new(MemorySessionStore::with_entries([
            (TOKEN_KEY, "jwt-stored"),
            (USER_KEY, user.as_str()),
        ]))
    }

    fn edit_form(app: &App, edit: impl FnOnce(&mut AuthForm)) {
        edit(&mut app.state.write().form);
    }

    async fn next_event(app: &mut App) {
        let event = tokio::time::timeout(Duration::from_secs(2), app.event_rx.recv())
            .await
            .expect("event should arrive")
            .expect("channel should be open");
        app.handle_event(event);
    }

    fn auth(app: &App) -> AuthState {
        app.state.read().auth.clone()
    }

    #[test]
    fn test_bootstrap_restores_session_without_login() {
        let api = MockApi::new();
        let store = restored_store();

        for _ in 0..2 {
            let app = boot(&api, &store);
            let state = app.state.read();
            assert!(state.is_authenticated());
            assert_eq!(state.current_user(), Some(&sample_user()));
            assert_eq!(state.api_client.bearer().as_deref(), Some("jwt-stored"));
        }
        assert_eq!(api.count("login"), 0);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_bootstrap_discards_corrupt_profile() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::with_entries([
            (TOKEN_KEY, "jwt-stored"),
            (USER_KEY, "not-json{"),
        ]));

        let app = boot(&api, &store);
        assert_eq!(auth(&app), AuthState::Anonymous(EntryMode::SignIn));
        assert!(app.state.read().api_client.bearer().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());
    }

    #[tokio::test]
    async fn test_sign_up_round_trip() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignUp);
        edit_form(&app, |form| {
            form.name = "Bob".to_string();
            form.email = "bob@example.com".to_string();
            form.phone = "+1 555 0100".to_string();
            form.password = "Secret123".to_string();
            form.confirm_password = "Secret123".to_string();
        });
        assert!(app.handle_submit_click());
        assert_eq!(auth(&app), AuthState::Submitting(PendingRequest::Register));
        next_event(&mut app).await;
        assert_eq!(auth(&app), AuthState::AwaitingOtp);
        assert!(app.state.read().form.notice.is_some());

        edit_form(&app, |form| form.set_otp("123456"));
        assert!(app.handle_submit_click());
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
        assert!(!state.is_authenticated());
        assert!(state.form.otp.is_empty());
        assert!(state.form.password.is_empty());
        assert!(state.form.confirm_password.is_empty());
        assert_eq!(state.form.email, "bob@example.com");
        assert_eq!(api.count("register"), 1);
        assert_eq!(api.count("verify-otp"), 1);
        assert_eq!(api.count("login"), 0);
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_sign_up_password_mismatch_never_calls_backend() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignUp);
        edit_form(&app, |form| {
            form.name = "Bob".to_string();
            form.email = "bob@example.com".to_string();
            form.password = "Secret123".to_string();
            form.confirm_password = "Secret124".to_string();
        });

        assert!(!app.handle_submit_click());
        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignUp));
        assert_eq!(state.form.error.as_deref(), Some("Passwords do not match"));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_reset_password_mismatch_never_calls_backend() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        app.handle_forgot_password_click();
        edit_form(&app, |form| form.email = "alice@example.com".to_string());
        assert!(app.handle_submit_click());
        next_event(&mut app).await;
        assert_eq!(auth(&app), AuthState::ResettingPassword);

        edit_form(&app, |form| {
            form.set_otp("654321");
            form.new_password = "NewSecret1".to_string();
            form.confirm_password = "NewSecret2".to_string();
        });
        assert!(!app.handle_submit_click());

        assert_eq!(auth(&app), AuthState::ResettingPassword);
        assert_eq!(
            app.state.read().form.error.as_deref(),
            Some("Passwords do not match")
        );
        assert_eq!(api.count("reset-password"), 0);
    }

    #[tokio::test]
    async fn test_password_reset_completes_to_sign_in() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        app.handle_forgot_password_click();
        edit_form(&app, |form| form.email = "alice@example.com".to_string());
        app.handle_submit_click();
        next_event(&mut app).await;

        edit_form(&app, |form| {
            form.set_otp("654321");
            form.new_password = "NewSecret1".to_string();
            form.confirm_password = "NewSecret1".to_string();
        });
        assert!(app.handle_submit_click());
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
        assert!(state.form.new_password.is_empty());
        assert!(state.form.otp.is_empty());
        assert_eq!(api.count("reset-password"), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_state_and_bearer() {
        let api = MockApi::new();
        let store = restored_store();
        let mut app = boot(&api, &store);
        assert!(app.state.read().is_authenticated());

        app.handle_logout_click();

        let api_client = {
            let state = app.state.read();
            assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
            assert!(state.api_client.bearer().is_none());
            state.api_client.clone()
        };
        assert!(store.get(TOKEN_KEY).is_none());
        assert!(store.get(USER_KEY).is_none());

        api_client.get_my_investments().await.unwrap();
        let last = api.calls().pop().expect("call recorded");
        assert_eq!(last.endpoint, "investment/my-investments");
        assert_eq!(last.bearer, None);
    }

    #[tokio::test]
    async fn test_double_submit_issues_one_login() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        edit_form(&app, |form| {
            form.email = "alice@example.com".to_string();
            form.password = "Secret123".to_string();
        });

        assert!(app.handle_submit_click());
        assert!(!app.handle_submit_click());
        next_event(&mut app).await;

        assert_eq!(api.count("login"), 1);
        let state = app.state.read();
        assert!(state.is_authenticated());
        assert!(!state.dialog_open);
        assert_eq!(state.api_client.bearer().as_deref(), Some("jwt-fresh"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("jwt-fresh"));
        assert!(store.get(USER_KEY).is_some());
    }

    #[tokio::test]
    async fn test_login_rejection_shows_backend_detail() {
        let api = MockApi::new();
        api.fail(
            "login",
            AppError::Api {
                status: 401,
                message: Some("Invalid credentials".to_string()),
            },
        );
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        edit_form(&app, |form| {
            form.email = "alice@example.com".to_string();
            form.password = "wrong".to_string();
        });
        app.handle_submit_click();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
        assert_eq!(state.form.error.as_deref(), Some("Invalid credentials"));
        assert!(state.dialog_open);
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_login_without_token_is_rejected() {
        let api = MockApi::new();
        api.set_login(Ok(LoginResponse {
            access_token: None,
            token_type: None,
            user: sample_user(),
        }));
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        edit_form(&app, |form| {
            form.email = "alice@example.com".to_string();
            form.password = "Secret123".to_string();
        });
        app.handle_submit_click();
        next_event(&mut app).await;

        let state = app.state.read();
        assert!(!state.is_authenticated());
        assert_eq!(state.form.error.as_deref(), Some("An error occurred"));
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_stale_completion_is_dropped() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        edit_form(&app, |form| {
            form.email = "alice@example.com".to_string();
            form.password = "Secret123".to_string();
        });
        app.handle_submit_click();
        app.state.write().pending_submission = Some(Uuid::new_v4());
        next_event(&mut app).await;

        assert_eq!(auth(&app), AuthState::Submitting(PendingRequest::Login));
        assert!(store.get(TOKEN_KEY).is_none());
    }

    #[tokio::test]
    async fn test_expired_restored_session_signs_out() {
        let api = MockApi::new();
        api.set_profile(Err(AppError::Api {
            status: 401,
            message: Some("Invalid token".to_string()),
        }));
        let store = restored_store();
        let mut app = boot(&api, &store);

        app.start();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
        assert!(state.dialog_open);
        assert_eq!(state.form.error.as_deref(), Some(SESSION_EXPIRED_MESSAGE));
        assert!(state.api_client.bearer().is_none());
        assert!(store.get(TOKEN_KEY).is_none());
        assert_eq!(api.count("login"), 0);
    }

    #[tokio::test]
    async fn test_restored_session_refreshes_profile() {
        let api = MockApi::new();
        let mut fresh = sample_user();
        fresh.total_investment = 12_500.0;
        fresh.active_investments = 2;
        api.set_profile(Ok(fresh.clone().into()));
        let store = restored_store();
        let mut app = boot(&api, &store);

        app.start();
        next_event(&mut app).await;

        let state = app.state.read();
        assert_eq!(state.current_user(), Some(&fresh));
        assert_eq!(state.api_client.bearer().as_deref(), Some("jwt-stored"));
        let profile_call = api
            .calls()
            .into_iter()
            .find(|c| c.endpoint == "user/profile")
            .expect("profile fetched");
        assert_eq!(profile_call.bearer.as_deref(), Some("jwt-stored"));
    }

    #[tokio::test]
    async fn test_session_check_keeps_admin_flag() {
        let api = MockApi::new();
        let profile_json = r#"{
            "id": "u-1",
            "name": "Alice",
            "email": "alice@example.com",
            "phone": null,
            "is_verified": true,
            "total_investment": 5000,
            "total_returns": 250,
            "active_investments": 3,
            "created_at": "2024-05-01T10:00:00"
        }"#;
        api.set_profile(Ok(serde_json::from_str(profile_json).unwrap()));

        let admin = UserProfile {
            is_admin: true,
            ..sample_user()
        };
        let admin_json = serde_json::to_string(&admin).unwrap();
        let store = Arc::new(MemorySessionStore::with_entries([
            (TOKEN_KEY, "jwt-stored"),
            (USER_KEY, admin_json.as_str()),
        ]));
        let mut app = boot(&api, &store);

        app.start();
        next_event(&mut app).await;

        {
            let state = app.state.read();
            let user = state.current_user().expect("still signed in");
            assert!(user.is_admin);
            assert_eq!(user.role(), "admin");
            assert_eq!(user.total_investment, 5000.0);
            assert_eq!(user.active_investments, 3);
        }
        let persisted: UserProfile =
            serde_json::from_str(&store.get(USER_KEY).expect("profile persisted")).unwrap();
        assert!(persisted.is_admin);
        assert_eq!(persisted.total_investment, 5000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_price_fetch_keeps_last_snapshot() {
        let api = MockApi::new();
        let fetched = CryptoPriceSnapshot {
            btc: 60_000.0,
            eth: 3_500.0,
            usdt: 1.0,
        };
        api.push_prices(Ok(fetched));
        api.push_prices(Err(AppError::Network("connection refused".to_string())));

        let store = Arc::new(MemorySessionStore::new());
        let config = Config {
            price_poll_interval: Duration::from_millis(20),
            ..Config::default()
        };
        let mut app = App::bootstrap(&config, Arc::new(api.clone()), store);
        app.start();

        next_event(&mut app).await;
        assert_eq!(app.state.read().prices, fetched);
        let updated_at = app.state.read().prices_updated_at;
        assert!(updated_at.is_some());

        tokio::time::sleep(Duration::from_millis(120)).await;
        app.on_tick();
        assert!(api.count("crypto-prices") >= 2);
        assert_eq!(app.state.read().prices, fetched);
        assert_eq!(app.state.read().prices_updated_at, updated_at);

        app.stop();
    }

    #[tokio::test(start_paused = true)]
    async fn test_price_feed_stops() {
        let api = MockApi::new();
        let (tx, _rx) = unbounded();
        let feed = PriceFeed::spawn(Arc::new(api.clone()), Duration::from_millis(10), tx);
        tokio::time::sleep(Duration::from_millis(30)).await;
        feed.stop();
        tokio::time::sleep(Duration::from_millis(20)).await;
        assert!(!feed.is_running());

        let calls = api.count("crypto-prices");
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(api.count("crypto-prices"), calls);
    }

    #[tokio::test]
    async fn test_refresh_prices_failure_is_none() {
        let api = MockApi::new();
        assert_eq!(tasks::market::refresh_prices(&api).await, None);
    }

    #[test]
    fn test_dashboard_conversion_uses_current_snapshot() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let app = boot(&api, &store);
        let state = app.state.read();

        let amount = state.calculator.amount_usd().unwrap();
        assert_eq!(format_crypto_amount(amount, CryptoAsset::Btc, &state.prices), "0.02000000");
        assert_eq!(format_crypto_amount(amount, CryptoAsset::Usdt, &state.prices), "1000.00");
    }

    #[test]
    fn test_dialog_close_resets_flow() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        app.handle_forgot_password_click();
        edit_form(&app, |form| form.email = "alice@example.com".to_string());
        app.handle_close_auth_dialog();

        let state = app.state.read();
        assert!(!state.dialog_open);
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignIn));
        assert!(state.form.email.is_empty());
    }

    #[test]
    fn test_switch_entry_mode_keeps_email() {
        let api = MockApi::new();
        let store = Arc::new(MemorySessionStore::new());
        let mut app = boot(&api, &store);

        app.handle_open_auth_dialog(EntryMode::SignIn);
        edit_form(&app, |form| {
            form.email = "alice@example.com".to_string();
            form.password = "Secret123".to_string();
        });
        app.handle_switch_entry_mode();

        let state = app.state.read();
        assert_eq!(state.auth, AuthState::Anonymous(EntryMode::SignUp));
        assert_eq!(state.form.email, "alice@example.com");
        assert!(state.form.password.is_empty());
    }
}
