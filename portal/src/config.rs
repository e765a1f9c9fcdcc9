//! # Portal Configuration
//!
//! Configuration loaded from environment variables and validated on startup.
//! A `.env` file is loaded first by [`load_dotenv`]; real environment
//! variables take precedence over it.
//!
//! | Variable                   | Default                  | Valid range |
//! |----------------------------|--------------------------|-------------|
//! | `BACKEND_URL`              | `http://127.0.0.1:8001`  |             |
//! | `PRICE_POLL_INTERVAL_SECS` | `60`                     | 5-3600      |
//! | `REQUEST_TIMEOUT_SECS`     | `10`                     | 1-300       |
//! | `SESSION_FILE`             | `./cred-session.json`    |             |
//!
//! ```rust,no_run
//! use portal::config::Config;
//!
//! portal::config::load_dotenv()?;
//! let config = Config::from_env()?;
//! config.validate()?;
//! println!("talking to {}", config.api_base_url());
//! # Ok::<(), portal::core::AppError>(())
//! ```

use std::path::PathBuf;
use std::time::Duration;

use crate::core::error::{AppError, Result};
use crate::utils::envs::{self, EnvError};

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8001";
pub const DEFAULT_PRICE_POLL_SECS: u64 = 60;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = "./cred-session.json";

/// Runtime configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend origin. The REST API lives under `<backend_url>/api`.
    pub backend_url: String,

    /// Delay between price feed fetches
    pub price_poll_interval: Duration,

    /// Per-request timeout for backend calls
    pub request_timeout: Duration,

    /// Where the session token and profile are persisted
    pub session_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            price_poll_interval: Duration::from_secs(DEFAULT_PRICE_POLL_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

/// Load `.env` from the working directory or a parent into the process
/// environment. Returns the file used, or `None` when there is none.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(AppError::Config(format!("invalid .env file: {e}"))),
    }
}

impl From<EnvError> for AppError {
    fn from(e: EnvError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| envs::get_env(name).ok())
    }

    /// Load configuration through `lookup` (name -> value).
    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Result<Self> {
        let backend_url = lookup("BACKEND_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let poll_secs = envs::parse_or(
            "PRICE_POLL_INTERVAL_SECS",
            lookup("PRICE_POLL_INTERVAL_SECS"),
            DEFAULT_PRICE_POLL_SECS,
        )?;
        let timeout_secs = envs::parse_or(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        let session_file = lookup("SESSION_FILE")
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        Ok(Self {
            backend_url,
            price_poll_interval: Duration::from_secs(poll_secs),
            request_timeout: Duration::from_secs(timeout_secs),
            session_file,
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if !(self.backend_url.starts_with("http://") || self.backend_url.starts_with("https://")) {
            return Err(AppError::Config(format!(
                "BACKEND_URL must start with http:// or https:// (got {:?})",
                self.backend_url
            )));
        }

        let poll = self.price_poll_interval.as_secs();
        if !(5..=3600).contains(&poll) {
            return Err(AppError::Config(
                "PRICE_POLL_INTERVAL_SECS must be between 5 and 3600".to_string(),
            ));
        }

        let timeout = self.request_timeout.as_secs();
        if !(1..=300).contains(&timeout) {
            return Err(AppError::Config(
                "REQUEST_TIMEOUT_SECS must be between 1 and 300".to_string(),
            ));
        }

        Ok(())
    }

    /// REST base: `<backend_url>/api`, without a doubled slash.
    pub fn api_base_url(&self) -> String {
        format!("{}/api", self.backend_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&'static str, &str)]) -> impl Fn(&'static str) -> Option<String> {
        let map: HashMap<&'static str, String> =
            pairs.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.validate().is_ok());
        assert_eq!(config.api_base_url(), "http://127.0.0.1:8001/api");
    }

    #[test]
    fn test_values_from_lookup() {
        let config = Config::from_lookup(lookup_from(&[
            ("BACKEND_URL", "https://cred.example.com/"),
            ("PRICE_POLL_INTERVAL_SECS", "300"),
            ("REQUEST_TIMEOUT_SECS", "5"),
            ("SESSION_FILE", "/tmp/cred.json"),
        ]))
        .unwrap();

        assert_eq!(config.api_base_url(), "https://cred.example.com/api");
        assert_eq!(config.price_poll_interval, Duration::from_secs(300));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.session_file, PathBuf::from("/tmp/cred.json"));
    }

    #[test]
    fn test_values_from_dotenv_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env");
        std::fs::write(
            &path,
            "# portal settings\nBACKEND_URL=\"https://cred.example.com\"\nPRICE_POLL_INTERVAL_SECS=120\n",
        )
        .unwrap();

        let map: HashMap<String, String> = dotenvy::from_path_iter(&path)
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        let config = Config::from_lookup(|name| map.get(name).cloned()).unwrap();

        assert_eq!(config.api_base_url(), "https://cred.example.com/api");
        assert_eq!(config.price_poll_interval, Duration::from_secs(120));
        assert_eq!(config.request_timeout, Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS));
    }

    #[test]
    fn test_unparseable_number_is_config_error() {
        let err = Config::from_lookup(lookup_from(&[("REQUEST_TIMEOUT_SECS", "ten")])).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_validate_ranges() {
        let config = Config {
            price_poll_interval: Duration::from_secs(1),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            request_timeout: Duration::from_secs(0),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            backend_url: "cred.example.com".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
