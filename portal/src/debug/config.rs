//! Logging configuration from environment variables

use std::path::PathBuf;

use crate::utils::envs;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "portal=info,warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Directory holding the rotated log files
    pub log_dir: PathBuf,
    /// File name prefix; the appender adds the date
    pub log_file_name: String,
    /// Filter directive (e.g. "portal=debug,info")
    pub log_level: String,
    /// Mirror log lines to stderr
    pub log_to_stderr: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from("logs"),
            log_file_name: "portal.log".to_string(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            log_to_stderr: true,
        }
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| envs::get_env(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&'static str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            log_dir: lookup("PORTAL_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.log_dir),
            log_file_name: defaults.log_file_name,
            log_level: lookup("RUST_LOG")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.log_level),
            log_to_stderr: lookup("PORTAL_LOG_STDERR")
                .map(|v| v != "0")
                .unwrap_or(defaults.log_to_stderr),
        }
    }

    /// Path of today's log file, before the appender's date suffix
    pub fn log_file(&self) -> PathBuf {
        self.log_dir.join(&self.log_file_name)
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.log_level.contains("trace")
    }
}
