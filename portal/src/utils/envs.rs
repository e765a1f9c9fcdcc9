//! # Environment Variables
//!
//! Utilities for reading and parsing environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

/// Get an environment variable by name.
pub fn get_env(name: &'static str) -> Result<String, EnvError> {
    env::var(name).map_err(|_| EnvError::MissingEnv(name))
}

/// Parse `raw` if present, otherwise fall back to `default`.
///
/// Blank values count as absent.
pub fn parse_or<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T, EnvError> {
    match raw.as_deref().map(str::trim) {
        Some(val) if !val.is_empty() => parse_value(name, val),
        _ => Ok(default),
    }
}

fn parse_value<T: FromStr>(name: &'static str, val: &str) -> Result<T, EnvError> {
    val.trim().parse::<T>().map_err(|_| EnvError::WrongFormat {
        name,
        value: val.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvError {
    #[error("{0} is not set")]
    MissingEnv(&'static str),
    #[error("{name} has an invalid value: {value:?}")]
    WrongFormat { name: &'static str, value: String },
}
