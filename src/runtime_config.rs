//! # Runtime Configuration Module
//!
//! Environment variable based configuration, loaded once at process start and
//! then injected into [`OriginGuard`](crate::cors::OriginGuard) and the
//! server adapter.
//!
//! ## Environment Variables
//!
//! ### `ALLOWED_ORIGINS` (required)
//!
//! Space separated list of origins that receive CORS headers, compared by
//! exact string match:
//!
//! ```bash
//! export ALLOWED_ORIGINS="https://app.example https://admin.example"
//! ```
//!
//! A missing value is a deployment defect: loading fails with
//! [`ConfigError::MissingAllowedOrigins`] and the service does not start.
//!
//! ### `SESSIONGATE_STACK_SIZE`
//!
//! Stack size for the coroutines serving HTTP requests. Accepts decimal
//! (`16384`) or hexadecimal (`0x4000`). Default: `0x4000` (16 KB).
//!
//! ## Usage
//!
//! ```rust
//! use sessiongate::runtime_config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_allowed_origins("https://ok.example");
//! assert_eq!(config.allowed_origins, vec!["https://ok.example".to_string()]);
//! ```

use std::env;
use std::fmt;

/// Name of the allow-list variable.
pub const ALLOWED_ORIGINS_VAR: &str = "ALLOWED_ORIGINS";
/// Name of the coroutine stack size variable.
pub const STACK_SIZE_VAR: &str = "SESSIONGATE_STACK_SIZE";

const DEFAULT_STACK_SIZE: usize = 0x4000;

/// Configuration loading error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `ALLOWED_ORIGINS` is not set
    MissingAllowedOrigins,
    /// `ALLOWED_ORIGINS` is set but is not valid unicode
    InvalidAllowedOrigins,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingAllowedOrigins => write!(
                f,
                "configuration error: {ALLOWED_ORIGINS_VAR} is not set. \
                Provide a space separated list of allowed origins."
            ),
            ConfigError::InvalidAllowedOrigins => write!(
                f,
                "configuration error: {ALLOWED_ORIGINS_VAR} is not valid unicode"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Result of looking up a single variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Present(String),
    NotUnicode,
    Missing,
}

impl From<Result<String, env::VarError>> for Lookup {
    fn from(res: Result<String, env::VarError>) -> Self {
        match res {
            Ok(v) => Lookup::Present(v),
            Err(env::VarError::NotUnicode(_)) => Lookup::NotUnicode,
            Err(env::VarError::NotPresent) => Lookup::Missing,
        }
    }
}

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Origins allowed to read responses cross-origin, in configured order
    pub allowed_origins: Vec<String>,
    /// Stack size for coroutines in bytes (default: 16 KB / 0x4000)
    pub stack_size: usize,
}

impl RuntimeConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `ALLOWED_ORIGINS` is missing or not unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).into())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when `ALLOWED_ORIGINS` is missing or not unicode.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Lookup,
    {
        let allowed_origins = match lookup(ALLOWED_ORIGINS_VAR) {
            Lookup::Present(raw) => split_origins(&raw),
            Lookup::NotUnicode => return Err(ConfigError::InvalidAllowedOrigins),
            Lookup::Missing => return Err(ConfigError::MissingAllowedOrigins),
        };
        let stack_size = match lookup(STACK_SIZE_VAR) {
            Lookup::Present(val) => parse_stack_size(&val),
            _ => DEFAULT_STACK_SIZE,
        };
        Ok(RuntimeConfig {
            allowed_origins,
            stack_size,
        })
    }

    /// Build a configuration from an explicit allow-list string.
    #[must_use]
    pub fn from_allowed_origins(raw: &str) -> Self {
        RuntimeConfig {
            allowed_origins: split_origins(raw),
            stack_size: DEFAULT_STACK_SIZE,
        }
    }
}

/// Split a space separated allow-list. Repeated spaces do not produce entries.
fn split_origins(raw: &str) -> Vec<String> {
    raw.split(' ')
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_stack_size(val: &str) -> usize {
    if let Some(hex) = val.strip_prefix("0x") {
        usize::from_str_radix(hex, 16).unwrap_or(DEFAULT_STACK_SIZE)
    } else {
        val.parse().unwrap_or(DEFAULT_STACK_SIZE)
    }
}
