//! Server configuration from environment variables.
//!
//! `HOST` / `PORT` bind the server (defaults 0.0.0.0:8080). `CHALLONGE_API_KEY`,
//! `CHALLONGE_BASE_URL` and `CHALLONGE_TIMEOUT_SECS` configure the upstream client.
//! `ALLOWED_ORIGIN` is sent as `Access-Control-Allow-Origin`.

use crate::challonge::DEFAULT_BASE_URL;
use std::time::Duration;

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("Invalid value for {var}: {value:?}")]
    Invalid { var: String, value: String },
}

/// Upstream Challonge settings.
#[derive(Debug, Clone)]
pub struct ChallongeConfig {
    pub base_url: String,
    /// Fallback key when a request does not carry its own `api_key`.
    pub api_key: Option<String>,
    pub timeout: Duration,
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub challonge: ChallongeConfig,
    pub allowed_origin: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_timeout_secs() -> u64 {
    15
}

fn default_allowed_origin() -> String {
    "*".to_string()
}

impl AppConfig {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load from any variable lookup. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(v) => parse_var("PORT", &v)?,
            None => default_port(),
        };
        let timeout_secs = match get("CHALLONGE_TIMEOUT_SECS") {
            Some(v) => parse_var("CHALLONGE_TIMEOUT_SECS", &v)?,
            None => default_timeout_secs(),
        };

        Ok(Self {
            host: get("HOST").unwrap_or_else(default_host),
            port,
            challonge: ChallongeConfig {
                base_url: get("CHALLONGE_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                api_key: get("CHALLONGE_API_KEY"),
                timeout: Duration::from_secs(timeout_secs),
            },
            allowed_origin: get("ALLOWED_ORIGIN").unwrap_or_else(default_allowed_origin),
        })
    }
}

fn parse_var<T: std::str::FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Invalid {
        var: var.to_string(),
        value: value.to_string(),
    })
}
