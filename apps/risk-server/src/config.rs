//! Application configuration loaded from environment variables.
//!
//! Loading is fail-fast: a variable that is set but invalid stops startup
//! with a clear error instead of silently falling back to the default.

use std::env;
use std::time::Duration;
use thiserror::Error;

/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default log filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default time allowed for in-flight requests to finish on shutdown.
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

/// Configuration errors that can occur during environment loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to parse port: {0}")]
    InvalidPort(#[from] std::num::ParseIntError),
}

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host to bind (`APP_HOST`).
    pub host: String,

    /// Port to bind (`APP_PORT`).
    pub port: u16,

    /// Log filter directive (`RUST_LOG`).
    pub rust_log: String,

    /// Drain period before a forced exit (`SHUTDOWN_GRACE_SECS`).
    pub shutdown_grace: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            rust_log: DEFAULT_LOG_FILTER.to_string(),
            shutdown_grace: Duration::from_secs(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let host = get("APP_HOST").unwrap_or(defaults.host);

        let port = match get("APP_PORT") {
            Some(raw) => raw.trim().parse::<u16>()?,
            None => defaults.port,
        };

        let rust_log = get("RUST_LOG").unwrap_or(defaults.rust_log);

        let shutdown_grace = match get("SHUTDOWN_GRACE_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|e| ConfigError::InvalidValue {
                        var: "SHUTDOWN_GRACE_SECS".to_string(),
                        message: e.to_string(),
                    })?;
                Duration::from_secs(secs)
            }
            None => defaults.shutdown_grace,
        };

        Ok(Self {
            host,
            port,
            rust_log,
            shutdown_grace,
        })
    }

    /// Get the server bind address as a socket address string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
