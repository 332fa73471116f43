//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::{env, net::IpAddr, str::FromStr};

/// Output format of the log subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to bind
    pub host: IpAddr,

    /// Port to bind
    pub port: u16,

    /// Largest accepted request body in bytes (default: 2MB)
    pub max_body_bytes: usize,

    /// Log output format
    pub log_format: LogFormat,

    /// Attach a permissive CORS layer
    pub cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8000,
            max_body_bytes: 2 * 1024 * 1024,
            log_format: LogFormat::Pretty,
            cors: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup. Unset keys keep
    /// their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Ok(Self {
            host: parse_or(&lookup, "CHECKOUT_HOST", defaults.host)?,
            port: parse_or(&lookup, "CHECKOUT_PORT", defaults.port)?,
            max_body_bytes: parse_or(&lookup, "CHECKOUT_MAX_BODY_BYTES", defaults.max_body_bytes)?,
            log_format: parse_or(&lookup, "CHECKOUT_LOG_FORMAT", defaults.log_format)?,
            cors: parse_or(&lookup, "CHECKOUT_CORS", defaults.cors)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(key.to_string())),
        None => Ok(default),
    }
}

/// Configuration error types.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
