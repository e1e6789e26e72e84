//! Server configuration from environment variables.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::core::{CARD_LENGTH, MAX_PREFIX_LEN};

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An environment variable is set but cannot be used.
    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Runtime configuration of the HTTP service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Total length of generated numbers.
    pub card_length: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 8000,
            card_length: CARD_LENGTH,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the environment, reading `.env` if present.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `APP_HOST` | `0.0.0.0` |
    /// | `APP_PORT` | `8000` |
    /// | `CARD_LENGTH` | `16` |
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let host = lookup("APP_HOST").unwrap_or(defaults.host);
        let port = parse_or("APP_PORT", &lookup, defaults.port)?;
        let card_length = parse_or("CARD_LENGTH", &lookup, defaults.card_length)?;

        if card_length <= MAX_PREFIX_LEN {
            return Err(ConfigError::InvalidValue {
                key: "CARD_LENGTH".into(),
                message: format!("must be greater than {MAX_PREFIX_LEN}, got {card_length}"),
            });
        }

        Ok(Self {
            host,
            port,
            card_length,
        })
    }

    /// `host:port` string for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T, F>(key: &str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key: key.into(),
            message: format!("'{raw}': {e}"),
        }),
    }
}
