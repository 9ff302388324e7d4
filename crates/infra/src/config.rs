//! Configuration loading and representation.
//!
//! Everything comes from environment variables with development defaults.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use showcase_catalog::card::DEFAULT_MARKETPLACE_LINK;

pub const ENV_BIND: &str = "SHOWCASE_BIND";
pub const ENV_DATA_ROOT: &str = "SHOWCASE_DATA_ROOT";
pub const ENV_REMOTE_BASE: &str = "SHOWCASE_REMOTE_BASE";
pub const ENV_BATCH_SIZE: &str = "SHOWCASE_BATCH_SIZE";
pub const ENV_REVEAL_DELAY_MS: &str = "SHOWCASE_REVEAL_DELAY_MS";
pub const ENV_MARKETPLACE_LINK: &str = "SHOWCASE_MARKETPLACE_LINK";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?} ({reason})")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    /// Directory containing `data/er/v73/resources`.
    pub data_root: PathBuf,
    /// Remote resource base tried before the local files, e.g.
    /// `http://localhost:3000/data/er/v73`.
    pub remote_base: Option<String>,
    pub batch_size: usize,
    pub reveal_delay: Duration,
    pub marketplace_link: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            data_root: PathBuf::from("."),
            remote_base: None,
            batch_size: 12,
            reveal_delay: Duration::from_millis(500),
            marketplace_link: DEFAULT_MARKETPLACE_LINK.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = match get(ENV_BIND) {
            Some(raw) => raw.parse().map_err(|e: std::net::AddrParseError| ConfigError::Invalid {
                key: ENV_BIND,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults.bind_addr,
        };

        let batch_size = match get(ENV_BATCH_SIZE) {
            Some(raw) => match raw.parse::<usize>() {
                Ok(0) => return Err(invalid(ENV_BATCH_SIZE, raw, "must be at least 1")),
                Ok(n) => n,
                Err(e) => return Err(invalid(ENV_BATCH_SIZE, raw, e.to_string())),
            },
            None => defaults.batch_size,
        };

        let reveal_delay = match get(ENV_REVEAL_DELAY_MS) {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| invalid(ENV_REVEAL_DELAY_MS, raw.clone(), e.to_string()))?,
            None => defaults.reveal_delay,
        };

        Ok(Self {
            bind_addr,
            data_root: get(ENV_DATA_ROOT).map(PathBuf::from).unwrap_or(defaults.data_root),
            remote_base: get(ENV_REMOTE_BASE),
            batch_size,
            reveal_delay,
            marketplace_link: get(ENV_MARKETPLACE_LINK).unwrap_or(defaults.marketplace_link),
        })
    }
}

fn invalid(key: &'static str, value: String, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        key,
        value,
        reason: reason.into(),
    }
}
