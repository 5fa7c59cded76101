//! Server configuration.

use std::net::SocketAddr;

use crate::fare::{FeePolicy, InvalidFeePolicy};

/// Environment variable holding the bind address.
pub const ADDR_VAR: &str = "SUBWAY_ADDR";

/// Environment variable holding the fee policy name.
pub const FEE_POLICY_VAR: &str = "SUBWAY_FEE_POLICY";

/// Errors from reading the configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The bind address could not be parsed
    #[error("invalid SUBWAY_ADDR {value:?}: {source}")]
    InvalidAddr {
        value: String,
        source: std::net::AddrParseError,
    },

    /// The fee policy name is unknown
    #[error("invalid SUBWAY_FEE_POLICY: {0}")]
    InvalidFeePolicy(#[from] InvalidFeePolicy),
}

/// Configuration for the HTTP server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// How extra fees are accumulated across an itinerary.
    pub fee_policy: FeePolicy,
}

impl ServerConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through `lookup`, falling back to defaults for
    /// unset keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(ADDR_VAR) {
            config.addr = value
                .parse()
                .map_err(|source| ConfigError::InvalidAddr { value, source })?;
        }

        if let Some(value) = lookup(FEE_POLICY_VAR) {
            config.fee_policy = value.parse()?;
        }

        Ok(config)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            fee_policy: FeePolicy::default(),
        }
    }
}
