use std::net::{AddrParseError, SocketAddr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid {var} value '{value}': {source}")]
    InvalidAddress {
        var: &'static str,
        value: String,
        #[source]
        source: AddrParseError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl ServerConfig {
    pub const ADDR_VAR: &'static str = "TRACE_CONNECT_ADDR";

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(Self::ADDR_VAR) {
            config.bind_addr = value.trim().parse().map_err(|source| ConfigError::InvalidAddress {
                var: Self::ADDR_VAR,
                value,
                source,
            })?;
        }
        Ok(config)
    }
}
