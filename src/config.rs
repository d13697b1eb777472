//! Server configuration
//!
//! Read once at startup from environment variables.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::error::ConfigError;

pub const ADDRESS_VAR: &str = "BBQ_SALT_ADDRESS";
pub const PORT_VAR: &str = "BBQ_SALT_PORT";
/// Generic fallback honored by most hosting platforms
pub const FALLBACK_PORT_VAR: &str = "PORT";

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load using `lookup` to resolve variable names
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = non_empty(lookup(ADDRESS_VAR)) {
            config.address = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidAddress { var: ADDRESS_VAR, source })?;
        }

        let port = non_empty(lookup(PORT_VAR))
            .map(|raw| (PORT_VAR, raw))
            .or_else(|| non_empty(lookup(FALLBACK_PORT_VAR)).map(|raw| (FALLBACK_PORT_VAR, raw)));

        if let Some((var, raw)) = port {
            config.port = raw
                .trim()
                .parse()
                .map_err(|source| ConfigError::InvalidPort { var, source })?;
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.address, self.port)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
