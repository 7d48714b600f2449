//! Startup configuration
//!
//! Resolved once from the environment and passed to the server bootstrap
//! as an immutable value.

use crate::error::ConfigError;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Environment variable holding the listen port
pub const PORT_VAR: &str = "PORT";

/// Port used when `PORT` is unset or empty
pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolves configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(PORT_VAR) {
            let raw = raw.trim();
            if !raw.is_empty() {
                config.port = raw.parse().map_err(|source| ConfigError::InvalidPort {
                    value: raw.to_string(),
                    source,
                })?;
            }
        }

        Ok(config)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
