//! Server configuration parsed from environment variables.
//!
//! Leptos options (output name, site root, reload port) come from the
//! workspace `[[workspace.metadata.leptos]]` table; this module only covers
//! the overrides an operator sets at deploy time.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::net::{Ipv4Addr, SocketAddr};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT value: {0:?}")]
    InvalidPort(String),
    #[error("SITE_ROOT is set but empty")]
    EmptySiteRoot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `pkg/` and the public assets. `None` keeps the
    /// Leptos default (`target/site`).
    pub site_root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, site_root: None }
    }
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SITE_ROOT`: static asset directory override
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("SITE_ROOT").ok().as_deref())
    }

    /// Same as [`ServerConfig::from_env`] over explicit values.
    pub fn from_vars(port: Option<&str>, site_root: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        let site_root = match site_root {
            None => None,
            Some(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptySiteRoot),
            Some(raw) => Some(PathBuf::from(raw.trim())),
        };
        Ok(Self { port, site_root })
    }

    /// All interfaces on the configured port.
    #[must_use]
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}
