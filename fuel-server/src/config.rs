//! Server configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:5000";

/// Default data file, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// Default static asset directory.
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Errors reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An address variable did not parse
    #[error("invalid {var} {value:?}: {source}")]
    InvalidAddr {
        var: &'static str,
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the HTTP server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// Address to bind (`FUEL_ADDR`)
    pub addr: SocketAddr,

    /// Backing JSON file (`FUEL_DATA_FILE`)
    pub data_file: PathBuf,

    /// Static asset directory (`FUEL_STATIC_DIR`)
    pub static_dir: PathBuf,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let addr_value = lookup("FUEL_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                var: "FUEL_ADDR",
                value: addr_value.clone(),
                source,
            })?;

        Ok(Self {
            addr,
            data_file: lookup("FUEL_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE)),
            static_dir: lookup("FUEL_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
        })
    }
}
