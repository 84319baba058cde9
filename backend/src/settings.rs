//! Server settings loaded via OrthoConfig.
//!
//! Values layer defaults, configuration file, `BOARDGAMES_*` environment
//! variables and command-line flags, later sources winning.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_DB_CONNECTION_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_REPOSITORY_CALLS: bool = true;

/// Errors raised while interpreting loaded settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address {value:?}: {source}")]
    BindAddr {
        /// Offending value.
        value: String,
        /// Parser failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Runtime configuration for the board game server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BOARDGAMES")]
pub struct ServerSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. Without one the server keeps board games in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Seconds a request may wait for a pooled connection.
    pub db_connection_timeout_secs: Option<u64>,
    /// Wrap the repository in the logging decorator.
    pub log_repository_calls: Option<bool>,
}

impl ServerSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// [`SettingsError::BindAddr`] when the configured value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|source| SettingsError::BindAddr {
            value: raw.to_owned(),
            source,
        })
    }

    /// Configured database URL, if any, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, falling back to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
            .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Pool checkout timeout, falling back to 30 seconds.
    pub fn db_connection_timeout(&self) -> Duration {
        Duration::from_secs(
            self.db_connection_timeout_secs
                .unwrap_or(DEFAULT_DB_CONNECTION_TIMEOUT_SECS),
        )
    }

    /// Whether repository calls are logged, falling back to `true`.
    pub fn log_repository_calls(&self) -> bool {
        self.log_repository_calls
            .unwrap_or(DEFAULT_LOG_REPOSITORY_CALLS)
    }
}
