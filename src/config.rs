//! Server configuration read from environment variables.
//!
//! | Variable             | Default     | Meaning                              |
//! |----------------------|-------------|--------------------------------------|
//! | `HOST`               | `0.0.0.0`   | Listen address                       |
//! | `PORT`               | `5000`      | Listen port                          |
//! | `STORAGE_MODE`       | `in_memory` | `in_memory` or `postgres`            |
//! | `DATABASE_URL`       |             | Required when `STORAGE_MODE=postgres`|
//! | `DATABASE_POOL_SIZE` | `8`         | Maximum pooled connections           |
//! | `LOG_FORMAT`         | `pretty`    | `pretty` or `json`                   |

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// `STORAGE_MODE` is not recognised.
    #[error("invalid storage mode '{0}', expected 'in_memory' or 'postgres'")]
    InvalidStorageMode(String),

    /// `LOG_FORMAT` is not recognised.
    #[error("invalid log format '{0}', expected 'pretty' or 'json'")]
    InvalidLogFormat(String),

    /// `DATABASE_URL` is missing while `STORAGE_MODE=postgres`.
    #[error("DATABASE_URL is required when STORAGE_MODE=postgres")]
    MissingDatabaseUrl,

    /// A variable holds a value of the wrong shape.
    #[error("invalid value '{value}' for {variable}")]
    InvalidValue {
        /// Variable name.
        variable: &'static str,
        /// Offending value.
        value: String,
    },
}

/// Where tasks are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StorageMode {
    /// Process memory; lost on restart.
    #[default]
    InMemory,
    /// A `PostgreSQL` database.
    Postgres,
}

impl FromStr for StorageMode {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in_memory" | "inmemory" | "memory" => Ok(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Ok(Self::Postgres),
            _ => Err(ConfigurationError::InvalidStorageMode(value.to_owned())),
        }
    }
}

/// Log line layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigurationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(ConfigurationError::InvalidLogFormat(value.to_owned())),
        }
    }
}

/// Settings for the `taskboard` server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Socket address to listen on.
    pub listen: SocketAddr,
    /// Task store backend.
    pub storage_mode: StorageMode,
    /// Connection URL for the postgres backend.
    pub database_url: Option<String>,
    /// Maximum pooled database connections.
    pub pool_size: u32,
    /// Log output layout.
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 5000),
            storage_mode: StorageMode::InMemory,
            database_url: None,
            pool_size: 8,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for unrecognised or missing values.
    pub fn from_env() -> Result<Self, ConfigurationError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of
    /// a variable if it is set. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] for unrecognised or missing values.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigurationError> {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let host = read("HOST")
            .map(|value| parse_value::<IpAddr>("HOST", value))
            .transpose()?
            .unwrap_or_else(|| defaults.listen.ip());
        let port = read("PORT")
            .map(|value| parse_value::<u16>("PORT", value))
            .transpose()?
            .unwrap_or_else(|| defaults.listen.port());
        let storage_mode = read("STORAGE_MODE")
            .map(|value| value.parse::<StorageMode>())
            .transpose()?
            .unwrap_or_default();
        let pool_size = read("DATABASE_POOL_SIZE")
            .map(|value| parse_value::<u32>("DATABASE_POOL_SIZE", value))
            .transpose()?
            .unwrap_or(defaults.pool_size);
        let log_format = read("LOG_FORMAT")
            .map(|value| value.parse::<LogFormat>())
            .transpose()?
            .unwrap_or_default();
        let database_url = read("DATABASE_URL");

        if storage_mode == StorageMode::Postgres && database_url.is_none() {
            return Err(ConfigurationError::MissingDatabaseUrl);
        }
        if pool_size == 0 {
            return Err(ConfigurationError::InvalidValue {
                variable: "DATABASE_POOL_SIZE",
                value: pool_size.to_string(),
            });
        }

        Ok(Self {
            listen: SocketAddr::new(host, port),
            storage_mode,
            database_url,
            pool_size,
            log_format,
        })
    }
}

fn parse_value<T: FromStr>(variable: &'static str, value: String) -> Result<T, ConfigurationError> {
    value
        .parse()
        .map_err(|_| ConfigurationError::InvalidValue { variable, value })
}
