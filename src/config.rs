//! Service configuration loaded from environment variables

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::time::Duration;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0:8080";
const DEFAULT_MIN_CONNECTIONS: u32 = 1;
const DEFAULT_MAX_CONNECTIONS: u32 = 3;
const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} has an invalid value {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("DATABASE_URL is not a valid postgres URL")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

/// Top-level configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen address (env: HOST)
    pub host: String,
    pub database: DatabaseConfig,
}

/// Postgres connection settings
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Full connection URL (env: DATABASE_URL); overrides the individual parts
    pub url: Option<String>,
    pub hostname: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub database_name: String,
    pub ssl_mode: PgSslMode,
    pub min_connections: u32,
    pub max_connections: u32,
    pub idle_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from any key/value source
    ///
    /// Unset and empty values fall back to their defaults.
    ///
    /// # Errors
    /// - InvalidValue: a numeric setting does not parse, or the SSL mode is
    ///   not one of `disable`, `prefer`, `require`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let database = DatabaseConfig {
            url: lookup("DATABASE_URL").filter(|v| !v.is_empty()),
            hostname: get("POSTGRES_HOSTNAME", "localhost"),
            port: parse(&lookup, "POSTGRES_PORT", 5432)?,
            user: get("POSTGRES_USER", "class_booking"),
            password: get("POSTGRES_PASSWORD", "class_booking"),
            database_name: get("POSTGRES_DATABASE_NAME", "class_booking"),
            ssl_mode: parse_ssl_mode(&get("POSTGRES_SSL_MODE", "disable"))?,
            min_connections: parse(&lookup, "POSTGRES_MIN_CONNECTIONS", DEFAULT_MIN_CONNECTIONS)?,
            max_connections: parse(&lookup, "POSTGRES_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            idle_timeout: Duration::from_secs(parse(
                &lookup,
                "POSTGRES_IDLE_TIMEOUT_SECS",
                DEFAULT_IDLE_TIMEOUT_SECS,
            )?),
        };

        Ok(Self {
            host: get("HOST", DEFAULT_HOST),
            database,
        })
    }
}

impl DatabaseConfig {
    /// Connection options, from `url` when set and from the parts otherwise
    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        if let Some(url) = &self.url {
            return url
                .parse::<PgConnectOptions>()
                .map_err(ConfigError::InvalidDatabaseUrl);
        }

        Ok(PgConnectOptions::new()
            .host(&self.hostname)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.database_name)
            .ssl_mode(self.ssl_mode))
    }

    /// Pool minimum, never above the maximum
    pub fn effective_min_connections(&self) -> u32 {
        self.min_connections.min(self.max_connections)
    }
}

fn parse<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key).filter(|v| !v.is_empty()) {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value }),
    }
}

fn parse_ssl_mode(value: &str) -> Result<PgSslMode, ConfigError> {
    match value {
        "disable" | "none" => Ok(PgSslMode::Disable),
        "prefer" => Ok(PgSslMode::Prefer),
        "require" => Ok(PgSslMode::Require),
        other => Err(ConfigError::InvalidValue {
            key: "POSTGRES_SSL_MODE",
            value: other.to_string(),
        }),
    }
}
