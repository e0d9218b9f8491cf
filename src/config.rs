//! Configuration module
//!
//! Loads configuration from environment variables. Built once in `main` and
//! passed to whatever needs it.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;

/// Persistence backend selected at wiring time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(StorageBackend::Postgres),
            "memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::InvalidValue("STORAGE_BACKEND")),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(ConfigError::InvalidValue("LOG_FORMAT")),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Database connection URL (required for the Postgres backend)
    pub database_url: Option<String>,

    /// Maximum database connections in pool
    pub database_max_connections: u32,

    /// HTTP bind address
    pub listen_addr: SocketAddr,

    /// Verbose logging
    pub debug: bool,

    pub storage_backend: StorageBackend,

    /// Apply embedded migrations at startup
    pub run_migrations: bool,

    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage_backend: StorageBackend = lookup("STORAGE_BACKEND")
            .unwrap_or_else(|| "postgres".to_string())
            .parse()?;

        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());
        if storage_backend == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::MissingEnv("DATABASE_URL"));
        }

        let database_max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|| "10".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("DATABASE_MAX_CONNECTIONS"))?;

        let listen_addr = lookup("HTTP_LISTEN_HOST_PORT")
            .unwrap_or_else(|| "0.0.0.0:2090".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("HTTP_LISTEN_HOST_PORT"))?;

        let debug = parse_bool(lookup("DEBUG"), false, "DEBUG")?;
        let run_migrations = parse_bool(lookup("RUN_MIGRATIONS"), true, "RUN_MIGRATIONS")?;

        let log_format = lookup("LOG_FORMAT")
            .unwrap_or_else(|| "text".to_string())
            .parse()?;

        Ok(Self {
            database_url,
            database_max_connections,
            listen_addr,
            debug,
            storage_backend,
            run_migrations,
            log_format,
        })
    }

    /// Default tracing filter when `RUST_LOG` is not set
    pub fn default_log_filter(&self) -> &'static str {
        if self.debug {
            "ledger_api=debug,tower_http=debug"
        } else {
            "ledger_api=info,tower_http=info"
        }
    }
}

fn parse_bool(value: Option<String>, default: bool, name: &'static str) -> Result<bool, ConfigError> {
    match value.as_deref().map(str::to_ascii_lowercase).as_deref() {
        None | Some("") => Ok(default),
        Some("true") | Some("1") => Ok(true),
        Some("false") | Some("0") => Ok(false),
        Some(_) => Err(ConfigError::InvalidValue(name)),
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnv(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(&'static str),
}
