// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses listen address, store connection string, and runtime options from env vars
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! Environment-based configuration management for production deployment

use crate::constants::{defaults, env_config};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    #[must_use]
    pub const fn to_tracing_level(self) -> tracing::Level {
        match self {
            Self::Error => tracing::Level::ERROR,
            Self::Warn => tracing::Level::WARN,
            Self::Info => tracing::Level::INFO,
            Self::Debug => tracing::Level::DEBUG,
            Self::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    ///
    /// Accepts a bare level or the first directive of a `RUST_LOG` value
    /// such as `debug,hyper=warn`.
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        let level = s.split(',').next().unwrap_or_default().trim();
        match level.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Type-safe store location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database file
    SQLite {
        /// Path to the database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
}

impl DatabaseUrl {
    /// Parse from string
    ///
    /// `sqlite::memory:` selects the in-memory store, `sqlite:<path>` a file,
    /// and anything else is treated as a file path.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty string.
    pub fn parse_url(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            anyhow::bail!("{} must not be empty", env_config::DATABASE_URL);
        }

        let path_str = s.strip_prefix("sqlite://").or_else(|| s.strip_prefix("sqlite:"));
        match path_str {
            Some(":memory:") => Ok(Self::Memory),
            Some(path) => Ok(Self::SQLite {
                path: PathBuf::from(path),
            }),
            None => Ok(Self::SQLite {
                path: PathBuf::from(s),
            }),
        }
    }

    /// Convert to an sqlx connection string
    #[must_use]
    pub fn to_connection_string(&self) -> String {
        match self {
            Self::SQLite { path } => format!("sqlite:{}", path.display()),
            Self::Memory => "sqlite::memory:".to_owned(),
        }
    }

    /// Check if this is an in-memory database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }

    /// File path of an on-disk database
    #[must_use]
    pub fn file_path(&self) -> Option<&Path> {
        match self {
            Self::SQLite { path } => Some(path),
            Self::Memory => None,
        }
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from("./data/exercises.db"),
        }
    }
}

impl fmt::Display for DatabaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_connection_string())
    }
}

/// Store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Store location
    pub url: DatabaseUrl,
    /// Pool size for file databases (in-memory stores always use one connection)
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            max_connections: defaults::DATABASE_MAX_CONNECTIONS,
        }
    }
}

/// Cross-origin settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma separated origins, or `*` for any
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: defaults::CORS_ALLOWED_ORIGINS.to_owned(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address to bind
    pub host: String,
    /// HTTP API port
    pub http_port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Raw `RUST_LOG` directives (`log_level` is their first entry)
    pub log_filter: String,
    /// Deployment environment
    pub environment: Environment,
    /// Store configuration
    pub database: DatabaseConfig,
    /// CORS configuration
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: defaults::HOST.to_owned(),
            http_port: defaults::HTTP_PORT,
            log_level: LogLevel::default(),
            log_filter: LogLevel::default().to_string(),
            environment: Environment::default(),
            database: DatabaseConfig::default(),
            cors: CorsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Variables from a `.env` file in the working directory are loaded
    /// first; values already set in the process environment win.
    ///
    /// # Errors
    ///
    /// Returns an error if a port, pool size, or store URL cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let http_port = match env::var(env_config::HTTP_PORT).or_else(|_| env::var(env_config::PORT))
        {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("Invalid listen port '{raw}'"))?,
            Err(_) => defaults::HTTP_PORT,
        };

        let database_url = env_var_or(env_config::DATABASE_URL, defaults::DATABASE_URL);
        let max_connections = match env::var(env_config::DATABASE_MAX_CONNECTIONS) {
            Ok(raw) => raw.trim().parse::<u32>().with_context(|| {
                format!(
                    "Invalid {} '{raw}'",
                    env_config::DATABASE_MAX_CONNECTIONS
                )
            })?,
            Err(_) => defaults::DATABASE_MAX_CONNECTIONS,
        };

        let log_filter = env_var_or(env_config::RUST_LOG, "info");

        Ok(Self {
            host: env_var_or(env_config::HOST, defaults::HOST),
            http_port,
            log_level: LogLevel::from_str_or_default(&log_filter),
            log_filter,
            environment: Environment::from_str_or_default(&env_var_or(
                env_config::ENVIRONMENT,
                "development",
            )),
            database: DatabaseConfig {
                url: DatabaseUrl::parse_url(&database_url)
                    .with_context(|| format!("Invalid {}", env_config::DATABASE_URL))?,
                max_connections: max_connections.max(1),
            },
            cors: CorsConfig {
                allowed_origins: env_var_or(
                    env_config::CORS_ALLOWED_ORIGINS,
                    defaults::CORS_ALLOWED_ORIGINS,
                ),
            },
        })
    }

    /// `host:port` string for binding the listener
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// One-line summary for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Exercise Log Server configuration: environment={}, listen={}, database={}, pool={}, log_level={}, cors={}",
            self.environment,
            self.bind_address(),
            self.database.url,
            self.database.max_connections,
            self.log_level,
            self.cors.allowed_origins,
        )
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_url_parsing() {
        assert_eq!(
            DatabaseUrl::parse_url("sqlite::memory:").unwrap(),
            DatabaseUrl::Memory
        );
        assert_eq!(
            DatabaseUrl::parse_url("sqlite:./data/log.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("./data/log.db")
            }
        );
        assert_eq!(
            DatabaseUrl::parse_url("/var/lib/exercises.db").unwrap(),
            DatabaseUrl::SQLite {
                path: PathBuf::from("/var/lib/exercises.db")
            }
        );
        assert!(DatabaseUrl::parse_url("  ").is_err());
    }

    #[test]
    fn test_connection_string_round_trip() {
        let url = DatabaseUrl::parse_url("sqlite:exercises.db").unwrap();
        assert_eq!(url.to_connection_string(), "sqlite:exercises.db");
        assert_eq!(DatabaseUrl::Memory.to_connection_string(), "sqlite::memory:");
    }

    #[test]
    fn test_log_level_from_rust_log_directives() {
        assert_eq!(LogLevel::from_str_or_default("debug"), LogLevel::Debug);
        assert_eq!(
            LogLevel::from_str_or_default("warn,sqlx=info"),
            LogLevel::Warn
        );
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_summary_mentions_listen_address() {
        let config = ServerConfig::default();
        assert!(config.summary().contains("127.0.0.1:8081"));
    }
}
