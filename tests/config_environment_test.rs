// ABOUTME: Unit tests for environment-driven server configuration
// ABOUTME: Validates defaults, port aliases, store URLs, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use exercise_log_server::config::{DatabaseUrl, Environment, LogLevel, ServerConfig};
use exercise_log_server::logging::LoggingConfig;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const VARS: &[&str] = &[
    "HOST",
    "HTTP_PORT",
    "PORT",
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "ENVIRONMENT",
    "RUST_LOG",
    "CORS_ALLOWED_ORIGINS",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
fn test_environment_parsing() {
    assert_eq!(
        Environment::from_str_or_default("PROD"),
        Environment::Production
    );
    assert_eq!(
        Environment::from_str_or_default("test"),
        Environment::Testing
    );
    assert_eq!(
        Environment::from_str_or_default("staging"),
        Environment::Development
    );
    assert!(Environment::Production.is_production());
}

#[test]
fn test_log_level_parsing() {
    assert_eq!(LogLevel::from_str_or_default("WARN"), LogLevel::Warn);
    assert_eq!(LogLevel::from_str_or_default("trace"), LogLevel::Trace);
    assert_eq!(LogLevel::from_str_or_default("invalid"), LogLevel::Info);
    assert_eq!(LogLevel::Debug.to_tracing_level(), tracing::Level::DEBUG);
}

#[test]
fn test_database_url_helpers() {
    let file = DatabaseUrl::parse_url("sqlite:./data/log.db").unwrap();
    assert!(!file.is_memory());
    assert_eq!(file.file_path(), Some(PathBuf::from("./data/log.db").as_path()));

    let memory = DatabaseUrl::parse_url("sqlite::memory:").unwrap();
    assert!(memory.is_memory());
    assert!(memory.file_path().is_none());
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = ServerConfig::from_env().unwrap();

    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.http_port, 8081);
    assert_eq!(config.environment, Environment::Development);
    assert_eq!(config.log_level, LogLevel::Info);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.cors.allowed_origins, "*");
    assert_eq!(
        config.database.url,
        DatabaseUrl::SQLite {
            path: PathBuf::from("./data/exercises.db")
        }
    );
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("HOST", "0.0.0.0");
    env::set_var("HTTP_PORT", "9090");
    env::set_var("DATABASE_URL", "sqlite::memory:");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("RUST_LOG", "debug,sqlx=warn");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.bind_address(), "0.0.0.0:9090");
    assert!(config.database.url.is_memory());
    assert!(config.environment.is_production());
    assert_eq!(config.log_level, LogLevel::Debug);
}

#[test]
#[serial]
fn test_port_alias_and_precedence() {
    clear_env();
    env::set_var("PORT", "7000");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 7000);

    env::set_var("HTTP_PORT", "7001");
    assert_eq!(ServerConfig::from_env().unwrap().http_port, 7001);
    clear_env();
}

#[test]
#[serial]
fn test_malformed_values_are_rejected() {
    clear_env();
    env::set_var("HTTP_PORT", "not-a-port");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("DATABASE_MAX_CONNECTIONS", "many");
    assert!(ServerConfig::from_env().is_err());

    clear_env();
    env::set_var("DATABASE_URL", "");
    assert!(ServerConfig::from_env().is_err());
    clear_env();
}

#[test]
#[serial]
fn test_pool_size_has_floor_of_one() {
    clear_env();
    env::set_var("DATABASE_MAX_CONNECTIONS", "0");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.database.max_connections, 1);
}

#[test]
#[serial]
fn test_dotenv_file_is_loaded() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".env"),
        "HTTP_PORT=7123\nDATABASE_URL=sqlite::memory:\n",
    )
    .unwrap();

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = ServerConfig::from_env();
    env::set_current_dir(original).unwrap();
    clear_env();

    let config = config.unwrap();
    assert_eq!(config.http_port, 7123);
    assert!(config.database.url.is_memory());
}

#[test]
#[serial]
fn test_process_environment_wins_over_dotenv_file() {
    clear_env();
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".env"), "HTTP_PORT=7123\n").unwrap();
    env::set_var("HTTP_PORT", "7200");

    let original = env::current_dir().unwrap();
    env::set_current_dir(dir.path()).unwrap();
    let config = ServerConfig::from_env();
    env::set_current_dir(original).unwrap();
    clear_env();

    assert_eq!(config.unwrap().http_port, 7200);
}

#[test]
#[serial]
fn test_logging_follows_loaded_environment() {
    clear_env();
    env::set_var("ENVIRONMENT", "prod");
    env::set_var("RUST_LOG", "warn,exercise_log_server=debug");

    let config = ServerConfig::from_env().unwrap();
    clear_env();

    let logging = LoggingConfig::from_server_config(&config);
    assert!(logging.environment.is_production());
    assert!(logging.include_location);
    assert_eq!(logging.level, LogLevel::Warn);
    assert_eq!(logging.directives, "warn,exercise_log_server=debug");
}
