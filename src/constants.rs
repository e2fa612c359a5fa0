// ABOUTME: Server-wide constants for the exercise log API
// ABOUTME: Environment variable names, configuration defaults, and route paths
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Constants Module
//!
//! Names and defaults used by configuration loading and route assembly.

/// Environment variable names read at startup
pub mod env_config {
    /// Address to bind
    pub const HOST: &str = "HOST";
    /// Listen port (preferred name)
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Listen port (short alias)
    pub const PORT: &str = "PORT";
    /// Store connection string
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Store pool size
    pub const DATABASE_MAX_CONNECTIONS: &str = "DATABASE_MAX_CONNECTIONS";
    /// Deployment environment
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
    /// Log level / filter directives
    pub const RUST_LOG: &str = "RUST_LOG";
    /// Comma separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
}

/// Configuration defaults
pub mod defaults {
    /// Default bind address
    pub const HOST: &str = "127.0.0.1";
    /// Default listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default store location
    pub const DATABASE_URL: &str = "sqlite:./data/exercises.db";
    /// Default store pool size
    pub const DATABASE_MAX_CONNECTIONS: u32 = 5;
    /// Default CORS policy
    pub const CORS_ALLOWED_ORIGINS: &str = "*";
}

/// Service identity used in logs
pub mod service_names {
    /// Name reported in startup logs
    pub const EXERCISE_LOG_SERVER: &str = "exercise-log-server";
}

/// HTTP route paths
pub mod routes {
    /// Exercise collection
    pub const EXERCISES: &str = "/exercises";
    /// Single exercise
    pub const EXERCISE_BY_ID: &str = "/exercises/:id";
    /// Liveness check
    pub const HEALTH: &str = "/health";
    /// Readiness check
    pub const READY: &str = "/ready";
}

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "x-request-id";
