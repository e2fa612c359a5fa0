// ABOUTME: Configuration module for the exercise log server
// ABOUTME: Re-exports environment-driven server, database, and CORS settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! Configuration is read from the process environment only. The binary may
//! override a few fields from its command line.

/// Environment and server configuration
pub mod environment;

pub use environment::{
    CorsConfig, DatabaseConfig, DatabaseUrl, Environment, LogLevel, ServerConfig,
};
