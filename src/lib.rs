// ABOUTME: Main library entry point for the exercise log server
// ABOUTME: Wires configuration, logging, the SQLite record store, and the HTTP API together
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Exercise Log Server
//!
//! A small REST service for recording strength-training exercises
//! (name, reps, weight, unit, date) in a `SQLite` database.
//!
//! ## Architecture
//!
//! - **`exercise_core`**: error types, record models, and body validation
//! - **config**: environment-driven server configuration
//! - **database**: the [`database::ExerciseStore`] trait and its `SQLite` implementation
//! - **routes**: axum handlers for `/exercises` and health checks
//! - **middleware**: request ids, per-request spans, and CORS
//! - **server**: router assembly and graceful shutdown
//!
//! ## Example
//!
//! ```rust,no_run
//! use exercise_log_server::config::ServerConfig;
//! use exercise_log_server::database::SqliteExerciseStore;
//! use exercise_log_server::resources::ServerResources;
//! use exercise_log_server::server::ExerciseServer;
//! use std::sync::Arc;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = ServerConfig::from_env()?;
//! let store = SqliteExerciseStore::connect(&config.database).await?;
//! let resources = Arc::new(ServerResources::new(Arc::new(store), config));
//! ExerciseServer::new(resources).run().await?;
//! # Ok(())
//! # }
//! ```

/// Configuration management
pub mod config;

/// Environment variable names, defaults, and route paths
pub mod constants;

/// Record store trait and `SQLite` implementation
pub mod database;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// Shared handler dependencies
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// Server assembly and lifecycle
pub mod server;

pub use exercise_core::errors;
