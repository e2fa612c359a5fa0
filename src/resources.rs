// ABOUTME: Shared server resources handed to every route handler
// ABOUTME: Bundles the record store and configuration behind Arcs for cheap cloning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use crate::config::ServerConfig;
use crate::database::ExerciseStore;
use std::sync::Arc;

/// Dependencies constructed once at startup and shared across requests
#[derive(Clone)]
pub struct ServerResources {
    /// Record store (the `SQLite` store in production, doubles in tests)
    pub store: Arc<dyn ExerciseStore>,
    /// Loaded configuration
    pub config: Arc<ServerConfig>,
}

impl ServerResources {
    /// Bundle a store and configuration
    #[must_use]
    pub fn new(store: Arc<dyn ExerciseStore>, config: ServerConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}
