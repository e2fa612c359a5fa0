// ABOUTME: Shared fixtures for exercise log integration tests
// ABOUTME: Builds in-memory servers, sample bodies, and a store double that always fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use async_trait::async_trait;
use axum::Router;
use exercise_core::errors::{StoreError, StoreResult};
use exercise_core::{ExerciseInput, ExerciseRecord};
use exercise_log_server::{
    config::{DatabaseConfig, DatabaseUrl, ServerConfig},
    database::{ExerciseStore, ListExercisesFilter, SqliteExerciseStore},
    resources::ServerResources,
    server::ExerciseServer,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Configuration pointing at a fresh in-memory database
pub fn memory_config() -> ServerConfig {
    ServerConfig {
        database: DatabaseConfig {
            url: DatabaseUrl::Memory,
            max_connections: 1,
        },
        ..ServerConfig::default()
    }
}

/// Open a migrated in-memory store
pub async fn create_memory_store() -> SqliteExerciseStore {
    SqliteExerciseStore::connect(&memory_config().database)
        .await
        .expect("Failed to open in-memory store")
}

/// Resources over a fresh in-memory store
pub async fn create_test_resources() -> Arc<ServerResources> {
    let store = create_memory_store().await;
    Arc::new(ServerResources::new(Arc::new(store), memory_config()))
}

/// Full application router (routes plus middleware)
pub fn test_router(resources: &Arc<ServerResources>) -> Router {
    ExerciseServer::new(Arc::clone(resources)).router()
}

/// Router over a store that fails every operation
pub fn failing_router() -> Router {
    let resources = Arc::new(ServerResources::new(
        Arc::new(FailingStore),
        memory_config(),
    ));
    ExerciseServer::new(resources).router()
}

/// A valid request body
pub fn pushups_body() -> Value {
    json!({
        "name": "Pushups",
        "reps": 10,
        "weight": 1,
        "unit": "lbs",
        "date": "03-15-24"
    })
}

/// Store double whose every operation reports a database failure
pub struct FailingStore;

impl FailingStore {
    fn failure(operation: &'static str) -> StoreError {
        StoreError::database(operation, "database is locked")
    }
}

#[async_trait]
impl ExerciseStore for FailingStore {
    async fn create(&self, _input: &ExerciseInput) -> StoreResult<ExerciseRecord> {
        Err(Self::failure("create exercise"))
    }

    async fn list(&self, _filter: &ListExercisesFilter) -> StoreResult<Vec<ExerciseRecord>> {
        Err(Self::failure("list exercises"))
    }

    async fn get(&self, _id: &str) -> StoreResult<Option<ExerciseRecord>> {
        Err(Self::failure("get exercise"))
    }

    async fn replace(&self, _id: &str, _input: &ExerciseInput) -> StoreResult<u64> {
        Err(Self::failure("replace exercise"))
    }

    async fn delete(&self, _id: &str) -> StoreResult<u64> {
        Err(Self::failure("delete exercise"))
    }

    async fn count(&self) -> StoreResult<u64> {
        Err(Self::failure("count exercises"))
    }

    async fn ping(&self) -> StoreResult<()> {
        Err(Self::failure("ping"))
    }

    fn backend_info(&self) -> &'static str {
        "failing test double"
    }
}
