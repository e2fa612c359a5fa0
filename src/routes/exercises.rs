// ABOUTME: Route handlers for the exercise log REST API
// ABOUTME: Validates request bodies, calls the record store, and maps outcomes to HTTP statuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! Exercise routes
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | POST | `/exercises` | 201 + created record |
//! | GET | `/exercises` | 200 + array |
//! | GET | `/exercises/:id` | 200 + record |
//! | PUT | `/exercises/:id` | 200 + replaced record |
//! | DELETE | `/exercises/:id` | 204 |
//!
//! Every failure body is `{"Error": "Invalid Request"}` or `{"Error": "Not Found"}`.
//! Store errors are logged here and never reach the client.

use crate::{
    constants::routes,
    database::{parse_exercise_id, ListExercisesFilter},
    resources::ServerResources,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use exercise_core::{
    errors::{AppError, StoreError},
    validation::validate_exercise_body,
    ExerciseInput, ExerciseRecord,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error, info};

const RESOURCE: &str = "Exercise";

/// Exercise routes implementation
pub struct ExerciseRoutes;

impl ExerciseRoutes {
    /// Create all exercise routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                routes::EXERCISES,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                routes::EXERCISE_BY_ID,
                get(Self::handle_get)
                    .put(Self::handle_replace)
                    .delete(Self::handle_delete),
            )
            .with_state(resources)
    }

    /// Validate a raw body, logging the rejected fields
    fn parse_body(body: Result<Json<Value>, JsonRejection>) -> Result<ExerciseInput, AppError> {
        let Json(body) = body.map_err(|rejection| {
            debug!(reason = %rejection.body_text(), "Rejected unreadable exercise body");
            AppError::from(rejection)
        })?;

        validate_exercise_body(&body).map_err(|validation| {
            debug!(error = %validation, "Rejected exercise body");
            AppError::from(validation)
        })
    }

    fn log_store_error(operation: &str, id: Option<&str>, err: &StoreError) {
        let id = id.unwrap_or_default();
        if err.is_invalid_id() {
            debug!(operation, exercise.id = id, "Malformed exercise id");
        } else {
            error!(operation, exercise.id = id, error = %err, "Exercise store failure");
        }
    }

    /// Log a store error and convert it for the client
    fn store_error(operation: &str, id: Option<&str>, err: StoreError) -> AppError {
        Self::log_store_error(operation, id, &err);
        AppError::from(err)
    }

    /// Handle POST /exercises - Create an exercise
    async fn handle_create(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let input = Self::parse_body(body)?;

        let record = resources
            .store
            .create(&input)
            .await
            .map_err(|e| Self::store_error("create", None, e))?;

        info!(exercise.id = %record.id, exercise.name = %record.name, "Exercise created");
        Ok((StatusCode::CREATED, Json(record)).into_response())
    }

    /// Handle GET /exercises - List all exercises
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let records: Vec<ExerciseRecord> = resources
            .store
            .list(&ListExercisesFilter::default())
            .await
            .map_err(|e| Self::store_error("list", None, e))?;

        Ok((StatusCode::OK, Json(records)).into_response())
    }

    /// Handle GET /exercises/:id - Get a single exercise
    ///
    /// Malformed ids and store failures both read as "not found" here.
    async fn handle_get(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let record = resources
            .store
            .get(&id)
            .await
            .map_err(|e| {
                Self::log_store_error("get", Some(&id), &e);
                AppError::not_found(format!("{RESOURCE} {id}"))
            })?
            .ok_or_else(|| AppError::not_found(format!("{RESOURCE} {id}")))?;

        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Handle PUT /exercises/:id - Replace every field of an exercise
    async fn handle_replace(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
        body: Result<Json<Value>, JsonRejection>,
    ) -> Result<Response, AppError> {
        let input = Self::parse_body(body)?;
        let exercise_id =
            parse_exercise_id(&id).map_err(|e| Self::store_error("replace", Some(&id), e))?;

        let matched = resources
            .store
            .replace(&id, &input)
            .await
            .map_err(|e| Self::store_error("replace", Some(&id), e))?;

        if matched == 0 {
            return Err(AppError::not_found(format!("{RESOURCE} {id}")));
        }

        let record = ExerciseRecord::from_input(exercise_id, input);
        info!(exercise.id = %record.id, "Exercise replaced");
        Ok((StatusCode::OK, Json(record)).into_response())
    }

    /// Handle DELETE /exercises/:id - Delete an exercise
    async fn handle_delete(
        State(resources): State<Arc<ServerResources>>,
        Path(id): Path<String>,
    ) -> Result<Response, AppError> {
        let deleted = resources
            .store
            .delete(&id)
            .await
            .map_err(|e| Self::store_error("delete", Some(&id), e))?;

        if deleted == 0 {
            return Err(AppError::not_found(format!("{RESOURCE} {id}")));
        }

        info!(exercise.id = %id, "Exercise deleted");
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
