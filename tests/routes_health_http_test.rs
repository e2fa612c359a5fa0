// ABOUTME: HTTP integration tests for health, readiness, and request correlation
// ABOUTME: Checks /health, store-backed /ready, and x-request-id propagation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use axum::http::StatusCode;
use helpers::axum_test::AxumTestRequest;
use helpers::test_utils::{create_test_resources, failing_router, pushups_body, test_router};
use serde_json::Value;

#[tokio::test]
async fn test_health_endpoint() {
    let resources = create_test_resources().await;

    let body: Value = AxumTestRequest::get("/health")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_ready_reports_exercise_count() {
    let resources = create_test_resources().await;
    AxumTestRequest::post("/exercises")
        .json(&pushups_body())
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::CREATED);

    let body: Value = AxumTestRequest::get("/ready")
        .send(test_router(&resources))
        .await
        .assert_status(StatusCode::OK)
        .json();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["exercise_count"], 1);
}

#[tokio::test]
async fn test_ready_unavailable_when_store_fails() {
    let body: Value = AxumTestRequest::get("/ready")
        .send(failing_router())
        .await
        .assert_status(StatusCode::SERVICE_UNAVAILABLE)
        .json();

    assert_eq!(body["status"], "unavailable");
}

#[tokio::test]
async fn test_health_ignores_store_failures() {
    AxumTestRequest::get("/health")
        .send(failing_router())
        .await
        .assert_status(StatusCode::OK);
}

#[tokio::test]
async fn test_request_id_generated_when_absent() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/exercises")
        .send(test_router(&resources))
        .await;

    let request_id = response.header("x-request-id").expect("x-request-id header");
    assert!(uuid::Uuid::parse_str(&request_id).is_ok());
}

#[tokio::test]
async fn test_request_id_propagated_from_client() {
    let resources = create_test_resources().await;

    let response = AxumTestRequest::get("/exercises/not-a-uuid")
        .header("x-request-id", "client-trace-42")
        .send(test_router(&resources))
        .await;

    assert_eq!(response.status(), 404);
    assert_eq!(
        response.header("x-request-id").as_deref(),
        Some("client-trace-42")
    );
}
