// ABOUTME: Axum integration for AppError
// ABOUTME: Renders errors as JSON responses and folds body rejections into validation failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use super::{AppError, ErrorResponse};
use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

/// A body that is not JSON (or lacks the JSON content type) is an invalid request
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(format!("Unreadable request body: {}", rejection.body_text()))
    }
}
