// ABOUTME: Unified error handling for the exercise log server
// ABOUTME: Defines error codes, the AppError type, and the client-facing error body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Unified Error Handling
//!
//! Every failure that can reach a client is expressed as an [`AppError`]. The
//! error carries an [`ErrorCode`] (which fixes the HTTP status and the public
//! message), an internal message for logs, and an optional source error.
//!
//! Clients only ever see `{"Error": "<public message>"}`. Internal messages and
//! sources stay on the server side.

/// Store-level errors (persistence failures, malformed ids)
pub mod store;
/// Validation errors collected by the request rule table
pub mod validation;

#[cfg(feature = "http-response")]
mod http;

pub use store::{StoreError, StoreResult};
pub use validation::{FieldViolation, ValidationError, ViolationKind};

use crate::constants::messages;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes used across the service
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Request body failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// No record matched the given id
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound,
    /// The record store rejected or failed the operation
    #[serde(rename = "STORE_FAILURE")]
    StoreFailure,
}

impl ErrorCode {
    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::StoreFailure => 400,
            Self::ResourceNotFound => 404,
        }
    }

    /// Message placed in the response body
    ///
    /// Store failures share the validation message.
    #[must_use]
    pub const fn public_message(self) -> &'static str {
        match self {
            Self::InvalidInput | Self::StoreFailure => messages::INVALID_REQUEST,
            Self::ResourceNotFound => messages::NOT_FOUND,
        }
    }

    /// Short description used in logs
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input",
            Self::ResourceNotFound => "Resource not found",
            Self::StoreFailure => "Store operation failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Unified error type for the service
#[derive(Debug, Error)]
#[error("{code}: {message}")]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Internal, human-readable message (never sent to clients)
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }

    /// Invalid request body
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Store failure surfaced as a bad request
    pub fn store_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StoreFailure, message)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        Self::invalid_input(error.to_string()).with_source(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        Self::store_failure(error.to_string()).with_source(error)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Client-facing error body: `{"Error": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Public error message
    #[serde(rename = "Error")]
    pub error: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: error.code.public_message().to_owned(),
        }
    }
}
