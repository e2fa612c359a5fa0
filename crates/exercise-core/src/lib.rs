// ABOUTME: Core types and validation for the exercise log server
// ABOUTME: Foundation crate with error handling, exercise models, and field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

#![deny(unsafe_code)]

//! # Exercise Core
//!
//! Foundation crate shared by the exercise log server and its tests. It holds
//! everything that does not touch I/O:
//!
//! - **errors**: `AppError`, `ErrorCode`, `StoreError`, and `ValidationError`
//! - **models**: `ExerciseRecord`, `ExerciseInput`, and their field types
//! - **validation**: the request rule table and the calendar-date check
//! - **constants**: public error messages and field names

/// Error types with HTTP status mapping
pub mod errors;

/// Exercise record models and field types
pub mod models;

/// Request body validation and calendar arithmetic
pub mod validation;

/// Shared constants (error messages, field names)
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode, ErrorResponse, StoreError, ValidationError};
pub use models::{ExerciseDate, ExerciseId, ExerciseInput, ExerciseRecord, WeightUnit};
