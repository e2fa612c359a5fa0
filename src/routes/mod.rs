// ABOUTME: HTTP route modules for the exercise log server
// ABOUTME: Groups exercise CRUD handlers and health endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

/// Exercise CRUD routes
pub mod exercises;
/// Liveness and readiness routes
pub mod health;

pub use exercises::ExerciseRoutes;
pub use health::HealthRoutes;
