// ABOUTME: Domain models for the exercise log
// ABOUTME: Re-exports the exercise record, its validated input, and field types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

/// Exercise record, input, id, unit, and date types
pub mod exercise;

pub use exercise::{ExerciseDate, ExerciseId, ExerciseInput, ExerciseRecord, WeightUnit};
