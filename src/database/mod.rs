// ABOUTME: Record store abstraction for exercise log entries
// ABOUTME: Defines the ExerciseStore trait consumed by HTTP handlers and its list filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Record Store
//!
//! Handlers talk to the store only through [`ExerciseStore`], so the backing
//! database can be swapped (or replaced by a test double). Every operation is
//! a single round trip; there are no multi-record transactions.
//!
//! Ids are passed as the raw strings received from the client. A malformed id
//! is reported as [`StoreError::InvalidId`], which callers can tell apart
//! from "no such record" (`Ok(None)` or a zero count).

/// `SQLite` implementation of the store
pub mod exercises;

pub use exercises::SqliteExerciseStore;

use async_trait::async_trait;
use exercise_core::errors::{StoreError, StoreResult};
use exercise_core::{ExerciseDate, ExerciseInput, ExerciseRecord, WeightUnit};

/// Optional narrowing for [`ExerciseStore::list`]
///
/// The HTTP surface always lists everything (`ListExercisesFilter::default()`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListExercisesFilter {
    /// Exact name match
    pub name: Option<String>,
    /// Unit match
    pub unit: Option<WeightUnit>,
    /// Date match
    pub date: Option<ExerciseDate>,
}

impl ListExercisesFilter {
    /// Whether `record` passes this filter
    #[must_use]
    pub fn matches(&self, record: &ExerciseRecord) -> bool {
        self.name.as_ref().map_or(true, |name| *name == record.name)
            && self.unit.map_or(true, |unit| unit == record.unit)
            && self.date.map_or(true, |date| date == record.date)
    }
}

/// Persistent collection of exercise records
#[async_trait]
pub trait ExerciseStore: Send + Sync {
    /// Insert a record and return it with its assigned id
    async fn create(&self, input: &ExerciseInput) -> StoreResult<ExerciseRecord>;

    /// All records passing `filter`, in insertion order
    async fn list(&self, filter: &ListExercisesFilter) -> StoreResult<Vec<ExerciseRecord>>;

    /// The record with `id`, if any
    async fn get(&self, id: &str) -> StoreResult<Option<ExerciseRecord>>;

    /// Overwrite every mutable field of `id`; returns the matched count (0 or 1)
    async fn replace(&self, id: &str, input: &ExerciseInput) -> StoreResult<u64>;

    /// Remove `id`; returns the deleted count (0 or 1)
    async fn delete(&self, id: &str) -> StoreResult<u64>;

    /// Number of stored records
    async fn count(&self) -> StoreResult<u64>;

    /// Round trip to check the store is reachable
    async fn ping(&self) -> StoreResult<()>;

    /// Short backend description for logs
    fn backend_info(&self) -> &'static str;
}

/// Parse a client-supplied id, mapping failures to [`StoreError::InvalidId`]
///
/// # Errors
///
/// Returns `StoreError::InvalidId` when `id` is not a UUID.
pub fn parse_exercise_id(id: &str) -> StoreResult<exercise_core::ExerciseId> {
    id.parse().map_err(|_| StoreError::invalid_id(id))
}
