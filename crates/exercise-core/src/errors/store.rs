// ABOUTME: Error types for record store operations
// ABOUTME: Separates malformed ids and corrupt rows from database transport failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use thiserror::Error;

/// Failures raised by an exercise store
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum StoreError {
    /// The id is not in the store's identifier format
    #[error("Malformed exercise id '{id}'")]
    InvalidId {
        /// Raw id as received
        id: String,
    },

    /// The backing database failed the operation
    #[error("Database error during {operation}: {reason}")]
    Database {
        /// Operation being performed
        operation: &'static str,
        /// Driver-reported failure
        reason: String,
    },

    /// A stored row no longer satisfies the record invariants
    #[error("Corrupt exercise record '{id}': {reason}")]
    CorruptRecord {
        /// Id of the offending row
        id: String,
        /// What was wrong with it
        reason: String,
    },
}

impl StoreError {
    /// Malformed id
    pub fn invalid_id(id: impl Into<String>) -> Self {
        Self::InvalidId { id: id.into() }
    }

    /// Database failure during `operation`
    pub fn database(operation: &'static str, reason: impl std::fmt::Display) -> Self {
        Self::Database {
            operation,
            reason: reason.to_string(),
        }
    }

    /// Row failed to map back into a record
    pub fn corrupt(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::CorruptRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }

    /// Whether the failure was caused by the caller's id rather than the store
    #[must_use]
    pub const fn is_invalid_id(&self) -> bool {
        matches!(self, Self::InvalidId { .. })
    }
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for StoreError {
    fn from(error: sqlx::Error) -> Self {
        Self::database("query", error)
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
