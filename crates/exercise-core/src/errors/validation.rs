// ABOUTME: Validation error types produced by the request rule table
// ABOUTME: Keeps per-field detail for logs while clients receive one generic message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use std::fmt;
use thiserror::Error;

/// Why a single field was rejected
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    /// Field absent or `null`
    Missing,
    /// Expected a JSON string
    NotAString,
    /// String was empty
    Empty,
    /// Not an integer (or out of the representable range)
    NotAnInteger,
    /// Integer below the minimum of 1
    BelowMinimum,
    /// Unit other than `kgs` or `lbs`
    UnknownUnit,
    /// Not a strict `MM-DD-YY` string
    BadDateFormat,
    /// Well-formed date that does not exist on the calendar
    ImpossibleDate,
    /// Body was not a JSON object
    NotAnObject,
}

impl ViolationKind {
    /// Short description for logs
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotAString => "not a string",
            Self::Empty => "empty",
            Self::NotAnInteger => "not an integer",
            Self::BelowMinimum => "below minimum",
            Self::UnknownUnit => "unknown unit",
            Self::BadDateFormat => "not MM-DD-YY",
            Self::ImpossibleDate => "not a calendar date",
            Self::NotAnObject => "body is not an object",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rejected field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Request field name
    pub field: &'static str,
    /// What was wrong with it
    pub kind: ViolationKind,
}

impl FieldViolation {
    /// Create a violation
    #[must_use]
    pub const fn new(field: &'static str, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.kind)
    }
}

/// All violations found in one request body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid request body: {}", join_violations(.violations))]
pub struct ValidationError {
    violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Wrap a non-empty list of violations
    #[must_use]
    pub fn new(violations: Vec<FieldViolation>) -> Self {
        Self { violations }
    }

    /// The collected violations, in rule order
    #[must_use]
    pub fn violations(&self) -> &[FieldViolation] {
        &self.violations
    }

    /// Whether `field` was rejected for `kind`
    #[must_use]
    pub fn has(&self, field: &str, kind: ViolationKind) -> bool {
        self.violations
            .iter()
            .any(|v| v.field == field && v.kind == kind)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
