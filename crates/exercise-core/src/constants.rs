// ABOUTME: Constants shared by the exercise validator, store, and HTTP layer
// ABOUTME: Public error messages, request field names, and unit identifiers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

/// Messages returned to clients in the `{"Error": ...}` body
pub mod messages {
    /// Body of every 400 response
    pub const INVALID_REQUEST: &str = "Invalid Request";
    /// Body of every 404 response
    pub const NOT_FOUND: &str = "Not Found";
}

/// Request body field names
pub mod fields {
    /// Exercise name
    pub const NAME: &str = "name";
    /// Repetition count
    pub const REPS: &str = "reps";
    /// Weight lifted
    pub const WEIGHT: &str = "weight";
    /// Weight unit
    pub const UNIT: &str = "unit";
    /// Date in `MM-DD-YY`
    pub const DATE: &str = "date";
}

/// Accepted weight unit spellings
pub mod units {
    /// Kilograms
    pub const KGS: &str = "kgs";
    /// Pounds
    pub const LBS: &str = "lbs";
}

/// Smallest accepted value for `reps` and `weight`
pub const MIN_COUNT: u32 = 1;
