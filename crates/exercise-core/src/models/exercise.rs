// ABOUTME: Exercise record model and strongly typed field values
// ABOUTME: Covers the store-assigned id, weight unit, MM-DD-YY date, and validated input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use crate::constants::units;
use crate::errors::ViolationKind;
use crate::validation::date::parse_date;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Store-assigned exercise identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExerciseId(Uuid);

impl ExerciseId {
    /// Generate a fresh id
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Underlying UUID
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for ExerciseId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl FromStr for ExerciseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

impl fmt::Display for ExerciseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unit the weight is recorded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    /// Kilograms
    Kgs,
    /// Pounds
    Lbs,
}

impl WeightUnit {
    /// Convert to the stored string representation
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kgs => units::KGS,
            Self::Lbs => units::LBS,
        }
    }

    /// Parse an exact unit spelling
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            units::KGS => Some(Self::Kgs),
            units::LBS => Some(Self::Lbs),
            _ => None,
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Calendar date written as `MM-DD-YY`
///
/// Only dates that pass both the format and the calendar check can be
/// constructed. The year is kept as its two-digit value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExerciseDate {
    month: u8,
    day: u8,
    year: u8,
}

impl ExerciseDate {
    pub(crate) const fn from_parts(month: u8, day: u8, year: u8) -> Self {
        Self { month, day, year }
    }

    /// Month, `1..=12`
    #[must_use]
    pub const fn month(&self) -> u8 {
        self.month
    }

    /// Day of month
    #[must_use]
    pub const fn day(&self) -> u8 {
        self.day
    }

    /// Two-digit year, `0..=99`
    #[must_use]
    pub const fn year(&self) -> u8 {
        self.year
    }
}

impl FromStr for ExerciseDate {
    type Err = ViolationKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s)
    }
}

impl TryFrom<String> for ExerciseDate {
    type Error = ViolationKind;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExerciseDate> for String {
    fn from(date: ExerciseDate) -> Self {
        date.to_string()
    }
}

impl fmt::Display for ExerciseDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}-{:02}-{:02}", self.month, self.day, self.year)
    }
}

/// Validated field values for create and replace
///
/// Produced only by [`crate::validation::validate_exercise_body`] (or by
/// constructing typed fields directly), so every instance satisfies the
/// record invariants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseInput {
    /// Exercise name, never empty
    pub name: String,
    /// Repetitions, at least 1
    pub reps: u32,
    /// Weight, at least 1
    pub weight: u32,
    /// Weight unit
    pub unit: WeightUnit,
    /// Date performed
    pub date: ExerciseDate,
}

/// A persisted exercise log entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseRecord {
    /// Store-assigned identifier
    pub id: ExerciseId,
    /// Exercise name
    pub name: String,
    /// Repetitions
    pub reps: u32,
    /// Weight
    pub weight: u32,
    /// Weight unit
    pub unit: WeightUnit,
    /// Date performed
    pub date: ExerciseDate,
}

impl ExerciseRecord {
    /// Combine an id with validated field values
    #[must_use]
    pub fn from_input(id: ExerciseId, input: ExerciseInput) -> Self {
        Self {
            id,
            name: input.name,
            reps: input.reps,
            weight: input.weight,
            unit: input.unit,
            date: input.date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_unit_round_trip() {
        assert_eq!(WeightUnit::parse("kgs"), Some(WeightUnit::Kgs));
        assert_eq!(WeightUnit::parse("lbs"), Some(WeightUnit::Lbs));
        assert_eq!(WeightUnit::parse("LBS"), None);
        assert_eq!(WeightUnit::parse("stones"), None);
        assert_eq!(serde_json::to_string(&WeightUnit::Kgs).unwrap(), r#""kgs""#);
    }

    #[test]
    fn test_exercise_date_display_keeps_leading_zeros() {
        let date: ExerciseDate = "03-05-07".parse().unwrap();
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 5);
        assert_eq!(date.year(), 7);
        assert_eq!(date.to_string(), "03-05-07");
    }

    #[test]
    fn test_exercise_date_deserialize_rejects_impossible_date() {
        let result: Result<ExerciseDate, _> = serde_json::from_str(r#""02-30-24""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_serializes_flat() {
        let id: ExerciseId = "3f2b8c1e-0d4a-4e55-9a6b-2f1c7d8e9a01".parse().unwrap();
        let record = ExerciseRecord {
            id,
            name: "Pushups".to_owned(),
            reps: 10,
            weight: 1,
            unit: WeightUnit::Lbs,
            date: "03-15-24".parse().unwrap(),
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], "3f2b8c1e-0d4a-4e55-9a6b-2f1c7d8e9a01");
        assert_eq!(json["name"], "Pushups");
        assert_eq!(json["reps"], 10);
        assert_eq!(json["unit"], "lbs");
        assert_eq!(json["date"], "03-15-24");
    }

    #[test]
    fn test_exercise_id_rejects_garbage() {
        assert!("not-an-id".parse::<ExerciseId>().is_err());
        assert!("".parse::<ExerciseId>().is_err());
    }
}
