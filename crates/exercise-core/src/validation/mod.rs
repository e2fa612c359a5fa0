// ABOUTME: Request body validation for exercise create and replace
// ABOUTME: Evaluates an ordered rule table against the raw JSON body and builds typed input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

//! # Exercise Validation
//!
//! Field checks are an ordered table of `(field, violation kind, predicate)`
//! rules evaluated against the raw JSON body:
//!
//! - every field is checked (violations are collected across fields)
//! - within one field, rules run in table order and stop at the first
//!   violation, so later rules may assume the earlier ones held
//!
//! Only when the table reports nothing is the body turned into a typed
//! [`ExerciseInput`]. The calendar check is one of the rules, so an
//! impossible day such as `02-30-24` rejects the request.

/// Leap-year and days-in-month arithmetic
pub mod calendar;
/// Strict `MM-DD-YY` parsing
pub mod date;

pub use calendar::{is_leap_year, is_valid_calendar_date};
pub use date::{has_date_format, is_calendar_date, parse_date, parse_date_parts};

use crate::constants::{fields, MIN_COUNT};
use crate::errors::{FieldViolation, ValidationError, ViolationKind};
use crate::models::{ExerciseInput, WeightUnit};
use serde_json::Value;

/// Field name reported when the body itself is not an object
pub const BODY_FIELD: &str = "body";

/// One entry of the rule table
struct Rule {
    field: &'static str,
    kind: ViolationKind,
    violated: fn(Option<&Value>) -> bool,
}

impl Rule {
    const fn new(
        field: &'static str,
        kind: ViolationKind,
        violated: fn(Option<&Value>) -> bool,
    ) -> Self {
        Self {
            field,
            kind,
            violated,
        }
    }
}

const EXERCISE_RULES: &[Rule] = &[
    Rule::new(fields::NAME, ViolationKind::Missing, is_missing),
    Rule::new(fields::NAME, ViolationKind::NotAString, is_not_string),
    Rule::new(fields::NAME, ViolationKind::Empty, is_empty_string),
    Rule::new(fields::REPS, ViolationKind::Missing, is_missing),
    Rule::new(fields::REPS, ViolationKind::NotAnInteger, is_not_count),
    Rule::new(fields::REPS, ViolationKind::BelowMinimum, is_below_minimum),
    Rule::new(fields::WEIGHT, ViolationKind::Missing, is_missing),
    Rule::new(fields::WEIGHT, ViolationKind::NotAnInteger, is_not_count),
    Rule::new(fields::WEIGHT, ViolationKind::BelowMinimum, is_below_minimum),
    Rule::new(fields::UNIT, ViolationKind::Missing, is_missing),
    Rule::new(fields::UNIT, ViolationKind::NotAString, is_not_string),
    Rule::new(fields::UNIT, ViolationKind::UnknownUnit, is_unknown_unit),
    Rule::new(fields::DATE, ViolationKind::Missing, is_missing),
    Rule::new(fields::DATE, ViolationKind::NotAString, is_not_string),
    Rule::new(fields::DATE, ViolationKind::BadDateFormat, is_bad_date_format),
    Rule::new(fields::DATE, ViolationKind::ImpossibleDate, is_impossible_date),
];

fn is_missing(value: Option<&Value>) -> bool {
    value.map_or(true, Value::is_null)
}

fn is_not_string(value: Option<&Value>) -> bool {
    !value.is_some_and(Value::is_string)
}

fn is_empty_string(value: Option<&Value>) -> bool {
    value.and_then(Value::as_str).is_some_and(str::is_empty)
}

fn is_not_count(value: Option<&Value>) -> bool {
    value.and_then(integer_value).is_none()
}

fn is_below_minimum(value: Option<&Value>) -> bool {
    value
        .and_then(integer_value)
        .is_some_and(|n| n < i64::from(MIN_COUNT))
}

fn is_unknown_unit(value: Option<&Value>) -> bool {
    value
        .and_then(Value::as_str)
        .and_then(WeightUnit::parse)
        .is_none()
}

fn is_bad_date_format(value: Option<&Value>) -> bool {
    !value.and_then(Value::as_str).is_some_and(has_date_format)
}

fn is_impossible_date(value: Option<&Value>) -> bool {
    !value.and_then(Value::as_str).is_some_and(is_calendar_date)
}

/// Integer value of a JSON number or a string of decimal digits
///
/// Integral floats such as `10.0` or `1e1` count as integers. Values that
/// cannot fit a `u32` count are treated as non-integers.
fn integer_value(value: &Value) -> Option<i64> {
    let n = match value {
        Value::Number(n) => n.as_i64().or_else(|| integral_float(n.as_f64()?))?,
        Value::String(s) => s.parse::<i64>().ok()?,
        _ => return None,
    };
    (n <= i64::from(u32::MAX)).then_some(n)
}

fn integral_float(f: f64) -> Option<i64> {
    (f.fract() == 0.0 && f.abs() <= f64::from(u32::MAX)).then_some(f as i64)
}

/// Run the rule table and return every violation, in table order
#[must_use]
pub fn collect_violations(body: &Value) -> Vec<FieldViolation> {
    let Some(object) = body.as_object() else {
        return vec![FieldViolation::new(BODY_FIELD, ViolationKind::NotAnObject)];
    };

    let mut violations: Vec<FieldViolation> = Vec::new();
    for rule in EXERCISE_RULES {
        if violations.iter().any(|v| v.field == rule.field) {
            continue;
        }
        if (rule.violated)(object.get(rule.field)) {
            violations.push(FieldViolation::new(rule.field, rule.kind));
        }
    }
    violations
}

/// Validate a raw request body and build typed input
///
/// # Errors
///
/// Returns a [`ValidationError`] listing every rejected field.
pub fn validate_exercise_body(body: &Value) -> Result<ExerciseInput, ValidationError> {
    let violations = collect_violations(body);
    if !violations.is_empty() {
        return Err(ValidationError::new(violations));
    }

    let str_field = |field: &'static str| {
        body.get(field)
            .and_then(Value::as_str)
            .ok_or_else(|| single(field, ViolationKind::NotAString))
    };
    let count_field = |field: &'static str| {
        body.get(field)
            .and_then(integer_value)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or_else(|| single(field, ViolationKind::NotAnInteger))
    };

    let unit = WeightUnit::parse(str_field(fields::UNIT)?)
        .ok_or_else(|| single(fields::UNIT, ViolationKind::UnknownUnit))?;
    let date = parse_date(str_field(fields::DATE)?).map_err(|kind| single(fields::DATE, kind))?;

    Ok(ExerciseInput {
        name: str_field(fields::NAME)?.to_owned(),
        reps: count_field(fields::REPS)?,
        weight: count_field(fields::WEIGHT)?,
        unit,
        date,
    })
}

fn single(field: &'static str, kind: ViolationKind) -> ValidationError {
    ValidationError::new(vec![FieldViolation::new(field, kind)])
}
