// ABOUTME: Strict MM-DD-YY date parsing
// ABOUTME: Applies the format check first, then the calendar check
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

use super::calendar::is_valid_calendar_date;
use crate::errors::ViolationKind;
use crate::models::ExerciseDate;
use regex::Regex;
use std::sync::OnceLock;

/// Get compiled `MM-DD-YY` regex (cached)
fn date_regex() -> Option<&'static Regex> {
    static DATE_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
    DATE_REGEX
        .get_or_init(|| Regex::new(r"^(0[1-9]|1[0-2])-(0[1-9]|[12][0-9]|3[01])-([0-9]{2})$").ok())
        .as_ref()
}

/// Split a strict `MM-DD-YY` string into `(month, day, year)`
///
/// Only the shape is checked here: two-digit fields, `-` delimiters, month
/// `01..=12`, day `01..=31`. Whether the day exists in that month is left to
/// [`is_valid_calendar_date`].
#[must_use]
pub fn parse_date_parts(s: &str) -> Option<(u8, u8, u8)> {
    let captures = date_regex()?.captures(s)?;
    let field = |i: usize| captures.get(i)?.as_str().parse::<u8>().ok();
    Some((field(1)?, field(2)?, field(3)?))
}

/// Whether `s` has the strict `MM-DD-YY` shape
#[must_use]
pub fn has_date_format(s: &str) -> bool {
    parse_date_parts(s).is_some()
}

/// Whether `s` is well formed and names a real calendar day
#[must_use]
pub fn is_calendar_date(s: &str) -> bool {
    parse_date_parts(s).is_some_and(|(month, day, year)| {
        is_valid_calendar_date(u32::from(month), u32::from(day), i32::from(year))
    })
}

/// Parse a date, applying both the format and the calendar check
///
/// # Errors
///
/// Returns [`ViolationKind::BadDateFormat`] for malformed strings and
/// [`ViolationKind::ImpossibleDate`] for days that do not exist.
pub fn parse_date(s: &str) -> Result<ExerciseDate, ViolationKind> {
    let (month, day, year) = parse_date_parts(s).ok_or(ViolationKind::BadDateFormat)?;
    if !is_valid_calendar_date(u32::from(month), u32::from(day), i32::from(year)) {
        return Err(ViolationKind::ImpossibleDate);
    }
    Ok(ExerciseDate::from_parts(month, day, year))
}
