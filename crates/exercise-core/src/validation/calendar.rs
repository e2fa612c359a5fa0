// ABOUTME: Pure calendar arithmetic for exercise dates
// ABOUTME: Gregorian leap-year rule and days-in-month lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Exercise Log Contributors

const MONTHS_WITH_31_DAYS: [u32; 7] = [1, 3, 5, 7, 8, 10, 12];
const MONTHS_WITH_30_DAYS: [u32; 4] = [4, 6, 9, 11];
const FEBRUARY: u32 = 2;

/// Gregorian leap-year rule
///
/// Divisible by 4 and not by 100, unless also divisible by 400.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Whether `(month, day, year)` names a real calendar day
///
/// Months outside `1..=12` and day `0` are never valid.
#[must_use]
pub fn is_valid_calendar_date(month: u32, day: u32, year: i32) -> bool {
    if day == 0 {
        return false;
    }

    (MONTHS_WITH_31_DAYS.contains(&month) && day <= 31)
        || (MONTHS_WITH_30_DAYS.contains(&month) && day <= 30)
        || (month == FEBRUARY && day <= 28)
        || (month == FEBRUARY && day <= 29 && is_leap_year(year))
}
