// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Pure Gregorian calendar-day arithmetic.
//!
//! Everything here is total for the year range the engine supports;
//! impossible dates are rejected at construction by the caller, not here.

use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};

/// Number of days from `a` to `b`, negative when `b` is earlier.
pub fn day_difference(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}

/// Adds (or subtracts) whole calendar days.
pub fn add_days(d: NaiveDate, days: i64) -> NaiveDate {
    d + TimeDelta::days(days)
}

/// Adds whole calendar months, clamping the day-of-month to the last
/// valid day when the target month is shorter (Jan 31 + 1 → Feb 28/29).
pub fn add_months(d: NaiveDate, months: i32) -> NaiveDate {
    let total = d.year() * 12 + d.month0() as i32 + months;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    clamped_ymd(year, month, d.day())
}

/// Adds whole calendar years; Feb 29 falls back to Feb 28 in non-leap years.
pub fn add_years(d: NaiveDate, years: i32) -> NaiveDate {
    clamped_ymd(d.year() + years, d.month(), d.day())
}

/// Weekday of the given date.
pub fn weekday_of(d: NaiveDate) -> Weekday {
    d.weekday()
}

/// Which occurrence of its weekday the date is within its month:
/// 0 when it is the last such weekday of the month, otherwise 1..=5.
pub fn nth_weekday_index(d: NaiveDate) -> u8 {
    if d.day() + 7 > month_length(d.year(), d.month()) {
        0
    } else {
        ((d.day() - 1) / 7 + 1) as u8
    }
}

/// The nth occurrence (1..=5) of `weekday` in the given month, or the
/// last occurrence for `nth == 0`. `None` when the month has no nth one.
pub fn nth_weekday_of_month(year: i32, month: u32, weekday: Weekday, nth: u8) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let offset = weekday.num_days_from_monday() as i64
        - first.weekday().num_days_from_monday() as i64;
    let first_match = add_days(first, offset.rem_euclid(7));

    let candidate = if nth == 0 {
        let len = month_length(year, month);
        let weeks = (len - first_match.day()) / 7;
        add_days(first_match, 7 * weeks as i64)
    } else {
        add_days(first_match, 7 * (nth as i64 - 1))
    };

    (candidate.month() == month).then_some(candidate)
}

/// Days remaining until the last day of the date's month (0 on the last day).
pub fn days_to_end_of_month(d: NaiveDate) -> u32 {
    month_length(d.year(), d.month()) - d.day()
}

/// The last day of the date's month.
pub fn last_day_of_month(d: NaiveDate) -> NaiveDate {
    clamped_ymd(d.year(), d.month(), 31)
}

pub(crate) fn month_length(year: i32, month: u32) -> u32 {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    // Both month starts exist for every supported year.
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("first of month must exist");
    let next = NaiveDate::from_ymd_opt(ny, nm, 1).expect("first of next month must exist");
    day_difference(first, next) as u32
}

/// Builds a date from components, clamping the day to the month length.
pub(crate) fn clamped_ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    let day = day.min(month_length(year, month));
    NaiveDate::from_ymd_opt(year, month, day).expect("clamped day must exist in month")
}
