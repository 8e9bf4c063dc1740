// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Resolves concrete occurrences of a (possibly recurring) event.
//!
//! All functions here are pure reads: same inputs, same outputs, no
//! side effects, so the UI tick may re-invoke them freely.

use chrono::{Datelike, NaiveDate};

use crate::datetime::{
    add_days, add_months, clamped_ymd, day_difference, nth_weekday_of_month, weekday_of,
};
use crate::{Event, IntervalUnit, RecurrenceRule, ResolveError};

/// Cap on the number of periods any search walks before giving up.
/// Guards against rules whose every instance is an exception.
const SEARCH_LIMIT: usize = 1000;

/// The earliest occurrence of `event` on or after `reference`,
/// skipping exception dates.
pub fn next_occurrence(event: &Event, reference: NaiveDate) -> Result<NaiveDate, ResolveError> {
    let anchor = event.anchor.date();

    let found = match event.rule {
        RecurrenceRule::Once => (anchor >= reference).then_some(anchor),

        RecurrenceRule::ByCalendarUnit {
            weekly,
            monthly,
            yearly,
        } => {
            // Each active flag is an independent sub-series; the earliest
            // unexcepted candidate across them wins.
            let mut best: Option<NaiveDate> = None;
            if weekly {
                best = earlier(best, next_by_days(event, anchor, reference, 7));
            }
            if monthly {
                best = earlier(best, next_by_months(event, anchor, reference, 1));
            }
            if yearly {
                best = earlier(best, next_by_months(event, anchor, reference, 12));
            }
            best
        }

        RecurrenceRule::ByWeekdayOccurrenceInMonth { nth } => {
            next_weekday_occurrence(event, anchor, reference, nth)
        }

        RecurrenceRule::ByFixedInterval { count, unit } => match unit {
            IntervalUnit::Days => next_by_days(event, anchor, reference, i64::from(count)),
            IntervalUnit::Weeks => next_by_days(event, anchor, reference, 7 * i64::from(count)),
            IntervalUnit::Months => next_by_months(event, anchor, reference, i32::from(count)),
            IntervalUnit::Years => next_by_months(event, anchor, reference, 12 * i32::from(count)),
        },

        RecurrenceRule::ByEndOfMonthOffset { days_before_end } => {
            next_end_of_month(event, anchor, reference, days_before_end)
        }
    };

    found.ok_or(ResolveError::NoOccurrenceFound)
}

/// The earliest occurrence strictly after `occurrence`.
pub fn following_occurrence(
    event: &Event,
    occurrence: NaiveDate,
) -> Result<NaiveDate, ResolveError> {
    next_occurrence(event, add_days(occurrence, 1))
}

/// All occurrences within `from..=to`, in order.
pub fn occurrences_between(event: &Event, from: NaiveDate, to: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut cursor = from;
    while let Ok(d) = next_occurrence(event, cursor) {
        if d > to {
            break;
        }
        out.push(d);
        cursor = add_days(d, 1);
    }
    out
}

fn earlier(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Option<NaiveDate> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (x, None) | (None, x) => x,
    }
}

/// Sub-series `anchor + k*stride` days: first unexcepted candidate
/// on or after `reference`.
fn next_by_days(
    event: &Event,
    anchor: NaiveDate,
    reference: NaiveDate,
    stride: i64,
) -> Option<NaiveDate> {
    let gap = day_difference(anchor, reference);
    let mut k = if gap > 0 { (gap + stride - 1) / stride } else { 0 };

    for _ in 0..SEARCH_LIMIT {
        let candidate = add_days(anchor, stride * k);
        if !event.is_exception(candidate) {
            return Some(candidate);
        }
        k += 1;
    }
    None
}

/// Sub-series `anchor + k*stride` months, day clamped to month length.
fn next_by_months(
    event: &Event,
    anchor: NaiveDate,
    reference: NaiveDate,
    stride: i32,
) -> Option<NaiveDate> {
    let months = (reference.year() - anchor.year()) * 12 + reference.month() as i32
        - anchor.month() as i32;
    let mut k = months.div_euclid(stride).max(0);

    for _ in 0..SEARCH_LIMIT {
        let candidate = add_months(anchor, stride * k);
        if candidate >= reference && !event.is_exception(candidate) {
            return Some(candidate);
        }
        k += 1;
    }
    None
}

/// Walks forward month by month to the nth (or last, `nth == 0`)
/// occurrence of the anchor's weekday.
fn next_weekday_occurrence(
    event: &Event,
    anchor: NaiveDate,
    reference: NaiveDate,
    nth: u8,
) -> Option<NaiveDate> {
    let weekday = weekday_of(anchor);
    let start = reference.max(anchor);
    let (mut year, mut month) = (start.year(), start.month());

    for _ in 0..SEARCH_LIMIT {
        // Months without an nth occurrence are skipped entirely.
        if let Some(candidate) = nth_weekday_of_month(year, month, weekday, nth)
            && candidate >= reference
            && candidate >= anchor
            && !event.is_exception(candidate)
        {
            return Some(candidate);
        }
        (year, month) = next_month(year, month);
    }
    None
}

/// Walks forward month by month to `last day of month - days_before_end`.
fn next_end_of_month(
    event: &Event,
    anchor: NaiveDate,
    reference: NaiveDate,
    days_before_end: u32,
) -> Option<NaiveDate> {
    let start = reference.max(anchor);
    let (mut year, mut month) = (start.year(), start.month());

    for _ in 0..SEARCH_LIMIT {
        let last = clamped_ymd(year, month, 31);
        let candidate = add_days(last, -i64::from(days_before_end));
        if candidate >= reference && candidate >= anchor && !event.is_exception(candidate) {
            return Some(candidate);
        }
        (year, month) = next_month(year, month);
    }
    None
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
