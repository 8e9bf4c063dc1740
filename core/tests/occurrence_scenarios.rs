// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Resolver behavior over realistic recurrence setups.

mod common;

use common::{date, recurring_event};
use termin_core::{
    IntervalUnit, RecurrenceRule, ResolveError, add_days, next_occurrence, occurrences_between,
};

#[test]
fn monthly_on_the_31st_clamps_into_february() {
    // anchor 2024-01-31, reference 2024-02-01: leap February clamps to the 29th
    let event = recurring_event(
        RecurrenceRule::calendar_unit(false, true, false).unwrap(),
        date(2024, 1, 31),
    );
    assert_eq!(
        next_occurrence(&event, date(2024, 2, 1)),
        Ok(date(2024, 2, 29))
    );
}

#[test]
fn biweekly_interval_advances_from_anchor() {
    let event = recurring_event(
        RecurrenceRule::fixed_interval(2, IntervalUnit::Weeks).unwrap(),
        date(2024, 3, 1),
    );
    assert_eq!(
        next_occurrence(&event, date(2024, 3, 10)),
        Ok(date(2024, 3, 15))
    );
}

#[test]
fn last_weekday_rule_settles_for_the_fourth_occurrence() {
    // February 2024 has exactly four Mondays; "last" must not invent a fifth
    let event = recurring_event(
        RecurrenceRule::ByWeekdayOccurrenceInMonth { nth: 0 },
        date(2024, 1, 29), // last Monday of January 2024
    );
    assert_eq!(
        next_occurrence(&event, date(2024, 2, 1)),
        Ok(date(2024, 2, 26))
    );
}

#[test]
fn next_occurrence_is_monotone_and_idempotent() {
    let rules = [
        RecurrenceRule::calendar_unit(true, true, true).unwrap(),
        RecurrenceRule::ByWeekdayOccurrenceInMonth { nth: 2 },
        RecurrenceRule::fixed_interval(11, IntervalUnit::Days).unwrap(),
        RecurrenceRule::ByEndOfMonthOffset { days_before_end: 3 },
    ];
    for rule in rules {
        let event = recurring_event(rule, date(2024, 1, 9));
        let mut reference = date(2023, 12, 1);
        for _ in 0..200 {
            let next = next_occurrence(&event, reference).unwrap();
            assert!(next >= reference, "{rule:?}: {next} < {reference}");
            // same inputs, same answer
            assert_eq!(next_occurrence(&event, reference), Ok(next));
            reference = add_days(reference, 1);
        }
    }
}

#[test]
fn exception_dates_are_never_reported() {
    let mut event = recurring_event(
        RecurrenceRule::calendar_unit(true, false, false).unwrap(),
        date(2024, 6, 3),
    );
    event.add_exception(date(2024, 6, 17));
    event.add_exception(date(2024, 7, 1));

    for exception in [date(2024, 6, 17), date(2024, 7, 1)] {
        let resolved = next_occurrence(&event, exception).unwrap();
        assert_ne!(resolved, exception);
    }

    let july = occurrences_between(&event, date(2024, 6, 1), date(2024, 7, 31));
    assert!(!july.contains(&date(2024, 6, 17)));
    assert!(!july.contains(&date(2024, 7, 1)));
    assert!(july.contains(&date(2024, 6, 24)));
}

#[test]
fn exhausted_series_reports_no_occurrence() {
    let event = recurring_event(RecurrenceRule::Once, date(2024, 6, 1));
    assert_eq!(
        next_occurrence(&event, date(2024, 6, 2)),
        Err(ResolveError::NoOccurrenceFound)
    );
}

#[test]
fn multi_unit_rule_unions_sub_series() {
    // weekly and yearly on the same anchor
    let event = recurring_event(
        RecurrenceRule::calendar_unit(true, false, true).unwrap(),
        date(2024, 2, 29),
    );
    // a week after the anchor the weekly series wins
    assert_eq!(
        next_occurrence(&event, date(2024, 3, 1)),
        Ok(date(2024, 3, 7))
    );
}
