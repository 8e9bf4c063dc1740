// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Shared fixtures for the integration tests.

use chrono::NaiveDate;
use termin_core::{Event, EventId, RecurrenceRule};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn recurring_event(rule: RecurrenceRule, anchor: NaiveDate) -> Event {
    let mut event = Event::new(EventId(1), "fixture", anchor);
    event.rule = rule;
    event
}
