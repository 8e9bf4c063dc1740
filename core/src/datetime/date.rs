// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// A calendar day that may or may not carry a time of day.
///
/// Equality compares the day only, unless both sides carry a time; an
/// all-day anchor at 2024-07-18 equals a timed anchor on the same day.
#[derive(Debug, Clone, Copy)]
pub enum CalendarDate {
    /// Date only, no time of day.
    DateOnly(NaiveDate),

    /// Date with a time of day.
    WithTime(NaiveDateTime),
}

impl CalendarDate {
    /// Returns the date part.
    pub fn date(&self) -> NaiveDate {
        match self {
            CalendarDate::DateOnly(d) => *d,
            CalendarDate::WithTime(dt) => dt.date(),
        }
    }

    /// Returns the time part, if the date carries one.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            CalendarDate::DateOnly(_) => None,
            CalendarDate::WithTime(dt) => Some(dt.time()),
        }
    }

    /// The instant this date stands for, midnight when no time is carried.
    pub fn instant(&self) -> NaiveDateTime {
        match self {
            CalendarDate::DateOnly(d) => d.and_time(NaiveTime::MIN),
            CalendarDate::WithTime(dt) => *dt,
        }
    }

    /// The same time of day transplanted onto another date.
    pub(crate) fn on_date(&self, date: NaiveDate) -> CalendarDate {
        match self {
            CalendarDate::DateOnly(_) => CalendarDate::DateOnly(date),
            CalendarDate::WithTime(dt) => CalendarDate::WithTime(date.and_time(dt.time())),
        }
    }
}

impl PartialEq for CalendarDate {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CalendarDate::WithTime(a), CalendarDate::WithTime(b)) => a == b,
            _ => self.date() == other.date(),
        }
    }
}

impl Eq for CalendarDate {}

impl From<NaiveDate> for CalendarDate {
    fn from(d: NaiveDate) -> Self {
        CalendarDate::DateOnly(d)
    }
}

impl From<NaiveDateTime> for CalendarDate {
    fn from(dt: NaiveDateTime) -> Self {
        CalendarDate::WithTime(dt)
    }
}
