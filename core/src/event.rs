// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeSet;
use std::fmt::Display;

use chrono::NaiveDate;

use crate::{CalendarDate, RecurrenceRule, RemindOption};

/// Identifier of an event, the persisted integer id of the storage layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct EventId(pub u32);

impl Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What kind of calendar entry an event is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventKind {
    /// A user-authored event.
    #[default]
    User,

    /// A statutory holiday.
    HolidayByLaw,

    /// A special (non-statutory) holiday or commemorative day.
    HolidaySpecial,

    /// An action or world day.
    ActionDay,

    /// The start of an astronomical season.
    Season,

    /// A daylight-saving clock change.
    TimeShift,
}

/// Display category of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Category {
    /// No particular category.
    #[default]
    General,

    /// Statutory holidays.
    Holiday,

    /// Commemorative and special days.
    Commemoration,

    /// Action and world days.
    ActionDay,

    /// Season starts and clock changes.
    Season,

    /// Private appointments.
    Private,

    /// Work appointments.
    Work,
}

/// A calendar event: one anchor date plus a recurrence description.
///
/// Mutated only by its owning context between resolver calls; the
/// resolver itself never writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    /// The persisted id.
    pub id: EventId,

    /// The display name.
    pub summary: String,

    /// The date (and optional time) of the first occurrence.
    pub anchor: CalendarDate,

    /// Last day of a multi-day event, if any.
    pub end: Option<NaiveDate>,

    /// How the event repeats.
    pub rule: RecurrenceRule,

    /// Dates removed from the series. Only meaningful for recurring rules.
    pub exceptions: BTreeSet<NaiveDate>,

    /// The display category.
    pub category: Category,

    /// Reminder lead time, overriding the application default.
    pub reminder: Option<RemindOption>,

    /// What kind of entry this is.
    pub kind: EventKind,
}

impl Event {
    /// Creates a one-time user event with no reminder.
    pub fn new(id: EventId, summary: impl Into<String>, anchor: impl Into<CalendarDate>) -> Self {
        Self {
            id,
            summary: summary.into(),
            anchor: anchor.into(),
            end: None,
            rule: RecurrenceRule::Once,
            exceptions: BTreeSet::new(),
            category: Category::General,
            reminder: None,
            kind: EventKind::User,
        }
    }

    /// Removes one date from the series.
    ///
    /// Exceptions apply to recurring rules only; for a one-time event
    /// this is a no-op and returns `false`.
    pub fn add_exception(&mut self, date: NaiveDate) -> bool {
        if !self.rule.is_recurring() {
            tracing::warn!(id = %self.id, %date, "exception on a one-time event ignored");
            return false;
        }
        self.exceptions.insert(date)
    }

    /// Whether the given date is removed from the series.
    pub fn is_exception(&self, date: NaiveDate) -> bool {
        self.rule.is_recurring() && self.exceptions.contains(&date)
    }
}
