// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

mod alarm;
mod datetime;
mod error;
mod event;
mod holiday;
mod recurrence;
mod remind;
mod resolver;

pub use crate::alarm::{
    AlarmEntry, AlarmHandler, AlarmScheduler, AlarmState, EventStore, compute_trigger,
};
pub use crate::datetime::{
    CalendarDate, add_days, add_months, add_years, day_difference, days_to_end_of_month,
    last_day_of_month, nth_weekday_index, nth_weekday_of_month, weekday_of,
};
pub use crate::error::{HolidayError, ResolveError, RuleCodeError};
pub use crate::event::{Category, Event, EventId, EventKind};
pub use crate::holiday::{
    DateRule, HolidayCalendar, HolidayConfig, HolidayDefinition, HolidayGroup, HolidayMask,
    holiday_definitions,
};
pub use crate::recurrence::{IntervalUnit, RecurrenceRule};
pub use crate::remind::{LeadTime, REMIND_OPTIONS, RemindOption};
pub use crate::resolver::{following_occurrence, next_occurrence, occurrences_between};
