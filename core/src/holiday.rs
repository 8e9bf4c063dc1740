// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

mod defs;
mod easter;

use std::collections::HashMap;

use chrono::{NaiveDate, Weekday};

use crate::datetime::{add_days, nth_weekday_of_month};
use crate::{CalendarDate, Category, Event, EventId, EventKind, HolidayError, RecurrenceRule};

pub use defs::{DateRule, HolidayDefinition, HolidayGroup, holiday_definitions};
use easter::{easter_sunday, fourth_advent};

/// Years the Easter formula and the chrono range both cover.
const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 1583..=9999;

/// Event-id slots reserved for the two clock-change events, above any
/// catalogue index.
const ID_SLOT_DST_START: u32 = 254;
const ID_SLOT_DST_END: u32 = 255;

/// One 32-bit selection mask of a holiday group.
///
/// The bit layout is the persisted format; call sites never touch the
/// raw integer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct HolidayMask(u32);

impl HolidayMask {
    /// A mask with no bit set.
    pub const fn empty() -> Self {
        HolidayMask(0)
    }

    /// Wraps a persisted raw mask.
    pub const fn from_raw(raw: u32) -> Self {
        HolidayMask(raw)
    }

    /// The persisted raw form.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether the given bit is set.
    pub fn contains(self, bit: u8) -> bool {
        bit < 32 && self.0 & (1 << bit) != 0
    }

    /// Sets the given bit.
    pub fn set(&mut self, bit: u8) {
        if bit < 32 {
            self.0 |= 1 << bit;
        }
    }

    /// Clears the given bit.
    pub fn clear(&mut self, bit: u8) {
        if bit < 32 {
            self.0 &= !(1 << bit);
        }
    }
}

/// Which holidays are active, one mask per group.
///
/// Cloned before a settings session is edited, so cancelling the
/// session leaves the live configuration untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HolidayConfig {
    /// Statutory holidays.
    pub law: HolidayMask,

    /// Special and commemorative days.
    pub special: HolidayMask,

    /// Action/world days, first mask.
    pub action1: HolidayMask,

    /// Action/world days and seasons, second mask.
    pub action2: HolidayMask,
}

impl HolidayConfig {
    /// A configuration with every catalogued holiday active.
    pub fn all() -> Self {
        let mut config = HolidayConfig::default();
        for def in holiday_definitions() {
            config.mask_mut(def.group).set(def.bit);
        }
        config
    }

    /// The mask of a group.
    pub fn mask(&self, group: HolidayGroup) -> HolidayMask {
        match group {
            HolidayGroup::Law => self.law,
            HolidayGroup::Special => self.special,
            HolidayGroup::Action1 => self.action1,
            HolidayGroup::Action2 => self.action2,
        }
    }

    /// Mutable access to the mask of a group.
    pub fn mask_mut(&mut self, group: HolidayGroup) -> &mut HolidayMask {
        match group {
            HolidayGroup::Law => &mut self.law,
            HolidayGroup::Special => &mut self.special,
            HolidayGroup::Action1 => &mut self.action1,
            HolidayGroup::Action2 => &mut self.action2,
        }
    }

    /// Whether a catalogue entry is selected.
    pub fn is_active(&self, def: &HolidayDefinition) -> bool {
        self.mask(def.group).contains(def.bit)
    }
}

/// Materializes holiday, action-day, season and clock-change events
/// for a year.
///
/// Easter Sunday and the 4th Advent are memoized per year on this
/// value; callers own the cache lifetime.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    easter: HashMap<i32, NaiveDate>,
    advent: HashMap<i32, NaiveDate>,
}

impl HolidayCalendar {
    /// Creates a calendar with empty caches.
    pub fn new() -> Self {
        Self::default()
    }

    /// Easter Sunday of the year, cached.
    pub fn easter_sunday(&mut self, year: i32) -> NaiveDate {
        *self.easter.entry(year).or_insert_with(|| easter_sunday(year))
    }

    /// The 4th Advent of the year, cached.
    pub fn fourth_advent(&mut self, year: i32) -> NaiveDate {
        *self.advent.entry(year).or_insert_with(|| fourth_advent(year))
    }

    /// All events the configuration selects for `year`, in catalogue
    /// order, the two clock-change events last.
    ///
    /// Identical `(config, year)` inputs produce identical output; the
    /// export/diff path relies on that.
    pub fn holidays_for_year(
        &mut self,
        config: &HolidayConfig,
        year: i32,
    ) -> Result<Vec<Event>, HolidayError> {
        if !SUPPORTED_YEARS.contains(&year) {
            return Err(HolidayError::UnsupportedYear(year));
        }

        let easter = self.easter_sunday(year);
        let advent = self.fourth_advent(year);

        let mut events = Vec::new();
        for (index, def) in holiday_definitions().iter().enumerate() {
            if !config.is_active(def) {
                continue;
            }
            let Some(date) = resolve_rule(def.rule, year, easter, advent) else {
                // A selected bit whose rule yields no date is a catalogue
                // gap; skip the entry rather than fail the whole year.
                tracing::error!(id = def.id, year, "holiday rule yielded no date, skipped");
                continue;
            };
            events.push(holiday_event(def, holiday_id(year, index as u32), date));
        }

        // Clock changes are always shown, independent of the masks.
        events.extend(time_shift_events(year));

        Ok(events)
    }
}

fn resolve_rule(
    rule: DateRule,
    year: i32,
    easter: NaiveDate,
    advent: NaiveDate,
) -> Option<NaiveDate> {
    match rule {
        DateRule::Fixed { month, day } => NaiveDate::from_ymd_opt(year, month, day),
        DateRule::EasterOffset(o) => Some(add_days(easter, o)),
        DateRule::AdventOffset(o) => Some(add_days(advent, o)),
        DateRule::WeekdayOfMonth {
            month,
            weekday,
            nth,
        } => nth_weekday_of_month(year, month, weekday, nth),
    }
}

fn holiday_id(year: i32, slot: u32) -> EventId {
    EventId((year as u32) << 8 | slot)
}

fn holiday_event(def: &HolidayDefinition, id: EventId, date: NaiveDate) -> Event {
    Event {
        id,
        summary: def.title.to_string(),
        anchor: CalendarDate::DateOnly(date),
        end: None,
        rule: RecurrenceRule::Once,
        exceptions: Default::default(),
        category: category_for(def.kind),
        reminder: None,
        kind: def.kind,
    }
}

/// DST starts on the last Sunday of March and ends on the last Sunday
/// of October. Both dates exist in every supported year.
fn time_shift_events(year: i32) -> Vec<Event> {
    [
        (3, ID_SLOT_DST_START, "Beginn der Sommerzeit"),
        (10, ID_SLOT_DST_END, "Ende der Sommerzeit"),
    ]
    .into_iter()
    .filter_map(|(month, slot, title)| {
        let date = nth_weekday_of_month(year, month, Weekday::Sun, 0)?;
        Some(Event {
            id: holiday_id(year, slot),
            summary: title.to_string(),
            anchor: CalendarDate::DateOnly(date),
            end: None,
            rule: RecurrenceRule::Once,
            exceptions: Default::default(),
            category: Category::Season,
            reminder: None,
            kind: EventKind::TimeShift,
        })
    })
    .collect()
}

fn category_for(kind: EventKind) -> Category {
    match kind {
        EventKind::User => Category::General,
        EventKind::HolidayByLaw => Category::Holiday,
        EventKind::HolidaySpecial => Category::Commemoration,
        EventKind::ActionDay => Category::ActionDay,
        EventKind::Season | EventKind::TimeShift => Category::Season,
    }
}
