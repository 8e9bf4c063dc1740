// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::TimeDelta;

/// Lead time of a reminder: minutes for timed same-day reminders,
/// whole days otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadTime {
    /// Minutes before the occurrence instant.
    Minutes(u32),

    /// Days before the occurrence day.
    Days(u32),
}

impl LeadTime {
    pub(crate) fn delta(self) -> TimeDelta {
        match self {
            LeadTime::Minutes(m) => TimeDelta::minutes(i64::from(m)),
            LeadTime::Days(d) => TimeDelta::days(i64::from(d)),
        }
    }
}

/// One entry of the fixed reminder table.
///
/// The short code is the stable on-disk and import/export form; the
/// table is append-only so codes never change meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemindOption {
    /// Stable persisted code.
    pub short_code: &'static str,

    /// Human-readable name.
    pub display_name: &'static str,

    /// The lead time.
    pub lead: LeadTime,
}

/// The fixed reminder table.
pub const REMIND_OPTIONS: &[RemindOption] = &[
    RemindOption {
        short_code: "0m",
        display_name: "at the time",
        lead: LeadTime::Minutes(0),
    },
    RemindOption {
        short_code: "5m",
        display_name: "5 minutes before",
        lead: LeadTime::Minutes(5),
    },
    RemindOption {
        short_code: "10m",
        display_name: "10 minutes before",
        lead: LeadTime::Minutes(10),
    },
    RemindOption {
        short_code: "15m",
        display_name: "15 minutes before",
        lead: LeadTime::Minutes(15),
    },
    RemindOption {
        short_code: "30m",
        display_name: "30 minutes before",
        lead: LeadTime::Minutes(30),
    },
    RemindOption {
        short_code: "45m",
        display_name: "45 minutes before",
        lead: LeadTime::Minutes(45),
    },
    RemindOption {
        short_code: "1h",
        display_name: "1 hour before",
        lead: LeadTime::Minutes(60),
    },
    RemindOption {
        short_code: "2h",
        display_name: "2 hours before",
        lead: LeadTime::Minutes(120),
    },
    RemindOption {
        short_code: "6h",
        display_name: "6 hours before",
        lead: LeadTime::Minutes(360),
    },
    RemindOption {
        short_code: "12h",
        display_name: "12 hours before",
        lead: LeadTime::Minutes(720),
    },
    RemindOption {
        short_code: "0d",
        display_name: "on the day",
        lead: LeadTime::Days(0),
    },
    RemindOption {
        short_code: "1d",
        display_name: "1 day before",
        lead: LeadTime::Days(1),
    },
    RemindOption {
        short_code: "2d",
        display_name: "2 days before",
        lead: LeadTime::Days(2),
    },
    RemindOption {
        short_code: "3d",
        display_name: "3 days before",
        lead: LeadTime::Days(3),
    },
    RemindOption {
        short_code: "1w",
        display_name: "1 week before",
        lead: LeadTime::Days(7),
    },
    RemindOption {
        short_code: "2w",
        display_name: "2 weeks before",
        lead: LeadTime::Days(14),
    },
];

impl RemindOption {
    /// Looks an option up by its stable short code.
    pub fn by_short_code(code: &str) -> Option<RemindOption> {
        REMIND_OPTIONS.iter().find(|o| o.short_code == code).copied()
    }
}
