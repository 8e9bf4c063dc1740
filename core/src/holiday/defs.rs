// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

//! The static holiday catalogue.
//!
//! Bit positions are part of the persisted configuration format:
//! unique within their group and append-only. New holidays take new
//! bits; existing bits are never reassigned.

use chrono::Weekday;

use crate::EventKind;

/// Which configuration mask a holiday definition belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayGroup {
    /// Statutory holidays.
    Law,

    /// Special and commemorative days.
    Special,

    /// Action/world days, first mask.
    Action1,

    /// Action/world days and seasons, second mask.
    Action2,
}

/// How a holiday's concrete date is found within a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateRule {
    /// The same month and day every year.
    Fixed { month: u32, day: u32 },

    /// A fixed number of days from Easter Sunday.
    EasterOffset(i64),

    /// A fixed number of days from the 4th Advent.
    AdventOffset(i64),

    /// The nth (0 = last) occurrence of a weekday in a month.
    WeekdayOfMonth {
        month: u32,
        weekday: Weekday,
        nth: u8,
    },
}

/// One entry of the holiday catalogue.
#[derive(Debug, Clone, Copy)]
pub struct HolidayDefinition {
    /// Stable identifier.
    pub id: &'static str,

    /// The mask this definition is selected by.
    pub group: HolidayGroup,

    /// Bit position within the group mask, 0..=31.
    pub bit: u8,

    /// Display title.
    pub title: &'static str,

    /// The date rule.
    pub rule: DateRule,

    /// Kind of the materialized event.
    pub kind: EventKind,
}

const fn fixed(month: u32, day: u32) -> DateRule {
    DateRule::Fixed { month, day }
}

/// The full catalogue, in materialization order.
pub fn holiday_definitions() -> &'static [HolidayDefinition] {
    DEFINITIONS
}

static DEFINITIONS: &[HolidayDefinition] = &[
    // ── statutory ──────────────────────────────────────────────────
    def("neujahr", HolidayGroup::Law, 0, "Neujahr", fixed(1, 1)),
    def(
        "heilige-drei-koenige",
        HolidayGroup::Law,
        1,
        "Heilige Drei Könige",
        fixed(1, 6),
    ),
    def(
        "karfreitag",
        HolidayGroup::Law,
        2,
        "Karfreitag",
        DateRule::EasterOffset(-2),
    ),
    def(
        "ostersonntag",
        HolidayGroup::Law,
        3,
        "Ostersonntag",
        DateRule::EasterOffset(0),
    ),
    def(
        "ostermontag",
        HolidayGroup::Law,
        4,
        "Ostermontag",
        DateRule::EasterOffset(1),
    ),
    def("tag-der-arbeit", HolidayGroup::Law, 5, "Tag der Arbeit", fixed(5, 1)),
    def(
        "christi-himmelfahrt",
        HolidayGroup::Law,
        6,
        "Christi Himmelfahrt",
        DateRule::EasterOffset(39),
    ),
    def(
        "pfingstsonntag",
        HolidayGroup::Law,
        7,
        "Pfingstsonntag",
        DateRule::EasterOffset(49),
    ),
    def(
        "pfingstmontag",
        HolidayGroup::Law,
        8,
        "Pfingstmontag",
        DateRule::EasterOffset(50),
    ),
    def(
        "fronleichnam",
        HolidayGroup::Law,
        9,
        "Fronleichnam",
        DateRule::EasterOffset(60),
    ),
    def(
        "mariae-himmelfahrt",
        HolidayGroup::Law,
        10,
        "Mariä Himmelfahrt",
        fixed(8, 15),
    ),
    def(
        "tag-der-deutschen-einheit",
        HolidayGroup::Law,
        11,
        "Tag der Deutschen Einheit",
        fixed(10, 3),
    ),
    def(
        "reformationstag",
        HolidayGroup::Law,
        12,
        "Reformationstag",
        fixed(10, 31),
    ),
    def("allerheiligen", HolidayGroup::Law, 13, "Allerheiligen", fixed(11, 1)),
    def(
        "buss-und-bettag",
        HolidayGroup::Law,
        14,
        "Buß- und Bettag",
        DateRule::AdventOffset(-32),
    ),
    def(
        "erster-weihnachtstag",
        HolidayGroup::Law,
        15,
        "1. Weihnachtstag",
        fixed(12, 25),
    ),
    def(
        "zweiter-weihnachtstag",
        HolidayGroup::Law,
        16,
        "2. Weihnachtstag",
        fixed(12, 26),
    ),
    def(
        "internationaler-frauentag",
        HolidayGroup::Law,
        17,
        "Internationaler Frauentag",
        fixed(3, 8),
    ),
    def("weltkindertag", HolidayGroup::Law, 18, "Weltkindertag", fixed(9, 20)),
    def(
        "augsburger-friedensfest",
        HolidayGroup::Law,
        19,
        "Augsburger Friedensfest",
        fixed(8, 8),
    ),
    // ── special days ───────────────────────────────────────────────
    def(
        "valentinstag",
        HolidayGroup::Special,
        0,
        "Valentinstag",
        fixed(2, 14),
    ),
    def(
        "weiberfastnacht",
        HolidayGroup::Special,
        1,
        "Weiberfastnacht",
        DateRule::EasterOffset(-52),
    ),
    def(
        "rosenmontag",
        HolidayGroup::Special,
        2,
        "Rosenmontag",
        DateRule::EasterOffset(-48),
    ),
    def(
        "aschermittwoch",
        HolidayGroup::Special,
        3,
        "Aschermittwoch",
        DateRule::EasterOffset(-46),
    ),
    def(
        "palmsonntag",
        HolidayGroup::Special,
        4,
        "Palmsonntag",
        DateRule::EasterOffset(-7),
    ),
    def(
        "gruendonnerstag",
        HolidayGroup::Special,
        5,
        "Gründonnerstag",
        DateRule::EasterOffset(-3),
    ),
    def(
        "walpurgisnacht",
        HolidayGroup::Special,
        6,
        "Walpurgisnacht",
        fixed(4, 30),
    ),
    def(
        "muttertag",
        HolidayGroup::Special,
        7,
        "Muttertag",
        DateRule::WeekdayOfMonth {
            month: 5,
            weekday: Weekday::Sun,
            nth: 2,
        },
    ),
    def(
        "siebenschlaefer",
        HolidayGroup::Special,
        8,
        "Siebenschläfertag",
        fixed(6, 27),
    ),
    def(
        "erntedankfest",
        HolidayGroup::Special,
        9,
        "Erntedankfest",
        DateRule::WeekdayOfMonth {
            month: 10,
            weekday: Weekday::Sun,
            nth: 1,
        },
    ),
    def("halloween", HolidayGroup::Special, 10, "Halloween", fixed(10, 31)),
    def("martinstag", HolidayGroup::Special, 11, "Martinstag", fixed(11, 11)),
    def(
        "volkstrauertag",
        HolidayGroup::Special,
        12,
        "Volkstrauertag",
        DateRule::AdventOffset(-35),
    ),
    def(
        "totensonntag",
        HolidayGroup::Special,
        13,
        "Totensonntag",
        DateRule::AdventOffset(-28),
    ),
    def(
        "erster-advent",
        HolidayGroup::Special,
        14,
        "1. Advent",
        DateRule::AdventOffset(-21),
    ),
    def(
        "zweiter-advent",
        HolidayGroup::Special,
        15,
        "2. Advent",
        DateRule::AdventOffset(-14),
    ),
    def(
        "dritter-advent",
        HolidayGroup::Special,
        16,
        "3. Advent",
        DateRule::AdventOffset(-7),
    ),
    def(
        "vierter-advent",
        HolidayGroup::Special,
        17,
        "4. Advent",
        DateRule::AdventOffset(0),
    ),
    def("nikolaus", HolidayGroup::Special, 18, "Nikolaus", fixed(12, 6)),
    def("heiligabend", HolidayGroup::Special, 19, "Heiligabend", fixed(12, 24)),
    def("silvester", HolidayGroup::Special, 20, "Silvester", fixed(12, 31)),
    // ── action and world days, first mask ──────────────────────────
    def(
        "weltwassertag",
        HolidayGroup::Action1,
        0,
        "Weltwassertag",
        fixed(3, 22),
    ),
    def(
        "weltgesundheitstag",
        HolidayGroup::Action1,
        1,
        "Weltgesundheitstag",
        fixed(4, 7),
    ),
    def("tag-der-erde", HolidayGroup::Action1, 2, "Tag der Erde", fixed(4, 22)),
    def(
        "welttag-des-buches",
        HolidayGroup::Action1,
        3,
        "Welttag des Buches",
        fixed(4, 23),
    ),
    def(
        "weltlachtag",
        HolidayGroup::Action1,
        4,
        "Weltlachtag",
        DateRule::WeekdayOfMonth {
            month: 5,
            weekday: Weekday::Sun,
            nth: 1,
        },
    ),
    def("weltbienentag", HolidayGroup::Action1, 5, "Weltbienentag", fixed(5, 20)),
    def("weltumwelttag", HolidayGroup::Action1, 6, "Weltumwelttag", fixed(6, 5)),
    def(
        "weltblutspendetag",
        HolidayGroup::Action1,
        7,
        "Weltblutspendetag",
        fixed(6, 14),
    ),
    def(
        "tag-der-freundschaft",
        HolidayGroup::Action1,
        8,
        "Internationaler Tag der Freundschaft",
        fixed(7, 30),
    ),
    def(
        "tag-des-bieres",
        HolidayGroup::Action1,
        9,
        "Internationaler Tag des Bieres",
        DateRule::WeekdayOfMonth {
            month: 8,
            weekday: Weekday::Fri,
            nth: 1,
        },
    ),
    def("weltkatzentag", HolidayGroup::Action1, 10, "Weltkatzentag", fixed(8, 8)),
    def(
        "weltalphabetisierungstag",
        HolidayGroup::Action1,
        11,
        "Weltalphabetisierungstag",
        fixed(9, 8),
    ),
    def(
        "welttierschutztag",
        HolidayGroup::Action1,
        12,
        "Welttierschutztag",
        fixed(10, 4),
    ),
    def("weltlehrertag", HolidayGroup::Action1, 13, "Weltlehrertag", fixed(10, 5)),
    def("weltspartag", HolidayGroup::Action1, 14, "Weltspartag", fixed(10, 30)),
    // ── action and world days and seasons, second mask ─────────────
    def(
        "weltknuddeltag",
        HolidayGroup::Action2,
        0,
        "Weltknuddeltag",
        fixed(1, 21),
    ),
    def(
        "tag-des-gluecks",
        HolidayGroup::Action2,
        1,
        "Internationaler Tag des Glücks",
        fixed(3, 20),
    ),
    def("towel-day", HolidayGroup::Action2, 2, "Towel Day", fixed(5, 25)),
    def("welthundetag", HolidayGroup::Action2, 3, "Welthundetag", fixed(10, 10)),
    def("weltnudeltag", HolidayGroup::Action2, 4, "Weltnudeltag", fixed(10, 25)),
    def(
        "welttoilettentag",
        HolidayGroup::Action2,
        5,
        "Welttoilettentag",
        fixed(11, 19),
    ),
    def("welt-aids-tag", HolidayGroup::Action2, 6, "Welt-AIDS-Tag", fixed(12, 1)),
    def(
        "tag-der-menschenrechte",
        HolidayGroup::Action2,
        7,
        "Tag der Menschenrechte",
        fixed(12, 10),
    ),
    season("fruehlingsanfang", 8, "Frühlingsanfang", 3, 20),
    season("sommeranfang", 9, "Sommeranfang", 6, 21),
    season("herbstanfang", 10, "Herbstanfang", 9, 23),
    season("winteranfang", 11, "Winteranfang", 12, 21),
];

const fn def(
    id: &'static str,
    group: HolidayGroup,
    bit: u8,
    title: &'static str,
    rule: DateRule,
) -> HolidayDefinition {
    let kind = match group {
        HolidayGroup::Law => EventKind::HolidayByLaw,
        HolidayGroup::Special => EventKind::HolidaySpecial,
        HolidayGroup::Action1 | HolidayGroup::Action2 => EventKind::ActionDay,
    };
    HolidayDefinition {
        id,
        group,
        bit,
        title,
        rule,
        kind,
    }
}

const fn season(
    id: &'static str,
    bit: u8,
    title: &'static str,
    month: u32,
    day: u32,
) -> HolidayDefinition {
    HolidayDefinition {
        id,
        group: HolidayGroup::Action2,
        bit,
        title,
        rule: DateRule::Fixed { month, day },
        kind: EventKind::Season,
    }
}
