// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate};

use crate::datetime::add_days;

/// Easter Sunday by the anonymous Gregorian (Meeus) algorithm.
/// Valid for Gregorian years from 1583 on.
pub(crate) fn easter_sunday(year: i32) -> NaiveDate {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
        .expect("easter formula yields a valid March or April date")
}

/// The 4th Advent: the latest Sunday on or before Dec 24.
pub(crate) fn fourth_advent(year: i32) -> NaiveDate {
    let christmas_eve =
        NaiveDate::from_ymd_opt(year, 12, 24).expect("Dec 24 exists in every year");
    let back = christmas_eve.weekday().num_days_from_sunday();
    add_days(christmas_eve, -i64::from(back))
}
