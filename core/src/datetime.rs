// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

mod date;
mod math;

pub use date::CalendarDate;
pub use math::{
    add_days, add_months, add_years, day_difference, days_to_end_of_month, last_day_of_month,
    nth_weekday_index, nth_weekday_of_month, weekday_of,
};
pub(crate) use math::clamped_ymd;
