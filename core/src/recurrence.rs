// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

use chrono::NaiveDate;

use crate::RuleCodeError;
use crate::datetime::{days_to_end_of_month, nth_weekday_index};

/// The step unit of a fixed-interval recurrence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalUnit {
    /// Calendar days.
    Days,

    /// Calendar weeks (seven days).
    Weeks,

    /// Calendar months; the day-of-month clamps to shorter months.
    Months,

    /// Calendar years; Feb 29 falls back to Feb 28.
    Years,
}

impl IntervalUnit {
    const ALL: [IntervalUnit; 4] = [
        IntervalUnit::Days,
        IntervalUnit::Weeks,
        IntervalUnit::Months,
        IntervalUnit::Years,
    ];

    fn index(self) -> u16 {
        match self {
            IntervalUnit::Days => 0,
            IntervalUnit::Weeks => 1,
            IntervalUnit::Months => 2,
            IntervalUnit::Years => 3,
        }
    }
}

/// How an event repeats.
///
/// The persisted form is a single 16-bit integer ([`encode`](Self::encode));
/// the scheme is append-only and bit-compatible across versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecurrenceRule {
    /// A single, non-repeating occurrence at the anchor date.
    Once,

    /// Repeats on every active calendar unit, as independent sub-series
    /// sharing the anchor. At least one flag is set.
    ByCalendarUnit {
        /// Every 7 days from the anchor.
        weekly: bool,
        /// Same day-of-month every month, clamped to shorter months.
        monthly: bool,
        /// Same month/day every year; Feb 29 falls back to Feb 28.
        yearly: bool,
    },

    /// The nth occurrence of the anchor's weekday in every month;
    /// `nth == 0` means the last occurrence.
    ByWeekdayOccurrenceInMonth {
        /// 0 = last, otherwise 1..=5.
        nth: u8,
    },

    /// Every `count` units from the anchor, `count` in 1..=30.
    ByFixedInterval {
        /// Number of units between occurrences.
        count: u8,
        /// The unit stepped by.
        unit: IntervalUnit,
    },

    /// A fixed number of days before the end of every month.
    ByEndOfMonthOffset {
        /// Days before the last day of the month, 0 = the last day itself.
        days_before_end: u32,
    },
}

const CODE_WEEKLY: u16 = 1 << 0;
const CODE_MONTHLY: u16 = 1 << 1;
const CODE_YEARLY: u16 = 1 << 2;
const CODE_WEEKDAY_OCCURRENCE: u16 = 8;
const CODE_END_OF_MONTH: u16 = 9;
const CODE_INTERVAL_BASE: u16 = 16;
const INTERVAL_COUNT_MAX: u16 = 30;

impl RecurrenceRule {
    /// Builds a calendar-unit rule; `None` when no flag is set.
    pub fn calendar_unit(weekly: bool, monthly: bool, yearly: bool) -> Option<Self> {
        (weekly || monthly || yearly).then_some(RecurrenceRule::ByCalendarUnit {
            weekly,
            monthly,
            yearly,
        })
    }

    /// Builds a fixed-interval rule; `None` when `count` is outside 1..=30.
    pub fn fixed_interval(count: u8, unit: IntervalUnit) -> Option<Self> {
        (1..=INTERVAL_COUNT_MAX as u8)
            .contains(&count)
            .then_some(RecurrenceRule::ByFixedInterval { count, unit })
    }

    /// The persisted 16-bit code of this rule.
    ///
    /// Bits 0/1/2 carry the weekly/monthly/yearly flags (all clear is
    /// `Once`), 8 and 9 are the weekday-occurrence and end-of-month
    /// sentinels, and everything from 16 on encodes fixed intervals as
    /// `16 + unit*30 + (count-1)`. The two sentinel variants carry no
    /// payload bits; their parameters derive from the anchor date.
    pub fn encode(&self) -> u16 {
        match *self {
            RecurrenceRule::Once => 0,
            RecurrenceRule::ByCalendarUnit {
                weekly,
                monthly,
                yearly,
            } => {
                let mut code = 0;
                if weekly {
                    code |= CODE_WEEKLY;
                }
                if monthly {
                    code |= CODE_MONTHLY;
                }
                if yearly {
                    code |= CODE_YEARLY;
                }
                code
            }
            RecurrenceRule::ByWeekdayOccurrenceInMonth { .. } => CODE_WEEKDAY_OCCURRENCE,
            RecurrenceRule::ByEndOfMonthOffset { .. } => CODE_END_OF_MONTH,
            RecurrenceRule::ByFixedInterval { count, unit } => {
                let count = u16::from(count).clamp(1, INTERVAL_COUNT_MAX);
                CODE_INTERVAL_BASE + unit.index() * INTERVAL_COUNT_MAX + (count - 1)
            }
        }
    }

    /// Decodes a persisted code back into a rule.
    ///
    /// The sentinel variants take their parameters from `anchor`, so
    /// `decode(r.encode(), anchor) == r` for every rule constructed
    /// from that anchor. Unmapped values fail with
    /// [`RuleCodeError::InvalidRuleCode`].
    pub fn decode(code: u16, anchor: NaiveDate) -> Result<Self, RuleCodeError> {
        match code {
            0 => Ok(RecurrenceRule::Once),
            1..=7 => Ok(RecurrenceRule::ByCalendarUnit {
                weekly: code & CODE_WEEKLY != 0,
                monthly: code & CODE_MONTHLY != 0,
                yearly: code & CODE_YEARLY != 0,
            }),
            CODE_WEEKDAY_OCCURRENCE => Ok(RecurrenceRule::ByWeekdayOccurrenceInMonth {
                nth: nth_weekday_index(anchor),
            }),
            CODE_END_OF_MONTH => Ok(RecurrenceRule::ByEndOfMonthOffset {
                days_before_end: days_to_end_of_month(anchor),
            }),
            CODE_INTERVAL_BASE.. => {
                let offset = code - CODE_INTERVAL_BASE;
                let unit = IntervalUnit::ALL
                    .get((offset / INTERVAL_COUNT_MAX) as usize)
                    .copied()
                    .ok_or(RuleCodeError::InvalidRuleCode(code))?;
                let count = (offset % INTERVAL_COUNT_MAX + 1) as u8;
                Ok(RecurrenceRule::ByFixedInterval { count, unit })
            }
            _ => Err(RuleCodeError::InvalidRuleCode(code)),
        }
    }

    /// Decodes a persisted code, falling back to `Once` on malformed input.
    pub fn decode_or_once(code: u16, anchor: NaiveDate) -> Self {
        match Self::decode(code, anchor) {
            Ok(rule) => rule,
            Err(e) => {
                tracing::warn!(code, %e, "malformed recurrence code, falling back to once");
                RecurrenceRule::Once
            }
        }
    }

    /// Whether this rule produces more than one occurrence.
    pub fn is_recurring(&self) -> bool {
        !matches!(self, RecurrenceRule::Once)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_once_is_zero() {
        assert_eq!(RecurrenceRule::Once.encode(), 0);
        assert_eq!(
            RecurrenceRule::decode(0, date(2024, 1, 1)),
            Ok(RecurrenceRule::Once)
        );
    }

    #[test]
    fn test_calendar_unit_flag_bits() {
        let rule = RecurrenceRule::calendar_unit(true, false, true).unwrap();
        assert_eq!(rule.encode(), 0b101);

        assert_eq!(RecurrenceRule::calendar_unit(false, false, false), None);
    }

    #[test]
    fn test_interval_code_layout() {
        let daily = RecurrenceRule::fixed_interval(1, IntervalUnit::Days).unwrap();
        assert_eq!(daily.encode(), 16);

        let yearly30 = RecurrenceRule::fixed_interval(30, IntervalUnit::Years).unwrap();
        assert_eq!(yearly30.encode(), 16 + 3 * 30 + 29);

        assert_eq!(RecurrenceRule::fixed_interval(0, IntervalUnit::Days), None);
        assert_eq!(RecurrenceRule::fixed_interval(31, IntervalUnit::Days), None);
    }

    #[test]
    fn test_roundtrip_all_flag_and_interval_codes() {
        let anchor = date(2024, 5, 17);
        for code in (1..=7).chain(16..136) {
            let rule = RecurrenceRule::decode(code, anchor).unwrap();
            assert_eq!(rule.encode(), code, "code {code} must round-trip");
        }
    }

    #[test]
    fn test_roundtrip_sentinels_derive_from_anchor() {
        // 2024-08-09 is the 2nd Friday of its month
        let anchor = date(2024, 8, 9);
        let rule = RecurrenceRule::ByWeekdayOccurrenceInMonth { nth: 2 };
        assert_eq!(RecurrenceRule::decode(rule.encode(), anchor), Ok(rule));

        // 2024-12-24 is 7 days before the end of December
        let anchor = date(2024, 12, 24);
        let rule = RecurrenceRule::ByEndOfMonthOffset {
            days_before_end: 7,
        };
        assert_eq!(RecurrenceRule::decode(rule.encode(), anchor), Ok(rule));
    }

    #[test]
    fn test_unmapped_codes_fail() {
        let anchor = date(2024, 1, 1);
        for code in [10, 11, 15, 136, 200, u16::MAX] {
            assert_eq!(
                RecurrenceRule::decode(code, anchor),
                Err(RuleCodeError::InvalidRuleCode(code))
            );
        }
    }

    #[test]
    fn test_decode_or_once_falls_back() {
        let anchor = date(2024, 1, 1);
        assert_eq!(
            RecurrenceRule::decode_or_once(15, anchor),
            RecurrenceRule::Once
        );
        assert_eq!(
            RecurrenceRule::decode_or_once(16, anchor),
            RecurrenceRule::ByFixedInterval {
                count: 1,
                unit: IntervalUnit::Days
            }
        );
    }
}
