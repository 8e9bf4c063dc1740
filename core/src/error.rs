// SPDX-FileCopyrightText: 2026 Termin contributors
//
// SPDX-License-Identifier: Apache-2.0

/// Failure to decode a persisted recurrence rule code.
///
/// Callers at the storage boundary fall back to a one-time rule and log;
/// see [`RecurrenceRule::decode_or_once`](crate::RecurrenceRule::decode_or_once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RuleCodeError {
    /// The integer maps to no representable rule.
    #[error("invalid recurrence rule code: {0}")]
    InvalidRuleCode(u16),
}

/// Failure to resolve a concrete occurrence of an event.
///
/// The only member that may reach the user, as "this event has no
/// further occurrences". Not fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// The series is exhausted, or every candidate within the bounded
    /// search window is an exception date.
    #[error("event has no further occurrence")]
    NoOccurrenceFound,
}

/// Failure to materialize holidays for a year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum HolidayError {
    /// Year outside the supported range; no holidays are rendered.
    #[error("holiday computation is not supported for year {0}")]
    UnsupportedYear(i32),
}
