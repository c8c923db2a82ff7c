// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::WeekParity;
use time::Date;

/// Errors that can occur while building or validating calendar inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A date range ends before it starts.
    InvalidDateRange {
        /// The requested first day.
        start: Date,
        /// The requested last day.
        end: Date,
    },
    /// A rest-day set does not contain 2 or 3 weekdays (strict mode only).
    InvalidRestDayCount {
        /// The week parity the set applies to.
        parity: WeekParity,
        /// The number of distinct weekdays supplied.
        count: usize,
    },
    /// The same weekday was listed twice in a rest-day set (strict mode only).
    DuplicateRestDay {
        /// The week parity the set applies to.
        parity: WeekParity,
        /// The repeated weekday.
        weekday: time::Weekday,
    },
    /// A weekday name could not be recognised.
    UnknownWeekday(String),
    /// A week parity name could not be recognised.
    UnknownParity(String),
    /// A status code could not be recognised.
    UnknownStatusCode(String),
    /// A derived status was supplied where only stored statuses are allowed.
    DerivedStatusNotStorable(String),
    /// Failed to parse a date from a string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { start, end } => {
                write!(f, "Invalid date range: {end} is before {start}")
            }
            Self::InvalidRestDayCount { parity, count } => {
                write!(
                    f,
                    "Invalid rest-day count for {parity} weeks: {count}. Must be 2 or 3"
                )
            }
            Self::DuplicateRestDay { parity, weekday } => {
                write!(f, "{weekday} is listed twice for {parity} weeks")
            }
            Self::UnknownWeekday(name) => write!(f, "Unknown weekday: {name}"),
            Self::UnknownParity(name) => write!(f, "Unknown week parity: {name}"),
            Self::UnknownStatusCode(code) => write!(f, "Unknown status code: {code}"),
            Self::DerivedStatusNotStorable(code) => {
                write!(f, "Status {code} is derived and cannot be stored")
            }
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
