// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::holidays::HolidaySource;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Duration, Weekday};

/// ISO-8601 calendar date layout used for every persisted date key.
const ISO_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The resolved status of a single calendar day.
///
/// Exactly one status applies to a date once an evaluation has resolved it.
/// `TaxedRest` is never stored; it is always derived from the rest of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayStatus {
    /// A worked day.
    #[serde(alias = "TRA")]
    Work,
    /// A cyclic rest day (ZZ), not charged.
    #[serde(alias = "ZZ")]
    Rest,
    /// A public holiday (FC), not charged but rest-equivalent for taxation.
    #[serde(alias = "FC")]
    Holiday,
    /// A requested leave day (CX), charged.
    #[serde(alias = "CX")]
    Leave,
    /// A protective leave day (C4), charged, vetoes taxation for its week.
    #[serde(alias = "C4")]
    SupplementaryLeave,
    /// A rest or holiday day charged because of leave in its week (CZ).
    #[serde(alias = "CZ")]
    TaxedRest,
}

impl DayStatus {
    /// Returns the canonical status code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Work => "WORK",
            Self::Rest => "REST",
            Self::Holiday => "HOLIDAY",
            Self::Leave => "LEAVE",
            Self::SupplementaryLeave => "SUPPLEMENTARY_LEAVE",
            Self::TaxedRest => "TAXED_REST",
        }
    }

    /// Returns the short code used on the paper roster.
    #[must_use]
    pub const fn short_code(&self) -> &'static str {
        match self {
            Self::Work => "TRA",
            Self::Rest => "ZZ",
            Self::Holiday => "FC",
            Self::Leave => "CX",
            Self::SupplementaryLeave => "C4",
            Self::TaxedRest => "CZ",
        }
    }

    /// Returns whether this day consumes leave quota.
    #[must_use]
    pub const fn is_charged(&self) -> bool {
        matches!(self, Self::Leave | Self::SupplementaryLeave | Self::TaxedRest)
    }

    /// Returns whether this day counts as a rest day for taxation.
    ///
    /// Holidays are folded back into rest for quota purposes.
    #[must_use]
    pub const fn is_rest_like(&self) -> bool {
        matches!(self, Self::Rest | Self::Holiday)
    }
}

impl FromStr for DayStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "WORK" | "TRA" => Ok(Self::Work),
            "REST" | "ZZ" => Ok(Self::Rest),
            "HOLIDAY" | "FC" => Ok(Self::Holiday),
            "LEAVE" | "CX" => Ok(Self::Leave),
            "SUPPLEMENTARY_LEAVE" | "C4" => Ok(Self::SupplementaryLeave),
            "TAXED_REST" | "CZ" => Ok(Self::TaxedRest),
            _ => Err(DomainError::UnknownStatusCode(s.to_string())),
        }
    }
}

impl std::fmt::Display for DayStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status that may be stored as an explicit override.
///
/// This is `DayStatus` without the derived `TaxedRest`, so an override can
/// never pin a taxation result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverrideKind {
    /// Manual reclassification as a worked day.
    #[serde(alias = "TRA")]
    Work,
    /// Manual reclassification as a rest day.
    #[serde(alias = "ZZ")]
    Rest,
    /// Manual reclassification as a public holiday.
    #[serde(alias = "FC")]
    Holiday,
    /// A requested leave day.
    #[serde(alias = "CX")]
    Leave,
    /// A protective leave day.
    #[serde(alias = "C4")]
    SupplementaryLeave,
}

impl OverrideKind {
    /// Returns the canonical status code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        self.status().as_str()
    }

    /// Returns the day status this override resolves to.
    #[must_use]
    pub const fn status(&self) -> DayStatus {
        match self {
            Self::Work => DayStatus::Work,
            Self::Rest => DayStatus::Rest,
            Self::Holiday => DayStatus::Holiday,
            Self::Leave => DayStatus::Leave,
            Self::SupplementaryLeave => DayStatus::SupplementaryLeave,
        }
    }

    /// Returns whether this override is a leave placement rather than a
    /// manual reclassification.
    #[must_use]
    pub const fn is_leave(&self) -> bool {
        matches!(self, Self::Leave | Self::SupplementaryLeave)
    }
}

impl From<OverrideKind> for DayStatus {
    fn from(kind: OverrideKind) -> Self {
        kind.status()
    }
}

impl TryFrom<DayStatus> for OverrideKind {
    type Error = DomainError;

    fn try_from(status: DayStatus) -> Result<Self, Self::Error> {
        match status {
            DayStatus::Work => Ok(Self::Work),
            DayStatus::Rest => Ok(Self::Rest),
            DayStatus::Holiday => Ok(Self::Holiday),
            DayStatus::Leave => Ok(Self::Leave),
            DayStatus::SupplementaryLeave => Ok(Self::SupplementaryLeave),
            DayStatus::TaxedRest => Err(DomainError::DerivedStatusNotStorable(
                status.as_str().to_string(),
            )),
        }
    }
}

impl FromStr for OverrideKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(DayStatus::from_str(s)?)
    }
}

impl std::fmt::Display for OverrideKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parity of an ISO week number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekParity {
    /// ISO week number divisible by two.
    Even,
    /// Any other ISO week number.
    Odd,
}

impl WeekParity {
    /// Returns the parity of the ISO week containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        if date.iso_week() % 2 == 0 {
            Self::Even
        } else {
            Self::Odd
        }
    }

    /// Returns the lowercase name of the parity.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Even => "even",
            Self::Odd => "odd",
        }
    }
}

impl FromStr for WeekParity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "even" | "paire" | "paires" => Ok(Self::Even),
            "odd" | "impaire" | "impaires" => Ok(Self::Odd),
            _ => Err(DomainError::UnknownParity(s.to_string())),
        }
    }
}

impl std::fmt::Display for WeekParity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The static attributes of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// The date itself.
    pub date: Date,
    /// The ISO week-numbering year.
    pub iso_year: i32,
    /// The ISO week number (1-53).
    pub iso_week: u8,
    /// Parity of the ISO week number.
    pub parity: WeekParity,
    /// Day of the week.
    pub weekday: Weekday,
    /// Name of the public holiday falling on this date, if any.
    pub holiday: Option<String>,
}

impl CalendarDay {
    /// Describes `date` using `holidays` for the holiday flag.
    #[must_use]
    pub fn new<H>(date: Date, holidays: &H) -> Self
    where
        H: HolidaySource + ?Sized,
    {
        let (iso_year, iso_week, weekday): (i32, u8, Weekday) = date.to_iso_week_date();
        Self {
            date,
            iso_year,
            iso_week,
            parity: WeekParity::of(date),
            weekday,
            holiday: holidays.holiday_name(date).map(ToString::to_string),
        }
    }

    /// Returns whether this day is a public holiday.
    #[must_use]
    pub const fn is_holiday(&self) -> bool {
        self.holiday.is_some()
    }
}

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day (inclusive).
    start: Date,
    /// Last day (inclusive).
    end: Date,
}

impl DateRange {
    /// Creates a new range covering `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateRange` if `end` is before `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a range containing a single day.
    #[must_use]
    pub const fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Creates a range of `days` days starting at `start`.
    ///
    /// # Errors
    ///
    /// Returns an error if `days` is zero or the end date overflows.
    pub fn with_length(start: Date, days: u32) -> Result<Self, DomainError> {
        if days == 0 {
            return Err(DomainError::InvalidDateRange {
                start,
                end: start.previous_day().unwrap_or(start),
            });
        }
        let end: Date = start
            .checked_add(Duration::days(i64::from(days) - 1))
            .ok_or_else(|| DomainError::DateArithmeticOverflow {
                operation: format!("extending {start} by {days} days"),
            })?;
        Ok(Self { start, end })
    }

    /// Returns the first day.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last day.
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days in the range.
    #[must_use]
    pub fn len_days(&self) -> u32 {
        let days: i64 = (self.end - self.start).whole_days() + 1;
        u32::try_from(days).unwrap_or(u32::MAX)
    }

    /// Returns whether `date` lies inside the range.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns whether `other` lies entirely inside this range.
    #[must_use]
    pub fn contains_range(&self, other: &Self) -> bool {
        self.contains(other.start) && self.contains(other.end)
    }

    /// Widens the range to whole ISO weeks (Monday through Sunday).
    #[must_use]
    pub fn covering_weeks(&self) -> Self {
        Self {
            start: week_start(self.start),
            end: week_end(self.end),
        }
    }

    /// Iterates over every day of the range in date order.
    #[must_use]
    pub const fn days(&self) -> Days {
        Days {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<Date>,
    end: Date,
}

impl Iterator for Days {
    type Item = Date;

    fn next(&mut self) -> Option<Self::Item> {
        let current: Date = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        self.next = if current == self.end {
            None
        } else {
            current.next_day()
        };
        Some(current)
    }
}

/// Returns the Monday of the ISO week containing `date`.
#[must_use]
pub fn week_start(date: Date) -> Date {
    let offset: u8 = date.weekday().number_days_from_monday();
    date.saturating_sub(Duration::days(i64::from(offset)))
}

/// Returns the Sunday of the ISO week containing `date`.
#[must_use]
pub fn week_end(date: Date) -> Date {
    let offset: u8 = 6 - date.weekday().number_days_from_monday();
    date.saturating_add(Duration::days(i64::from(offset)))
}

/// Formats a date as `YYYY-MM-DD`.
#[must_use]
pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE).unwrap_or_else(|_| date.to_string())
}

/// Parses a `YYYY-MM-DD` date.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_iso_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value.trim(), ISO_DATE).map_err(|e| DomainError::DateParseError {
        date_string: value.to_string(),
        error: e.to_string(),
    })
}
