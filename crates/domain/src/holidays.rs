// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Public holiday sources.
//!
//! The rule engine treats the holiday calendar as an opaque oracle mapping a
//! date to an optional holiday name. Three sources are provided:
//! - `FrenchHolidays`: the eleven metropolitan French public holidays
//! - `FixedHolidays`: a user-supplied list of yearly recurring dates
//! - `NoHolidays`: never reports a holiday

use serde::{Deserialize, Serialize};
use time::{Date, Duration, Month};

/// A source of public holidays.
pub trait HolidaySource: std::fmt::Debug {
    /// Returns the name of the holiday on `date`, if any.
    fn holiday_name(&self, date: Date) -> Option<&str>;

    /// Returns whether `date` is a public holiday.
    fn is_holiday(&self, date: Date) -> bool {
        self.holiday_name(date).is_some()
    }
}

/// A holiday calendar with no holidays at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHolidays;

impl HolidaySource for NoHolidays {
    fn holiday_name(&self, _date: Date) -> Option<&str> {
        None
    }
}

/// Metropolitan French public holidays.
///
/// Observed holidays:
/// - Jour de l'an (Jan 1)
/// - Lundi de Pâques (Easter + 1)
/// - Fête du Travail (May 1)
/// - Victoire 1945 (May 8)
/// - Ascension (Easter + 39)
/// - Lundi de Pentecôte (Easter + 50)
/// - Fête nationale (Jul 14)
/// - Assomption (Aug 15)
/// - Toussaint (Nov 1)
/// - Armistice 1918 (Nov 11)
/// - Noël (Dec 25)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrenchHolidays;

/// Holidays that follow Easter Sunday, as day offsets from it.
const MOVABLE_FEASTS: [(i64, &str); 3] = [
    (1, "Lundi de Pâques"),
    (39, "Ascension"),
    (50, "Lundi de Pentecôte"),
];

impl HolidaySource for FrenchHolidays {
    fn holiday_name(&self, date: Date) -> Option<&str> {
        let fixed: Option<&'static str> = match (date.month(), date.day()) {
            (Month::January, 1) => Some("Jour de l'an"),
            (Month::May, 1) => Some("Fête du Travail"),
            (Month::May, 8) => Some("Victoire 1945"),
            (Month::July, 14) => Some("Fête nationale"),
            (Month::August, 15) => Some("Assomption"),
            (Month::November, 1) => Some("Toussaint"),
            (Month::November, 11) => Some("Armistice 1918"),
            (Month::December, 25) => Some("Noël"),
            _ => None,
        };
        if fixed.is_some() {
            return fixed;
        }

        MOVABLE_FEASTS
            .iter()
            .find(|(offset, _)| easter_offset(date.year(), *offset) == Some(date))
            .map(|(_, name)| *name)
    }
}

/// A holiday that recurs on the same month and day every year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHoliday {
    /// Month of the holiday.
    pub month: Month,
    /// Day of the month.
    pub day: u8,
    /// Display name.
    pub name: String,
}

/// A holiday calendar built from a fixed list of yearly dates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedHolidays {
    holidays: Vec<FixedHoliday>,
}

impl FixedHolidays {
    /// Creates an empty calendar.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            holidays: Vec::new(),
        }
    }

    /// Adds a yearly holiday.
    #[must_use]
    pub fn with(mut self, month: Month, day: u8, name: &str) -> Self {
        self.holidays.push(FixedHoliday {
            month,
            day,
            name: name.to_string(),
        });
        self
    }

    /// Returns the configured holidays.
    #[must_use]
    pub fn holidays(&self) -> &[FixedHoliday] {
        &self.holidays
    }
}

impl HolidaySource for FixedHolidays {
    fn holiday_name(&self, date: Date) -> Option<&str> {
        self.holidays
            .iter()
            .find(|h| h.month == date.month() && h.day == date.day())
            .map(|h| h.name.as_str())
    }
}

/// Computes Easter Sunday for a Gregorian year.
///
/// Uses the anonymous Gregorian computus. Returns `None` only for years the
/// `time` crate cannot represent.
#[must_use]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a: i32 = year.rem_euclid(19);
    let b: i32 = year.div_euclid(100);
    let c: i32 = year.rem_euclid(100);
    let d: i32 = b / 4;
    let e: i32 = b % 4;
    let f: i32 = (b + 8) / 25;
    let g: i32 = (b - f + 1) / 3;
    let h: i32 = (19 * a + b - d - g + 15).rem_euclid(30);
    let i: i32 = c / 4;
    let k: i32 = c % 4;
    let l: i32 = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m: i32 = (a + 11 * h + 22 * l) / 451;
    let month: u8 = u8::try_from((h + l - 7 * m + 114) / 31).ok()?;
    let day: u8 = u8::try_from((h + l - 7 * m + 114) % 31 + 1).ok()?;

    let month: Month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}

/// Returns the date `days` after Easter Sunday of `year`.
#[must_use]
pub fn easter_offset(year: i32, days: i64) -> Option<Date> {
    easter_sunday(year)?.checked_add(Duration::days(days))
}
