// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar domain types for rotating rest-day and leave accounting.
//!
//! This crate holds the value types shared by the rule engine and its
//! callers: day statuses, date ranges, the rest cycle, holiday sources,
//! base classification and the override store.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod classifier;
mod error;
mod holidays;
mod overrides;
mod rest_cycle;
mod types;

#[cfg(test)]
mod tests;

pub use classifier::classify;
pub use error::DomainError;
pub use holidays::{
    FixedHoliday, FixedHolidays, FrenchHolidays, HolidaySource, NoHolidays, easter_sunday,
};
pub use overrides::OverrideStore;
pub use rest_cycle::{
    ConfigMode, MAX_REST_DAYS, MIN_REST_DAYS, RestCycleConfig, TAXABLE_CAPACITY, parse_weekday,
};
pub use types::{
    CalendarDay, DateRange, DayStatus, Days, OverrideKind, WeekParity, format_iso_date,
    parse_iso_date, week_end, week_start,
};
