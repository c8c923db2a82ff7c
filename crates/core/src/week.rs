// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly derivation of taxed rest days.
//!
//! Weeks are ISO weeks: Monday through Sunday, with parity taken from the
//! ISO week number.
//!
//! ## Rule
//!
//! In a taxable week (configured rest capacity of at least 3, and matching
//! the taxed parity if one is configured), when at least one `Leave` is
//! present and no `SupplementaryLeave` is present, the earliest `Rest` or
//! `Holiday` day of the week becomes `TaxedRest`. At most one day per week
//! is promoted. A single `SupplementaryLeave` anywhere in the week vetoes
//! the promotion entirely.

use conges_domain::{DayStatus, week_start};
use std::collections::HashMap;
use time::{Date, Duration};

/// Number of days in a week.
pub const DAYS_PER_WEEK: usize = 7;

/// The resolved statuses of one ISO week.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekResolution {
    /// Monday of the week.
    monday: Date,
    /// Final statuses, Monday first.
    statuses: [DayStatus; DAYS_PER_WEEK],
}

impl WeekResolution {
    /// Builds a week from its stored statuses and applies taxation.
    ///
    /// # Arguments
    ///
    /// * `monday` - Monday of the week
    /// * `stored` - Override-or-base status of each day, Monday first
    /// * `taxable` - Whether the rest cycle allows taxation this week
    #[must_use]
    pub fn derive(monday: Date, stored: [DayStatus; DAYS_PER_WEEK], taxable: bool) -> Self {
        let mut statuses: [DayStatus; DAYS_PER_WEEK] = stored;
        if let Some(index) = taxed_rest_index(&stored, taxable) {
            statuses[index] = DayStatus::TaxedRest;
        }
        Self { monday, statuses }
    }

    /// Returns the Monday of the week.
    #[must_use]
    pub const fn monday(&self) -> Date {
        self.monday
    }

    /// Returns the final status of `date`, or `None` if it lies in another week.
    #[must_use]
    pub fn status(&self, date: Date) -> Option<DayStatus> {
        let offset: i64 = (date - self.monday).whole_days();
        let index: usize = usize::try_from(offset).ok()?;
        self.statuses.get(index).copied()
    }

    /// Iterates over the days of the week with their final status.
    pub fn days(&self) -> impl Iterator<Item = (Date, DayStatus)> + '_ {
        self.statuses
            .iter()
            .enumerate()
            .map(|(index, status)| (day_at(self.monday, index), *status))
    }
}

/// Returns the index of the day to promote to `TaxedRest`, if any.
#[must_use]
pub fn taxed_rest_index(stored: &[DayStatus; DAYS_PER_WEEK], taxable: bool) -> Option<usize> {
    if !taxable {
        return None;
    }
    let has_leave: bool = stored.contains(&DayStatus::Leave);
    let vetoed: bool = stored.contains(&DayStatus::SupplementaryLeave);
    if !has_leave || vetoed {
        return None;
    }
    stored.iter().position(DayStatus::is_rest_like)
}

fn day_at(monday: Date, index: usize) -> Date {
    let offset: i64 = i64::try_from(index).unwrap_or(0);
    monday.saturating_add(Duration::days(offset))
}

/// Memoises week resolutions for a single evaluation.
///
/// Entries are never invalidated: a cache lives only as long as the
/// override store it was built against stays unchanged.
#[derive(Debug)]
pub struct WeekCache<F>
where
    F: Fn(Date) -> WeekResolution,
{
    resolve: F,
    weeks: HashMap<Date, WeekResolution>,
}

impl<F> WeekCache<F>
where
    F: Fn(Date) -> WeekResolution,
{
    /// Creates an empty cache resolving weeks with `resolve`.
    ///
    /// `resolve` receives the Monday of the week to resolve.
    pub fn new(resolve: F) -> Self {
        Self {
            resolve,
            weeks: HashMap::new(),
        }
    }

    /// Returns the resolution of the week containing `date`.
    pub fn week(&mut self, date: Date) -> &WeekResolution {
        let monday: Date = week_start(date);
        let resolve: &F = &self.resolve;
        self.weeks.entry(monday).or_insert_with(|| resolve(monday))
    }

    /// Returns the final status of `date`.
    pub fn status(&mut self, date: Date) -> DayStatus {
        self.week(date)
            .status(date)
            .unwrap_or(DayStatus::Work)
    }

    /// Returns how many weeks have been resolved so far.
    #[must_use]
    pub fn resolved_weeks(&self) -> usize {
        self.weeks.len()
    }
}
