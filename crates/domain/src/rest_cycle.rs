// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rotating rest-day cycle configuration.
//!
//! An employee rests on a fixed set of weekdays that alternates between even
//! and odd ISO weeks. Each set holds 2 or 3 weekdays. Weeks whose set holds 3
//! weekdays are the only weeks in which leave can tax a rest day.
//!
//! ## Clamping
//!
//! In `ConfigMode::Lenient` (the default) an undersized set is padded with
//! Saturday then Sunday until it holds 2 days, and an oversized set keeps its
//! first 3 days. `ConfigMode::Strict` rejects both cases instead.

use crate::error::DomainError;
use crate::types::WeekParity;
use serde::{Deserialize, Serialize};
use time::{Date, Weekday};

/// Minimum number of rest days in a week.
pub const MIN_REST_DAYS: usize = 2;

/// Maximum number of rest days in a week.
pub const MAX_REST_DAYS: usize = 3;

/// Number of configured rest days from which a week becomes taxable.
pub const TAXABLE_CAPACITY: usize = 3;

/// Days used to pad an undersized rest-day set, in order.
const PADDING_DAYS: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

/// How out-of-range rest-day sets are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConfigMode {
    /// Pad or truncate to 2..=3 days.
    #[default]
    Lenient,
    /// Reject sets outside 2..=3 days.
    Strict,
}

/// The rest-day cycle of one employee.
///
/// Deserialization goes through the lenient clamp, so a decoded cycle holds
/// 2 or 3 distinct weekdays per parity like one built with [`Self::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RestCycleDocument")]
pub struct RestCycleConfig {
    /// Rest weekdays on even ISO weeks, in the order supplied.
    rest_days_on_even_weeks: Vec<Weekday>,
    /// Rest weekdays on odd ISO weeks, in the order supplied.
    rest_days_on_odd_weeks: Vec<Weekday>,
    /// When set, only weeks of this parity may be taxed.
    taxed_parity: Option<WeekParity>,
}

impl RestCycleConfig {
    /// Creates a new rest cycle.
    ///
    /// # Arguments
    ///
    /// * `even` - Rest weekdays on even ISO weeks
    /// * `odd` - Rest weekdays on odd ISO weeks
    /// * `mode` - How sets outside 2..=3 days are handled
    ///
    /// # Errors
    ///
    /// In strict mode, returns an error if either set repeats a weekday or
    /// does not hold 2 or 3 weekdays. Lenient mode never fails.
    pub fn new(even: &[Weekday], odd: &[Weekday], mode: ConfigMode) -> Result<Self, DomainError> {
        Ok(Self {
            rest_days_on_even_weeks: normalize_rest_days(even, WeekParity::Even, mode)?,
            rest_days_on_odd_weeks: normalize_rest_days(odd, WeekParity::Odd, mode)?,
            taxed_parity: None,
        })
    }

    /// Restricts taxation to weeks of a single parity.
    #[must_use]
    pub const fn with_taxed_parity(mut self, parity: Option<WeekParity>) -> Self {
        self.taxed_parity = parity;
        self
    }

    /// Returns the rest weekdays for a week parity.
    #[must_use]
    pub fn rest_days(&self, parity: WeekParity) -> &[Weekday] {
        match parity {
            WeekParity::Even => &self.rest_days_on_even_weeks,
            WeekParity::Odd => &self.rest_days_on_odd_weeks,
        }
    }

    /// Returns the parity restriction on taxation, if any.
    #[must_use]
    pub const fn taxed_parity(&self) -> Option<WeekParity> {
        self.taxed_parity
    }

    /// Returns whether `date` falls on a configured rest weekday.
    #[must_use]
    pub fn is_rest_day(&self, date: Date) -> bool {
        self.rest_days(WeekParity::of(date))
            .contains(&date.weekday())
    }

    /// Returns the configured rest capacity of the week containing `date`.
    ///
    /// This depends only on configuration, never on the statuses actually
    /// present in the week.
    #[must_use]
    pub fn week_rest_capacity(&self, date: Date) -> usize {
        self.rest_days(WeekParity::of(date)).len()
    }

    /// Returns whether leave in the week containing `date` can tax a rest day.
    #[must_use]
    pub fn is_taxable_week(&self, date: Date) -> bool {
        let parity: WeekParity = WeekParity::of(date);
        let parity_allowed: bool = self.taxed_parity.is_none_or(|p| p == parity);
        parity_allowed && self.rest_days(parity).len() >= TAXABLE_CAPACITY
    }
}

impl Default for RestCycleConfig {
    /// Saturday and Sunday off every week.
    fn default() -> Self {
        Self {
            rest_days_on_even_weeks: PADDING_DAYS.to_vec(),
            rest_days_on_odd_weeks: PADDING_DAYS.to_vec(),
            taxed_parity: None,
        }
    }
}

/// Wire form of a [`RestCycleConfig`] before normalization.
#[derive(Deserialize)]
struct RestCycleDocument {
    rest_days_on_even_weeks: Vec<Weekday>,
    rest_days_on_odd_weeks: Vec<Weekday>,
    taxed_parity: Option<WeekParity>,
}

impl TryFrom<RestCycleDocument> for RestCycleConfig {
    type Error = DomainError;

    fn try_from(document: RestCycleDocument) -> Result<Self, Self::Error> {
        let config: Self = Self::new(
            &document.rest_days_on_even_weeks,
            &document.rest_days_on_odd_weeks,
            ConfigMode::Lenient,
        )?;
        Ok(config.with_taxed_parity(document.taxed_parity))
    }
}

fn normalize_rest_days(
    days: &[Weekday],
    parity: WeekParity,
    mode: ConfigMode,
) -> Result<Vec<Weekday>, DomainError> {
    let mut distinct: Vec<Weekday> = Vec::with_capacity(MAX_REST_DAYS);
    for day in days {
        if distinct.contains(day) {
            if mode == ConfigMode::Strict {
                return Err(DomainError::DuplicateRestDay {
                    parity,
                    weekday: *day,
                });
            }
            continue;
        }
        distinct.push(*day);
    }

    if mode == ConfigMode::Strict
        && !(MIN_REST_DAYS..=MAX_REST_DAYS).contains(&distinct.len())
    {
        return Err(DomainError::InvalidRestDayCount {
            parity,
            count: distinct.len(),
        });
    }

    for pad in PADDING_DAYS {
        if distinct.len() >= MIN_REST_DAYS {
            break;
        }
        if !distinct.contains(&pad) {
            distinct.push(pad);
        }
    }
    distinct.truncate(MAX_REST_DAYS);

    Ok(distinct)
}

/// Parses an English or French weekday name, ignoring case.
///
/// # Errors
///
/// Returns `DomainError::UnknownWeekday` if the name is not recognised.
pub fn parse_weekday(name: &str) -> Result<Weekday, DomainError> {
    match name.trim().to_lowercase().as_str() {
        "monday" | "mon" | "lundi" => Ok(Weekday::Monday),
        "tuesday" | "tue" | "mardi" => Ok(Weekday::Tuesday),
        "wednesday" | "wed" | "mercredi" => Ok(Weekday::Wednesday),
        "thursday" | "thu" | "jeudi" => Ok(Weekday::Thursday),
        "friday" | "fri" | "vendredi" => Ok(Weekday::Friday),
        "saturday" | "sat" | "samedi" => Ok(Weekday::Saturday),
        "sunday" | "sun" | "dimanche" => Ok(Weekday::Sunday),
        _ => Err(DomainError::UnknownWeekday(name.to_string())),
    }
}
