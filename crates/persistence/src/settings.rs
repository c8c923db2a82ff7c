// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use conges::{DEFAULT_BOUNDARY_SEARCH_LIMIT, DEFAULT_MAX_HORIZON_DAYS, EngineSettings};
use conges_domain::{
    ConfigMode, FrenchHolidays, HolidaySource, NoHolidays, RestCycleConfig, WeekParity,
    parse_weekday,
};
use serde::{Deserialize, Serialize};
use time::Weekday;

/// Default number of leave days to place.
pub const DEFAULT_LEAVE_QUOTA: u32 = 3;

/// Largest leave quota accepted in the settings.
pub const MAX_LEAVE_QUOTA: u32 = 31;

/// Largest supplementary leave quota accepted in the settings.
pub const MAX_SUPPLEMENTARY_QUOTA: u32 = 4;

/// The holiday calendar applied to base classification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayCalendar {
    /// Metropolitan French public holidays.
    #[default]
    French,
    /// No public holidays.
    None,
}

impl HolidayCalendar {
    /// Returns the holiday source for this calendar.
    #[must_use]
    pub fn source(self) -> &'static dyn HolidaySource {
        match self {
            Self::French => &FrenchHolidays,
            Self::None => &NoHolidays,
        }
    }
}

impl std::str::FromStr for HolidayCalendar {
    type Err = PersistenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "french" | "fr" => Ok(Self::French),
            "none" => Ok(Self::None),
            _ => Err(PersistenceError::InvalidSettings(format!(
                "unknown holiday calendar: {s}"
            ))),
        }
    }
}

/// Settings stored alongside the overrides in the state file.
///
/// Weekday names are kept as written so that French names survive a
/// round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoredSettings {
    /// Rest weekdays on even ISO weeks.
    pub rest_days_on_even_weeks: Vec<String>,
    /// Rest weekdays on odd ISO weeks.
    pub rest_days_on_odd_weeks: Vec<String>,
    /// When set, only weeks of this parity may be taxed.
    pub taxed_parity: Option<WeekParity>,
    /// Reject rest-day sets outside two or three days instead of padding them.
    pub strict: bool,
    /// Number of leave days the optimizer places.
    pub leave_quota: u32,
    /// Number of supplementary leave days the optimizer places.
    pub supplementary_quota: u32,
    /// Cap on the DJT/RAT search, in days.
    pub boundary_search_limit_days: u32,
    /// Cap on the span optimizer horizon, in days.
    pub max_horizon_days: u32,
    /// Holiday calendar used for base classification.
    pub holidays: HolidayCalendar,
}

impl Default for StoredSettings {
    fn default() -> Self {
        Self {
            rest_days_on_even_weeks: vec![String::from("saturday"), String::from("sunday")],
            rest_days_on_odd_weeks: vec![String::from("saturday"), String::from("sunday")],
            taxed_parity: None,
            strict: false,
            leave_quota: DEFAULT_LEAVE_QUOTA,
            supplementary_quota: 0,
            boundary_search_limit_days: DEFAULT_BOUNDARY_SEARCH_LIMIT,
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
            holidays: HolidayCalendar::French,
        }
    }
}

impl StoredSettings {
    /// Returns the configuration mode the settings ask for.
    #[must_use]
    pub const fn config_mode(&self) -> ConfigMode {
        if self.strict {
            ConfigMode::Strict
        } else {
            ConfigMode::Lenient
        }
    }

    /// Builds the rest cycle described by the settings.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidSettings` if a weekday name is not
    /// recognised, or if strict mode rejects the rest-day sets.
    pub fn rest_cycle(&self) -> Result<RestCycleConfig, PersistenceError> {
        let even: Vec<Weekday> = parse_weekdays(&self.rest_days_on_even_weeks)?;
        let odd: Vec<Weekday> = parse_weekdays(&self.rest_days_on_odd_weeks)?;
        let config: RestCycleConfig = RestCycleConfig::new(&even, &odd, self.config_mode())?;
        Ok(config.with_taxed_parity(self.taxed_parity))
    }

    /// Returns the search bounds described by the settings.
    #[must_use]
    pub const fn engine_settings(&self) -> EngineSettings {
        EngineSettings {
            boundary_search_limit: self.boundary_search_limit_days,
            max_horizon_days: self.max_horizon_days,
        }
    }

    /// Checks that quotas and search bounds are within range.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::InvalidSettings` describing the first
    /// offending value.
    pub fn validate(&self) -> Result<(), PersistenceError> {
        if self.leave_quota > MAX_LEAVE_QUOTA {
            return Err(PersistenceError::InvalidSettings(format!(
                "leave_quota {} exceeds {MAX_LEAVE_QUOTA}",
                self.leave_quota
            )));
        }
        if self.supplementary_quota > MAX_SUPPLEMENTARY_QUOTA {
            return Err(PersistenceError::InvalidSettings(format!(
                "supplementary_quota {} exceeds {MAX_SUPPLEMENTARY_QUOTA}",
                self.supplementary_quota
            )));
        }
        if self.boundary_search_limit_days == 0 {
            return Err(PersistenceError::InvalidSettings(String::from(
                "boundary_search_limit_days must be positive",
            )));
        }
        if self.max_horizon_days == 0 {
            return Err(PersistenceError::InvalidSettings(String::from(
                "max_horizon_days must be positive",
            )));
        }
        self.rest_cycle().map(|_| ())
    }
}

fn parse_weekdays(names: &[String]) -> Result<Vec<Weekday>, PersistenceError> {
    names
        .iter()
        .map(|name| parse_weekday(name).map_err(PersistenceError::from))
        .collect()
}
