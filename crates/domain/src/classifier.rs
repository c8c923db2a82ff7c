// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Base classification of a calendar day.
//!
//! The base status of a day depends only on the date, the rest cycle and
//! the holiday calendar:
//! - A public holiday is `Holiday`
//! - Otherwise a configured rest weekday for the week's parity is `Rest`
//! - Everything else is `Work`
//!
//! Classification is never cached here; the rest cycle may change between
//! calls and callers own any memoisation.

use crate::holidays::HolidaySource;
use crate::rest_cycle::RestCycleConfig;
use crate::types::DayStatus;
use time::Date;

/// Classifies `date` as `Work`, `Rest` or `Holiday`.
///
/// # Arguments
///
/// * `date` - The day to classify
/// * `config` - The rest cycle in force
/// * `holidays` - The public holiday calendar
#[must_use]
pub fn classify<H>(date: Date, config: &RestCycleConfig, holidays: &H) -> DayStatus
where
    H: HolidaySource + ?Sized,
{
    if holidays.is_holiday(date) {
        return DayStatus::Holiday;
    }
    if config.is_rest_day(date) {
        DayStatus::Rest
    } else {
        DayStatus::Work
    }
}
