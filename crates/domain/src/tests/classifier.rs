// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ConfigMode, DayStatus, FrenchHolidays, HolidaySource, NoHolidays, RestCycleConfig, classify,
};
use time::Weekday;
use time::macros::date;

fn create_test_config() -> RestCycleConfig {
    RestCycleConfig::new(
        &[Weekday::Saturday, Weekday::Sunday, Weekday::Monday],
        &[Weekday::Saturday, Weekday::Sunday],
        ConfigMode::Strict,
    )
    .unwrap()
}

#[test]
fn test_classify_work_day() {
    let config: RestCycleConfig = create_test_config();
    assert_eq!(
        classify(date!(2026 - 05 - 06), &config, &NoHolidays),
        DayStatus::Work
    );
}

#[test]
fn test_classify_rest_day_depends_on_parity() {
    let config: RestCycleConfig = create_test_config();
    // Monday of odd week 19 is worked, Monday of even week 20 is rest.
    assert_eq!(
        classify(date!(2026 - 05 - 04), &config, &NoHolidays),
        DayStatus::Work
    );
    assert_eq!(
        classify(date!(2026 - 05 - 11), &config, &NoHolidays),
        DayStatus::Rest
    );
    assert_eq!(
        classify(date!(2026 - 05 - 09), &config, &NoHolidays),
        DayStatus::Rest
    );
}

#[test]
fn test_holiday_takes_precedence_over_rest() {
    let config: RestCycleConfig = create_test_config();
    // 2026-05-25 is Whit Monday, in even week 22 where Monday is a rest day.
    assert_eq!(
        classify(date!(2026 - 05 - 25), &config, &FrenchHolidays),
        DayStatus::Holiday
    );
    assert_eq!(
        classify(date!(2026 - 05 - 25), &config, &NoHolidays),
        DayStatus::Rest
    );
}

#[test]
fn test_holiday_on_work_day() {
    let config: RestCycleConfig = create_test_config();
    // 2026-05-14 is Ascension Thursday.
    assert_eq!(
        classify(date!(2026 - 05 - 14), &config, &FrenchHolidays),
        DayStatus::Holiday
    );
}

#[test]
fn test_classify_accepts_trait_objects() {
    let config: RestCycleConfig = create_test_config();
    let holidays: &dyn HolidaySource = &FrenchHolidays;
    assert_eq!(
        classify(date!(2026 - 12 - 25), &config, holidays),
        DayStatus::Holiday
    );
}
