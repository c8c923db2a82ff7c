// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::holidays::easter_offset;
use crate::{FixedHolidays, FrenchHolidays, HolidaySource, NoHolidays, easter_sunday};
use time::Month;
use time::macros::date;

#[test]
fn test_easter_sunday_known_years() {
    assert_eq!(easter_sunday(2024), Some(date!(2024 - 03 - 31)));
    assert_eq!(easter_sunday(2025), Some(date!(2025 - 04 - 20)));
    assert_eq!(easter_sunday(2026), Some(date!(2026 - 04 - 05)));
    assert_eq!(easter_sunday(2027), Some(date!(2027 - 03 - 28)));
}

#[test]
fn test_easter_offset() {
    assert_eq!(easter_offset(2026, 1), Some(date!(2026 - 04 - 06)));
    assert_eq!(easter_offset(2026, -2), Some(date!(2026 - 04 - 03)));
}

#[test]
fn test_french_fixed_holidays() {
    let cal: FrenchHolidays = FrenchHolidays;
    assert_eq!(cal.holiday_name(date!(2026 - 01 - 01)), Some("Jour de l'an"));
    assert_eq!(cal.holiday_name(date!(2026 - 05 - 01)), Some("Fête du Travail"));
    assert_eq!(cal.holiday_name(date!(2026 - 05 - 08)), Some("Victoire 1945"));
    assert_eq!(cal.holiday_name(date!(2026 - 07 - 14)), Some("Fête nationale"));
    assert_eq!(cal.holiday_name(date!(2026 - 08 - 15)), Some("Assomption"));
    assert_eq!(cal.holiday_name(date!(2026 - 11 - 01)), Some("Toussaint"));
    assert_eq!(cal.holiday_name(date!(2026 - 11 - 11)), Some("Armistice 1918"));
    assert_eq!(cal.holiday_name(date!(2026 - 12 - 25)), Some("Noël"));
}

#[test]
fn test_french_moveable_holidays_2026() {
    let cal: FrenchHolidays = FrenchHolidays;
    assert_eq!(cal.holiday_name(date!(2026 - 04 - 06)), Some("Lundi de Pâques"));
    assert_eq!(cal.holiday_name(date!(2026 - 05 - 14)), Some("Ascension"));
    assert_eq!(
        cal.holiday_name(date!(2026 - 05 - 25)),
        Some("Lundi de Pentecôte")
    );
    // Easter Sunday itself is not a separate public holiday.
    assert!(!cal.is_holiday(date!(2026 - 04 - 05)));
}

#[test]
fn test_french_ordinary_day() {
    let cal: FrenchHolidays = FrenchHolidays;
    assert!(!cal.is_holiday(date!(2026 - 06 - 15)));
    assert!(!cal.is_holiday(date!(2026 - 12 - 26)));
}

#[test]
fn test_fixed_holidays_recur_yearly() {
    let cal: FixedHolidays = FixedHolidays::new()
        .with(Month::May, 14, "Asc.")
        .with(Month::May, 25, "Pent.");
    assert_eq!(cal.holidays().len(), 2);
    assert_eq!(cal.holiday_name(date!(2026 - 05 - 14)), Some("Asc."));
    assert_eq!(cal.holiday_name(date!(2031 - 05 - 25)), Some("Pent."));
    assert!(!cal.is_holiday(date!(2026 - 05 - 15)));
}

#[test]
fn test_no_holidays() {
    assert!(!NoHolidays.is_holiday(date!(2026 - 12 - 25)));
}
