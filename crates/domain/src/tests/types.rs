// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    CalendarDay, DateRange, DayStatus, DomainError, FrenchHolidays, NoHolidays, OverrideKind,
    WeekParity, format_iso_date, parse_iso_date, week_end, week_start,
};
use std::str::FromStr;
use time::macros::date;
use time::{Date, Weekday};

#[test]
fn test_status_codes_accept_canonical_and_short_forms() {
    assert_eq!(DayStatus::from_str("WORK").unwrap(), DayStatus::Work);
    assert_eq!(DayStatus::from_str("tra").unwrap(), DayStatus::Work);
    assert_eq!(DayStatus::from_str("ZZ").unwrap(), DayStatus::Rest);
    assert_eq!(DayStatus::from_str("FC").unwrap(), DayStatus::Holiday);
    assert_eq!(DayStatus::from_str("CX").unwrap(), DayStatus::Leave);
    assert_eq!(
        DayStatus::from_str("C4").unwrap(),
        DayStatus::SupplementaryLeave
    );
    assert_eq!(DayStatus::from_str("CZ").unwrap(), DayStatus::TaxedRest);
    assert!(matches!(
        DayStatus::from_str("nope"),
        Err(DomainError::UnknownStatusCode(_))
    ));
}

const ALL_STATUSES: [DayStatus; 6] = [
    DayStatus::Work,
    DayStatus::Rest,
    DayStatus::Holiday,
    DayStatus::Leave,
    DayStatus::SupplementaryLeave,
    DayStatus::TaxedRest,
];

#[test]
fn test_status_short_codes_match_roster() {
    let codes: Vec<&str> = ALL_STATUSES.iter().map(DayStatus::short_code).collect();
    assert_eq!(codes, vec!["TRA", "ZZ", "FC", "CX", "C4", "CZ"]);
}

#[test]
fn test_charged_statuses() {
    let charged: Vec<DayStatus> = ALL_STATUSES
        .iter()
        .copied()
        .filter(DayStatus::is_charged)
        .collect();
    assert_eq!(
        charged,
        vec![
            DayStatus::Leave,
            DayStatus::SupplementaryLeave,
            DayStatus::TaxedRest
        ]
    );
    assert!(DayStatus::Holiday.is_rest_like());
    assert!(DayStatus::Rest.is_rest_like());
    assert!(!DayStatus::TaxedRest.is_rest_like());
}

#[test]
fn test_taxed_rest_cannot_be_an_override() {
    let result: Result<OverrideKind, DomainError> = OverrideKind::from_str("CZ");
    assert!(matches!(
        result,
        Err(DomainError::DerivedStatusNotStorable(_))
    ));
    assert_eq!(
        OverrideKind::from_str("c4").unwrap(),
        OverrideKind::SupplementaryLeave
    );
    assert_eq!(DayStatus::from(OverrideKind::Leave), DayStatus::Leave);
}

#[test]
fn test_override_kind_serde_accepts_short_codes() {
    let kind: OverrideKind = serde_json::from_str("\"CX\"").unwrap();
    assert_eq!(kind, OverrideKind::Leave);
    let json: String = serde_json::to_string(&OverrideKind::SupplementaryLeave).unwrap();
    assert_eq!(json, "\"SUPPLEMENTARY_LEAVE\"");
    assert!(serde_json::from_str::<OverrideKind>("\"CZ\"").is_err());
}

#[test]
fn test_week_parity_follows_iso_week_number() {
    // 2026-05-04 is the Monday of ISO week 19.
    assert_eq!(WeekParity::of(date!(2026 - 05 - 04)), WeekParity::Odd);
    assert_eq!(WeekParity::of(date!(2026 - 05 - 10)), WeekParity::Odd);
    assert_eq!(WeekParity::of(date!(2026 - 05 - 11)), WeekParity::Even);
    // 2026-01-01 belongs to ISO week 1 of 2026.
    assert_eq!(WeekParity::of(date!(2026 - 01 - 01)), WeekParity::Odd);
    assert_eq!(WeekParity::from_str("Paires").unwrap(), WeekParity::Even);
}

#[test]
fn test_calendar_day_attributes() {
    let day: CalendarDay = CalendarDay::new(date!(2026 - 07 - 14), &FrenchHolidays);
    assert_eq!(day.iso_year, 2026);
    assert_eq!(day.iso_week, 29);
    assert_eq!(day.parity, WeekParity::Odd);
    assert_eq!(day.weekday, Weekday::Tuesday);
    assert_eq!(day.holiday.as_deref(), Some("Fête nationale"));
    assert!(day.is_holiday());

    let plain: CalendarDay = CalendarDay::new(date!(2026 - 07 - 14), &NoHolidays);
    assert!(!plain.is_holiday());
}

#[test]
fn test_calendar_day_iso_year_differs_at_year_boundary() {
    let day: CalendarDay = CalendarDay::new(date!(2025 - 12 - 29), &NoHolidays);
    assert_eq!(day.iso_year, 2026);
    assert_eq!(day.iso_week, 1);
}

#[test]
fn test_date_range_rejects_reversed_bounds() {
    let result: Result<DateRange, DomainError> =
        DateRange::new(date!(2026 - 05 - 10), date!(2026 - 05 - 01));
    assert!(matches!(result, Err(DomainError::InvalidDateRange { .. })));
}

#[test]
fn test_date_range_iteration_and_length() {
    let range: DateRange = DateRange::new(date!(2026 - 02 - 27), date!(2026 - 03 - 02)).unwrap();
    let days: Vec<Date> = range.days().collect();
    assert_eq!(
        days,
        vec![
            date!(2026 - 02 - 27),
            date!(2026 - 02 - 28),
            date!(2026 - 03 - 01),
            date!(2026 - 03 - 02),
        ]
    );
    assert_eq!(range.len_days(), 4);
    assert!(range.contains(date!(2026 - 03 - 01)));
    assert!(!range.contains(date!(2026 - 03 - 03)));
}

#[test]
fn test_single_day_range() {
    let range: DateRange = DateRange::single(date!(2026 - 05 - 01));
    assert_eq!(range.len_days(), 1);
    assert_eq!(range.days().count(), 1);
}

#[test]
fn test_date_range_with_length() {
    let range: DateRange = DateRange::with_length(date!(2026 - 05 - 01), 60).unwrap();
    assert_eq!(range.end(), date!(2026 - 06 - 29));
    assert_eq!(range.len_days(), 60);
    assert!(DateRange::with_length(date!(2026 - 05 - 01), 0).is_err());
}

#[test]
fn test_covering_weeks_aligns_to_monday_and_sunday() {
    let range: DateRange = DateRange::new(date!(2026 - 05 - 06), date!(2026 - 05 - 13)).unwrap();
    let weeks: DateRange = range.covering_weeks();
    assert_eq!(weeks.start(), date!(2026 - 05 - 04));
    assert_eq!(weeks.end(), date!(2026 - 05 - 17));
    assert!(weeks.contains_range(&range));
    assert_eq!(week_start(date!(2026 - 05 - 04)), date!(2026 - 05 - 04));
    assert_eq!(week_end(date!(2026 - 05 - 10)), date!(2026 - 05 - 10));
}

#[test]
fn test_iso_date_format_and_parse() {
    assert_eq!(format_iso_date(date!(2026 - 05 - 04)), "2026-05-04");
    assert_eq!(parse_iso_date("2026-05-04").unwrap(), date!(2026 - 05 - 04));
    assert!(matches!(
        parse_iso_date("04/05/2026"),
        Err(DomainError::DateParseError { .. })
    ));
}
