// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, WeekParity};
use time::Weekday;
use time::macros::date;

#[test]
fn test_domain_error_display() {
    let err: DomainError = DomainError::InvalidDateRange {
        start: date!(2026 - 05 - 10),
        end: date!(2026 - 05 - 01),
    };
    assert_eq!(
        format!("{err}"),
        "Invalid date range: 2026-05-01 is before 2026-05-10"
    );

    let err: DomainError = DomainError::InvalidRestDayCount {
        parity: WeekParity::Even,
        count: 4,
    };
    assert_eq!(
        format!("{err}"),
        "Invalid rest-day count for even weeks: 4. Must be 2 or 3"
    );

    let err: DomainError = DomainError::DuplicateRestDay {
        parity: WeekParity::Odd,
        weekday: Weekday::Monday,
    };
    assert_eq!(format!("{err}"), "Monday is listed twice for odd weeks");

    let err: DomainError = DomainError::UnknownWeekday(String::from("funday"));
    assert_eq!(format!("{err}"), "Unknown weekday: funday");

    let err: DomainError = DomainError::UnknownStatusCode(String::from("XX"));
    assert_eq!(format!("{err}"), "Unknown status code: XX");

    let err: DomainError = DomainError::DerivedStatusNotStorable(String::from("TAXED_REST"));
    assert_eq!(
        format!("{err}"),
        "Status TAXED_REST is derived and cannot be stored"
    );
}

#[test]
fn test_domain_error_is_std_error() {
    let err: DomainError = DomainError::UnknownParity(String::from("third"));
    let boxed: Box<dyn std::error::Error> = Box::new(err);
    assert_eq!(boxed.to_string(), "Unknown week parity: third");
}
