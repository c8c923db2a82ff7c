// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conges_domain::{ConfigMode, DateRange, OverrideKind, OverrideStore, RestCycleConfig};
use time::macros::date;
use time::{Date, Weekday};

/// Three rest days on even weeks (Saturday, Sunday, Monday), two on odd weeks.
pub fn create_test_config() -> RestCycleConfig {
    RestCycleConfig::new(
        &[Weekday::Saturday, Weekday::Sunday, Weekday::Monday],
        &[Weekday::Saturday, Weekday::Sunday],
        ConfigMode::Strict,
    )
    .unwrap()
}

/// Monday of ISO week 20 of 2026, an even week.
pub const fn create_even_week_monday() -> Date {
    date!(2026 - 05 - 11)
}

/// The whole of ISO week 20 of 2026.
pub fn create_even_week() -> DateRange {
    DateRange::new(date!(2026 - 05 - 11), date!(2026 - 05 - 17)).unwrap()
}

/// The whole of ISO week 19 of 2026, an odd week.
pub fn create_odd_week() -> DateRange {
    DateRange::new(date!(2026 - 05 - 04), date!(2026 - 05 - 10)).unwrap()
}

/// A store holding the given entries.
pub fn create_test_store(entries: &[(Date, OverrideKind)]) -> OverrideStore {
    entries.iter().copied().collect()
}

/// A store marking every day of `range` with `kind`.
pub fn create_store_covering(range: DateRange, kind: OverrideKind) -> OverrideStore {
    range.days().map(|date| (date, kind)).collect()
}
