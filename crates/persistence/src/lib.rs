// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Conges leave planner.
//!
//! Calendar state lives in a single JSON file holding the override store and
//! the stored settings:
//!
//! ```json
//! {
//!   "overrides": { "2026-05-12": "LEAVE" },
//!   "settings": { "rest_days_on_even_weeks": ["samedi", "dimanche", "lundi"], "...": "..." }
//! }
//! ```
//!
//! The rule engine never performs I/O. Callers load the state, mutate the
//! overrides, and save after each mutation.

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

mod error;
mod legacy;
mod settings;
mod store;

#[cfg(test)]
mod tests;

pub use error::PersistenceError;
pub use legacy::{LegacyImport, import_legacy_state};
pub use settings::{
    DEFAULT_LEAVE_QUOTA, HolidayCalendar, MAX_LEAVE_QUOTA, MAX_SUPPLEMENTARY_QUOTA, StoredSettings,
};
pub use store::{CalendarState, DEFAULT_STATE_FILE, JsonStateStore};
