// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rule engine and leave placement for rotating rest-cycle calendars.
//!
//! [`RuleEngine`] turns a rest cycle, a holiday calendar and an
//! [`OverrideStore`](conges_domain::OverrideStore) into final day statuses,
//! deriving taxed rest days week by week and reporting the charged count and
//! the off-duty span between the last worked day before leave (DJT) and the
//! first worked day after it (RAT).
//!
//! [`Optimizer`] uses the engine as its only oracle to place leave days.

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

mod engine;
mod error;
mod optimizer;
mod settings;
mod week;

#[cfg(test)]
mod tests;

pub use engine::{Boundary, EvaluationResult, RuleEngine, StatusCounts};
pub use error::{CoreError, SearchKind};
pub use optimizer::{GreedyOutcome, Optimizer, PlanOutcome, SpanOutcome};
pub use settings::{DEFAULT_BOUNDARY_SEARCH_LIMIT, DEFAULT_MAX_HORIZON_DAYS, EngineSettings};
pub use week::{DAYS_PER_WEEK, WeekResolution};
