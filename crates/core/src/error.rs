// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conges_domain::{DateRange, DomainError};
use thiserror::Error;
use time::Date;

/// A bounded search performed by the engine or the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchKind {
    /// Backward walk for the last worked day before the charged span (DJT).
    LastWorkedBefore,
    /// Forward walk for the first worked day after the charged span (RAT).
    FirstWorkedAfter,
    /// The range an optimizer strategy searches.
    OptimizerHorizon,
}

impl std::fmt::Display for SearchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LastWorkedBefore => write!(f, "last worked day before leave"),
            Self::FirstWorkedAfter => write!(f, "first worked day after leave"),
            Self::OptimizerHorizon => write!(f, "optimizer horizon"),
        }
    }
}

/// Errors raised by evaluation and optimization.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),

    /// The scoring window is too short for the requested placement.
    #[error(
        "Scoring window {window} holds {window_days} days, fewer than the {requested} leave days requested"
    )]
    InvalidRange {
        window: DateRange,
        window_days: u32,
        requested: u32,
    },

    /// The scoring window is not contained in the evaluated range.
    #[error("Scoring window {window} is not inside evaluated range {range}")]
    WindowOutsideRange { range: DateRange, window: DateRange },

    /// A bounded search hit its cap.
    #[error("{search} exceeded the {limit_days}-day search cap starting at {from}")]
    UnboundedSearch {
        search: SearchKind,
        from: Date,
        limit_days: u32,
    },

    /// No start date in the horizon can hold the whole leave quota.
    #[error("No start date in {horizon} can hold {leave_quota} leave days")]
    NoFeasibleStart { horizon: DateRange, leave_quota: u32 },
}
