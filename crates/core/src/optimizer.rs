// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Leave placement strategies.
//!
//! Every strategy works on its own copy of the caller's store, mutating it
//! with trial placements and scoring each trial through
//! [`RuleEngine::evaluate_window`]. Trials that are not kept are reverted
//! with [`OverrideStore::restore`]. The caller's store is never touched.

use crate::engine::{EvaluationResult, RuleEngine};
use crate::error::{CoreError, SearchKind};
use conges_domain::{DateRange, DayStatus, HolidaySource, OverrideKind, OverrideStore};
use time::Date;
use tracing::{debug, info, warn};

/// Result of the greedy strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyOutcome {
    /// The store with every placement applied.
    pub store: OverrideStore,
    /// Days placed as `Leave`, in placement order.
    pub placed_leave: Vec<Date>,
    /// Days placed as `SupplementaryLeave`, in date order.
    pub placed_supplementary: Vec<Date>,
    /// Evaluation of the final store over the window.
    pub evaluation: EvaluationResult,
}

/// Result of the sliding-window strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanOutcome {
    /// The winning start date.
    pub start: Date,
    /// Off-duty span obtained from `start`.
    pub span: u32,
    /// Days placed as `Leave`, in date order.
    pub placed: Vec<Date>,
    /// The store with the winning placement applied.
    pub store: OverrideStore,
    /// Evaluation of the winning placement.
    pub evaluation: EvaluationResult,
    /// Number of start dates that produced a scored placement.
    pub candidates_tested: u32,
}

/// Result of the date-to-date planner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanOutcome {
    /// The store with every placement applied.
    pub store: OverrideStore,
    /// Days placed as `Leave`, in date order.
    pub placed: Vec<Date>,
    /// Evaluation of the final store over the range.
    pub evaluation: EvaluationResult,
    /// Quota left after the placement.
    pub quota_remaining: u32,
}

/// Searches for leave placements using a [`RuleEngine`] as its oracle.
#[derive(Debug, Clone, Copy)]
pub struct Optimizer<'e, 'a, H>
where
    H: HolidaySource + ?Sized,
{
    engine: &'e RuleEngine<'a, H>,
}

impl<'e, 'a, H> Optimizer<'e, 'a, H>
where
    H: HolidaySource + ?Sized,
{
    /// Creates an optimizer scoring with `engine`.
    #[must_use]
    pub const fn new(engine: &'e RuleEngine<'a, H>) -> Self {
        Self { engine }
    }

    /// Greedy marginal-gain placement over `window`.
    ///
    /// The supplementary quota is spent first on the earliest open `Work`
    /// days. Each `Leave` then goes to the open `Work` day whose trial
    /// placement raises `charged_count` the most, the earliest day winning
    /// ties. Placement stops when the quota is spent or no open day remains.
    ///
    /// # Arguments
    ///
    /// * `store` - The overrides to start from
    /// * `window` - The days eligible for placement and scoring
    /// * `leave_quota` - Number of `Leave` days to place
    /// * `supplementary_quota` - Number of `SupplementaryLeave` days to place
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnboundedSearch` if the window exceeds the
    /// configured cap, or `CoreError::InvalidRange` if it holds fewer days
    /// than both quotas together.
    pub fn optimize_greedy(
        &self,
        store: &OverrideStore,
        window: DateRange,
        leave_quota: u32,
        supplementary_quota: u32,
    ) -> Result<GreedyOutcome, CoreError> {
        self.check_search_range(window)?;
        let requested: u32 = leave_quota.saturating_add(supplementary_quota);
        let window_days: u32 = window.len_days();
        if requested > window_days {
            return Err(CoreError::InvalidRange {
                window,
                window_days,
                requested,
            });
        }

        let range: DateRange = window.covering_weeks();
        let mut trial: OverrideStore = store.clone();

        let placed_supplementary: Vec<Date> = self
            .open_work_days(window, &trial)
            .into_iter()
            .take(usize::try_from(supplementary_quota).unwrap_or(usize::MAX))
            .collect();
        for date in &placed_supplementary {
            trial.set(*date, OverrideKind::SupplementaryLeave);
        }

        let mut placed_leave: Vec<Date> = Vec::new();
        for _ in 0..leave_quota {
            let mut best: Option<(Date, u32)> = None;
            for candidate in self.open_work_days(window, &trial) {
                let previous: Option<OverrideKind> = trial.set(candidate, OverrideKind::Leave);
                let charged: u32 = self
                    .engine
                    .evaluate_window(range, window, &trial)?
                    .charged_count;
                trial.restore(candidate, previous);

                if best.is_none_or(|(_, best_charged)| charged > best_charged) {
                    best = Some((candidate, charged));
                }
            }

            let Some((date, charged)) = best else {
                warn!(
                    window = %window,
                    placed = placed_leave.len(),
                    leave_quota,
                    "No open work day left for leave placement"
                );
                break;
            };
            debug!(date = %date, charged, "Placed leave");
            trial.set(date, OverrideKind::Leave);
            placed_leave.push(date);
        }

        let evaluation: EvaluationResult = self.engine.evaluate_window(range, window, &trial)?;
        info!(
            window = %window,
            leave = placed_leave.len(),
            supplementary = placed_supplementary.len(),
            charged = evaluation.charged_count,
            "Greedy placement complete"
        );

        Ok(GreedyOutcome {
            store: trial,
            placed_leave,
            placed_supplementary,
            evaluation,
        })
    }

    /// Sliding-window span maximizer over `horizon`.
    ///
    /// For each start date, consumes the leave quota on consecutive `Work`
    /// days (rest days and holidays are crossed without spending quota) and
    /// scores the block by its off-duty span. Starts that cannot hold the
    /// whole quota before the horizon ends are skipped. The first start with
    /// the longest span wins.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnboundedSearch` if the horizon exceeds the
    /// configured cap, or `CoreError::NoFeasibleStart` if no start date can
    /// hold the quota.
    pub fn optimize_span(
        &self,
        store: &OverrideStore,
        horizon: DateRange,
        leave_quota: u32,
    ) -> Result<SpanOutcome, CoreError> {
        self.check_search_range(horizon)?;
        let range: DateRange = horizon.covering_weeks();

        if leave_quota == 0 {
            let evaluation: EvaluationResult =
                self.engine.evaluate_window(range, horizon, store)?;
            return Ok(SpanOutcome {
                start: horizon.start(),
                span: evaluation.consecutive_off_span.unwrap_or(0),
                placed: Vec::new(),
                store: store.clone(),
                evaluation,
                candidates_tested: 0,
            });
        }

        let mut trial: OverrideStore = store.clone();
        let mut best: Option<(u32, Vec<Date>, EvaluationResult)> = None;
        let mut candidates_tested: u32 = 0;

        for start in horizon.days() {
            let block: Vec<Date> = self.consecutive_block(start, horizon, &trial, leave_quota);
            let (Some(first), Some(last)) = (block.first(), block.last()) else {
                continue;
            };
            if u32::try_from(block.len()).unwrap_or(u32::MAX) < leave_quota {
                debug!(start = %start, "Start cannot hold the whole quota");
                continue;
            }
            let window: DateRange = DateRange::new(*first, *last)?;

            let previous: Vec<(Date, Option<OverrideKind>)> = block
                .iter()
                .map(|date| (*date, trial.set(*date, OverrideKind::Leave)))
                .collect();
            let evaluation: EvaluationResult =
                self.engine.evaluate_window(range, window, &trial)?;
            for (date, kind) in previous {
                trial.restore(date, kind);
            }

            let Some(span) = evaluation.consecutive_off_span else {
                warn!(start = %start, "Skipping start whose boundary search hit the cap");
                continue;
            };
            candidates_tested += 1;

            if best
                .as_ref()
                .is_none_or(|(best_span, _, _)| span > *best_span)
            {
                best = Some((span, block, evaluation));
            }
        }

        let Some((span, placed, evaluation)) = best else {
            return Err(CoreError::NoFeasibleStart {
                horizon,
                leave_quota,
            });
        };

        for date in &placed {
            trial.set(*date, OverrideKind::Leave);
        }
        let start: Date = placed.first().copied().unwrap_or_else(|| horizon.start());
        info!(
            start = %start,
            span,
            candidates_tested,
            "Span search complete"
        );

        Ok(SpanOutcome {
            start,
            span,
            placed,
            store: trial,
            evaluation,
            candidates_tested,
        })
    }

    /// Marks `Work` days of `range` as `Leave` in date order while the
    /// charged count stays within `quota`.
    ///
    /// Taxed rest days count against the quota. A day whose placement would
    /// go over the quota is skipped and the walk goes on, so a later day in a
    /// week that cannot be taxed may still take the remaining quota.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnboundedSearch` if `range` exceeds the configured
    /// cap.
    pub fn plan_range(
        &self,
        store: &OverrideStore,
        range: DateRange,
        quota: u32,
    ) -> Result<PlanOutcome, CoreError> {
        self.check_search_range(range)?;
        let evaluated: DateRange = range.covering_weeks();
        let mut trial: OverrideStore = store.clone();
        let mut placed: Vec<Date> = Vec::new();

        for date in range.days() {
            if self.engine.stored_status(date, &trial) != DayStatus::Work {
                continue;
            }
            let previous: Option<OverrideKind> = trial.set(date, OverrideKind::Leave);
            let charged: u32 = self
                .engine
                .evaluate_window(evaluated, range, &trial)?
                .charged_count;
            if charged > quota {
                trial.restore(date, previous);
                debug!(date = %date, charged, quota, "Placement would exceed quota");
                continue;
            }
            placed.push(date);
        }

        let evaluation: EvaluationResult = self.engine.evaluate_window(evaluated, range, &trial)?;
        let quota_remaining: u32 = quota.saturating_sub(evaluation.charged_count);
        info!(
            range = %range,
            placed = placed.len(),
            charged = evaluation.charged_count,
            quota_remaining,
            "Planned leave"
        );

        Ok(PlanOutcome {
            store: trial,
            placed,
            evaluation,
            quota_remaining,
        })
    }

    /// Rejects search ranges longer than the configured cap.
    fn check_search_range(&self, range: DateRange) -> Result<(), CoreError> {
        let max_horizon_days: u32 = self.engine.settings().max_horizon_days;
        if range.len_days() > max_horizon_days {
            return Err(CoreError::UnboundedSearch {
                search: SearchKind::OptimizerHorizon,
                from: range.start(),
                limit_days: max_horizon_days,
            });
        }
        Ok(())
    }

    /// Returns the days of `window` whose stored status is `Work`.
    fn open_work_days(&self, window: DateRange, store: &OverrideStore) -> Vec<Date> {
        window
            .days()
            .filter(|date| self.engine.stored_status(*date, store) == DayStatus::Work)
            .collect()
    }

    /// Collects up to `quota` `Work` days from `start` onward, stopping at
    /// the end of `horizon`.
    fn consecutive_block(
        &self,
        start: Date,
        horizon: DateRange,
        store: &OverrideStore,
        quota: u32,
    ) -> Vec<Date> {
        let Ok(tail) = DateRange::new(start, horizon.end()) else {
            return Vec::new();
        };
        tail.days()
            .filter(|date| self.engine.stored_status(*date, store) == DayStatus::Work)
            .take(usize::try_from(quota).unwrap_or(usize::MAX))
            .collect()
    }
}
