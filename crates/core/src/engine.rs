// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The rule engine.
//!
//! Evaluation runs in two passes over whole ISO weeks:
//! 1. Every day resolves to its override if present, otherwise to its base
//!    classification.
//! 2. Each week derives at most one `TaxedRest` (see [`crate::week`]).
//!
//! Aggregates are then computed over a scoring window, which may be narrower
//! than the evaluated range:
//! - `charged_count`: `Leave` + `SupplementaryLeave` + `TaxedRest` days
//! - DJT: the nearest `Work` day strictly before the first charged day
//! - RAT: the nearest `Work` day strictly after the last charged day
//! - `consecutive_off_span`: RAT - DJT - 1 days
//!
//! The DJT/RAT walks leave the evaluated range when needed and are capped by
//! [`EngineSettings::boundary_search_limit`]. A walk that hits the cap yields
//! [`Boundary::NotFound`] rather than looping.

use crate::error::{CoreError, SearchKind};
use crate::settings::EngineSettings;
use crate::week::{DAYS_PER_WEEK, WeekCache, WeekResolution};
use conges_domain::{
    DateRange, DayStatus, HolidaySource, OverrideStore, RestCycleConfig, classify,
};
use time::{Date, Duration};
use tracing::{debug, warn};

/// Outcome of a DJT or RAT search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// The worked day that bounds the charged span.
    Found(Date),
    /// No worked day within the search cap.
    NotFound {
        /// The charged day the walk started from.
        from: Date,
        /// The number of days walked.
        searched_days: u32,
    },
}

impl Boundary {
    /// Returns the boundary date when it was found.
    #[must_use]
    pub const fn date(&self) -> Option<Date> {
        match self {
            Self::Found(date) => Some(*date),
            Self::NotFound { .. } => None,
        }
    }
}

/// Per-status tallies over a scoring window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    /// Worked days.
    pub work: u32,
    /// Untaxed rest days.
    pub rest: u32,
    /// Untaxed public holidays.
    pub holiday: u32,
    /// Leave days.
    pub leave: u32,
    /// Supplementary leave days.
    pub supplementary_leave: u32,
    /// Taxed rest days.
    pub taxed_rest: u32,
}

impl StatusCounts {
    fn record(&mut self, status: DayStatus) {
        let slot: &mut u32 = match status {
            DayStatus::Work => &mut self.work,
            DayStatus::Rest => &mut self.rest,
            DayStatus::Holiday => &mut self.holiday,
            DayStatus::Leave => &mut self.leave,
            DayStatus::SupplementaryLeave => &mut self.supplementary_leave,
            DayStatus::TaxedRest => &mut self.taxed_rest,
        };
        *slot += 1;
    }

    /// Returns the tally for `status`.
    #[must_use]
    pub const fn get(&self, status: DayStatus) -> u32 {
        match status {
            DayStatus::Work => self.work,
            DayStatus::Rest => self.rest,
            DayStatus::Holiday => self.holiday,
            DayStatus::Leave => self.leave,
            DayStatus::SupplementaryLeave => self.supplementary_leave,
            DayStatus::TaxedRest => self.taxed_rest,
        }
    }

    /// Returns the number of charged days.
    #[must_use]
    pub const fn charged(&self) -> u32 {
        self.leave + self.supplementary_leave + self.taxed_rest
    }
}

/// Result of evaluating a date range against a set of overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluationResult {
    /// The evaluated range.
    pub range: DateRange,
    /// The scoring window used for aggregates.
    pub window: DateRange,
    /// Final status of every day of `range`, in date order.
    pub days: Vec<(Date, DayStatus)>,
    /// Tallies over `window`.
    pub counts: StatusCounts,
    /// Charged days over `window`.
    pub charged_count: u32,
    /// First charged day in `window`.
    pub first_charged: Option<Date>,
    /// Last charged day in `window`.
    pub last_charged: Option<Date>,
    /// DJT. `None` when `window` holds no charged day.
    pub last_worked_before: Option<Boundary>,
    /// RAT. `None` when `window` holds no charged day.
    pub first_worked_after: Option<Boundary>,
    /// RAT - DJT - 1, or the window length when nothing is charged.
    /// `None` when either boundary search hit its cap.
    pub consecutive_off_span: Option<u32>,
    /// The days strictly between DJT and RAT.
    pub off_period: Option<DateRange>,
}

impl EvaluationResult {
    /// Returns the final status of `date` if it lies in the evaluated range.
    #[must_use]
    pub fn status(&self, date: Date) -> Option<DayStatus> {
        self.days
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|index| self.days[index].1)
    }

    /// Returns the charged days inside the scoring window.
    #[must_use]
    pub fn charged_days(&self) -> Vec<Date> {
        self.days_in_window_where(DayStatus::is_charged)
    }

    /// Returns the taxed rest days inside the scoring window.
    #[must_use]
    pub fn taxed_days(&self) -> Vec<Date> {
        self.days_in_window_where(|status| *status == DayStatus::TaxedRest)
    }

    /// Returns the DJT date when it was found.
    #[must_use]
    pub fn last_worked_before_date(&self) -> Option<Date> {
        self.last_worked_before.and_then(|b| b.date())
    }

    /// Returns the RAT date when it was found.
    #[must_use]
    pub fn first_worked_after_date(&self) -> Option<Date> {
        self.first_worked_after.and_then(|b| b.date())
    }

    /// Returns the off-duty span, surfacing an exhausted boundary search.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnboundedSearch` if DJT or RAT was not found
    /// within the search cap.
    pub fn require_span(&self) -> Result<u32, CoreError> {
        for (boundary, search) in [
            (self.last_worked_before, SearchKind::LastWorkedBefore),
            (self.first_worked_after, SearchKind::FirstWorkedAfter),
        ] {
            if let Some(Boundary::NotFound {
                from,
                searched_days,
            }) = boundary
            {
                return Err(CoreError::UnboundedSearch {
                    search,
                    from,
                    limit_days: searched_days,
                });
            }
        }
        Ok(self.consecutive_off_span.unwrap_or(0))
    }

    fn days_in_window_where<P>(&self, predicate: P) -> Vec<Date>
    where
        P: Fn(&DayStatus) -> bool,
    {
        self.days
            .iter()
            .filter(|(date, status)| self.window.contains(*date) && predicate(status))
            .map(|(date, _)| *date)
            .collect()
    }
}

/// Evaluates calendars for one rest cycle and holiday calendar.
#[derive(Debug, Clone, Copy)]
pub struct RuleEngine<'a, H>
where
    H: HolidaySource + ?Sized,
{
    config: &'a RestCycleConfig,
    holidays: &'a H,
    settings: EngineSettings,
}

impl<'a, H> RuleEngine<'a, H>
where
    H: HolidaySource + ?Sized,
{
    /// Creates an engine with default search bounds.
    #[must_use]
    pub fn new(config: &'a RestCycleConfig, holidays: &'a H) -> Self {
        Self {
            config,
            holidays,
            settings: EngineSettings::default(),
        }
    }

    /// Replaces the search bounds.
    #[must_use]
    pub const fn with_settings(mut self, settings: EngineSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Returns the search bounds in force.
    #[must_use]
    pub const fn settings(&self) -> EngineSettings {
        self.settings
    }

    /// Returns the rest cycle in force.
    #[must_use]
    pub const fn config(&self) -> &RestCycleConfig {
        self.config
    }

    /// Returns the base classification of `date`.
    #[must_use]
    pub fn base_status(&self, date: Date) -> DayStatus {
        classify(date, self.config, self.holidays)
    }

    /// Returns the override for `date` if any, otherwise its base status.
    #[must_use]
    pub fn stored_status(&self, date: Date, overrides: &OverrideStore) -> DayStatus {
        overrides
            .get(date)
            .map_or_else(|| self.base_status(date), DayStatus::from)
    }

    /// Resolves the ISO week starting on `monday`, including taxation.
    #[must_use]
    pub fn resolve_week(&self, monday: Date, overrides: &OverrideStore) -> WeekResolution {
        let mut stored: [DayStatus; DAYS_PER_WEEK] = [DayStatus::Work; DAYS_PER_WEEK];
        for (offset, slot) in (0_i64..).zip(stored.iter_mut()) {
            let date: Date = monday.saturating_add(Duration::days(offset));
            *slot = self.stored_status(date, overrides);
        }
        WeekResolution::derive(monday, stored, self.config.is_taxable_week(monday))
    }

    /// Evaluates `range`, scoring over the whole range.
    #[must_use]
    pub fn evaluate(&self, range: DateRange, overrides: &OverrideStore) -> EvaluationResult {
        self.evaluate_unchecked(range, range, overrides)
    }

    /// Evaluates `range`, scoring over `window`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::WindowOutsideRange` if `window` is not inside `range`.
    pub fn evaluate_window(
        &self,
        range: DateRange,
        window: DateRange,
        overrides: &OverrideStore,
    ) -> Result<EvaluationResult, CoreError> {
        if !range.contains_range(&window) {
            return Err(CoreError::WindowOutsideRange { range, window });
        }
        Ok(self.evaluate_unchecked(range, window, overrides))
    }

    fn evaluate_unchecked(
        &self,
        range: DateRange,
        window: DateRange,
        overrides: &OverrideStore,
    ) -> EvaluationResult {
        let mut weeks = WeekCache::new(|monday: Date| self.resolve_week(monday, overrides));

        let days: Vec<(Date, DayStatus)> = range
            .days()
            .map(|date| (date, weeks.status(date)))
            .collect();

        let mut counts: StatusCounts = StatusCounts::default();
        let mut first_charged: Option<Date> = None;
        let mut last_charged: Option<Date> = None;
        for (date, status) in days.iter().filter(|(date, _)| window.contains(*date)) {
            counts.record(*status);
            if status.is_charged() {
                first_charged.get_or_insert(*date);
                last_charged = Some(*date);
            }
        }

        let (last_worked_before, first_worked_after): (Option<Boundary>, Option<Boundary>) =
            match (first_charged, last_charged) {
                (Some(first), Some(last)) => (
                    Some(self.search_boundary(first, Direction::Backward, &mut weeks)),
                    Some(self.search_boundary(last, Direction::Forward, &mut weeks)),
                ),
                _ => (None, None),
            };

        let (consecutive_off_span, off_period): (Option<u32>, Option<DateRange>) =
            match (last_worked_before, first_worked_after) {
                (None, None) => (Some(window.len_days()), None),
                (Some(Boundary::Found(djt)), Some(Boundary::Found(rat))) => {
                    let span: i64 = (rat - djt).whole_days() - 1;
                    let off_period: Option<DateRange> = djt
                        .next_day()
                        .zip(rat.previous_day())
                        .and_then(|(start, end)| DateRange::new(start, end).ok());
                    (u32::try_from(span).ok(), off_period)
                }
                _ => (None, None),
            };

        debug!(
            range = %range,
            window = %window,
            charged = counts.charged(),
            resolved_weeks = weeks.resolved_weeks(),
            "Evaluated calendar"
        );

        EvaluationResult {
            range,
            window,
            days,
            counts,
            charged_count: counts.charged(),
            first_charged,
            last_charged,
            last_worked_before,
            first_worked_after,
            consecutive_off_span,
            off_period,
        }
    }

    /// Walks away from `from` one day at a time until a `Work` day is found
    /// or the search cap is reached.
    fn search_boundary<F>(
        &self,
        from: Date,
        direction: Direction,
        weeks: &mut WeekCache<F>,
    ) -> Boundary
    where
        F: Fn(Date) -> WeekResolution,
    {
        let limit: u32 = self.settings.boundary_search_limit;
        let mut current: Date = from;
        for _ in 0..limit {
            let next: Option<Date> = match direction {
                Direction::Backward => current.previous_day(),
                Direction::Forward => current.next_day(),
            };
            let Some(next) = next else {
                break;
            };
            current = next;
            if weeks.status(current) == DayStatus::Work {
                return Boundary::Found(current);
            }
        }

        warn!(
            from = %from,
            direction = ?direction,
            limit,
            "No worked day found within the boundary search cap"
        );
        Boundary::NotFound {
            from,
            searched_days: limit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Backward,
    Forward,
}
