// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::{Command, RangeArgs};
use crate::output::{EvaluationView, PlacementView};
use crate::session::Session;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use conges::{
    EvaluationResult, GreedyOutcome, Optimizer, PlanOutcome, RuleEngine, SpanOutcome,
};
use conges_domain::{DateRange, HolidaySource, OverrideKind, format_iso_date};
use conges_persistence::{LegacyImport, import_legacy_state};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;
use time::Date;
use tracing::{debug, info};

impl Command {
    pub fn run(self, session: &mut Session) -> Result<()> {
        match self {
            Self::Show {
                range,
                window_from,
                window_to,
            } => show(session, range, window_from, window_to),
            Self::Set { date, status } => set(session, date, status),
            Self::Unset { date } => unset(session, date),
            Self::Reset { from, to } => reset(session, from, to),
            Self::Greedy {
                range,
                leave,
                supplementary,
                apply,
            } => greedy(session, range, leave, supplementary, apply),
            Self::Span {
                range,
                leave,
                apply,
            } => span(session, range, leave, apply),
            Self::Plan {
                range,
                quota,
                apply,
            } => plan(session, range, quota, apply),
            Self::Import { legacy } => import(session, &legacy),
        }
    }
}

fn show(
    session: &Session,
    range: RangeArgs,
    window_from: Option<Date>,
    window_to: Option<Date>,
) -> Result<()> {
    let range: DateRange = range.range()?;
    let window: DateRange = DateRange::new(
        window_from.unwrap_or_else(|| range.start()),
        window_to.unwrap_or_else(|| range.end()),
    )?;
    let engine: RuleEngine<'_, dyn HolidaySource> = session.engine();
    let result: EvaluationResult = engine.evaluate_window(range, window, session.overrides())?;
    let view: EvaluationView = EvaluationView::new(&result, session.holidays());
    emit(session.json, &view)
}

fn set(session: &mut Session, date: Date, status: OverrideKind) -> Result<()> {
    let previous: Option<OverrideKind> = session.edit(|store| store.set(date, status))?;
    info!(
        date = %format_iso_date(date),
        status = %status,
        previous = ?previous,
        "Recorded status"
    );
    Ok(())
}

fn unset(session: &mut Session, date: Date) -> Result<()> {
    match session.edit(|store| store.remove(date))? {
        Some(previous) => info!(
            date = %format_iso_date(date),
            previous = %previous,
            "Removed status"
        ),
        None => info!(date = %format_iso_date(date), "No status recorded"),
    }
    Ok(())
}

fn reset(session: &mut Session, from: Option<Date>, to: Option<Date>) -> Result<()> {
    let removed: usize = match (from, to) {
        (Some(from), Some(to)) => {
            let range: DateRange = DateRange::new(from, to)?;
            for (date, kind) in session.overrides().range(range) {
                debug!(date = %format_iso_date(date), status = %kind, "Clearing status");
            }
            session.edit(|store| store.clear_range(range))?
        }
        (None, None) => session.edit(|store| {
            let count: usize = store.len();
            store.clear();
            count
        })?,
        _ => return Err(eyre!("--from and --to must be given together")),
    };
    info!(removed, "Cleared statuses");
    Ok(())
}

fn greedy(
    session: &mut Session,
    range: RangeArgs,
    leave: Option<u32>,
    supplementary: Option<u32>,
    apply: bool,
) -> Result<()> {
    let window: DateRange = range.range()?;
    let leave: u32 = leave.unwrap_or(session.settings().leave_quota);
    let supplementary: u32 = supplementary.unwrap_or(session.settings().supplementary_quota);

    let outcome: GreedyOutcome = {
        let engine: RuleEngine<'_, dyn HolidaySource> = session.engine();
        Optimizer::new(&engine).optimize_greedy(
            session.overrides(),
            window,
            leave,
            supplementary,
        )?
    };

    let mut view: PlacementView = PlacementView::new(
        "greedy",
        &outcome.placed_leave,
        EvaluationView::new(&outcome.evaluation, session.holidays()),
    );
    view.placed_supplementary = outcome
        .placed_supplementary
        .iter()
        .copied()
        .map(format_iso_date)
        .collect();
    if apply {
        session.commit(outcome.store)?;
        view.applied = true;
    }
    emit(session.json, &view)
}

fn span(session: &mut Session, range: RangeArgs, leave: Option<u32>, apply: bool) -> Result<()> {
    let horizon: DateRange = range.range()?;
    let leave: u32 = leave.unwrap_or(session.settings().leave_quota);

    let outcome: SpanOutcome = {
        let engine: RuleEngine<'_, dyn HolidaySource> = session.engine();
        Optimizer::new(&engine).optimize_span(session.overrides(), horizon, leave)?
    };

    let mut view: PlacementView = PlacementView::new(
        "span",
        &outcome.placed,
        EvaluationView::new(&outcome.evaluation, session.holidays()),
    );
    view.start = Some(format_iso_date(outcome.start));
    view.span = Some(outcome.span);
    if apply {
        session.commit(outcome.store)?;
        view.applied = true;
    }
    emit(session.json, &view)
}

fn plan(session: &mut Session, range: RangeArgs, quota: Option<u32>, apply: bool) -> Result<()> {
    let range: DateRange = range.range()?;
    let quota: u32 = quota.unwrap_or(session.settings().leave_quota);

    let outcome: PlanOutcome = {
        let engine: RuleEngine<'_, dyn HolidaySource> = session.engine();
        Optimizer::new(&engine).plan_range(session.overrides(), range, quota)?
    };

    let mut view: PlacementView = PlacementView::new(
        "plan",
        &outcome.placed,
        EvaluationView::new(&outcome.evaluation, session.holidays()),
    );
    view.quota_remaining = Some(outcome.quota_remaining);
    if apply {
        session.commit(outcome.store)?;
        view.applied = true;
    }
    emit(session.json, &view)
}

fn import(session: &mut Session, legacy: &Path) -> Result<()> {
    let contents: String = std::fs::read_to_string(legacy)?;
    let imported: LegacyImport =
        import_legacy_state(&contents, session.config(), session.holidays())?;
    let entries: Vec<(Date, OverrideKind)> = imported.state.overrides.iter().collect();
    session.edit(|store| {
        for (date, kind) in entries {
            store.set(date, kind);
        }
    })?;
    info!(
        path = %legacy.display(),
        imported = imported.imported,
        dropped = imported.dropped,
        "Imported legacy state"
    );
    Ok(())
}

fn emit<T>(json: bool, value: &T) -> Result<()>
where
    T: Serialize + Display,
{
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        print!("{value}");
    }
    Ok(())
}
