// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Printable views of evaluation and placement results.

use conges::{Boundary, EvaluationResult, StatusCounts};
use conges_domain::{CalendarDay, DayStatus, HolidaySource, WeekParity, format_iso_date};
use serde::Serialize;
use std::fmt;
use time::Date;

/// One evaluated day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayView {
    pub date: String,
    pub weekday: String,
    pub iso_week: u8,
    pub parity: WeekParity,
    pub status: DayStatus,
    pub code: &'static str,
    pub holiday: Option<String>,
    pub in_window: bool,
}

/// Tallies over the scoring window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CountsView {
    pub work: u32,
    pub rest: u32,
    pub holiday: u32,
    pub leave: u32,
    pub supplementary_leave: u32,
    pub taxed_rest: u32,
}

impl From<StatusCounts> for CountsView {
    fn from(counts: StatusCounts) -> Self {
        Self {
            work: counts.work,
            rest: counts.rest,
            holiday: counts.holiday,
            leave: counts.leave,
            supplementary_leave: counts.supplementary_leave,
            taxed_rest: counts.taxed_rest,
        }
    }
}

/// An evaluation, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationView {
    pub range: String,
    pub window: String,
    pub charged_count: u32,
    pub counts: CountsView,
    pub first_charged: Option<String>,
    pub last_charged: Option<String>,
    pub last_worked_before: Option<String>,
    pub first_worked_after: Option<String>,
    pub consecutive_off_span: Option<u32>,
    pub off_period: Option<String>,
    pub warnings: Vec<String>,
    pub days: Vec<DayView>,
}

impl EvaluationView {
    pub fn new<H>(result: &EvaluationResult, holidays: &H) -> Self
    where
        H: HolidaySource + ?Sized,
    {
        let days: Vec<DayView> = result
            .days
            .iter()
            .map(|(date, status)| {
                let day: CalendarDay = CalendarDay::new(*date, holidays);
                DayView {
                    date: format_iso_date(*date),
                    weekday: day.weekday.to_string(),
                    iso_week: day.iso_week,
                    parity: day.parity,
                    status: *status,
                    code: status.short_code(),
                    holiday: day.holiday,
                    in_window: result.window.contains(*date),
                }
            })
            .collect();

        let warnings: Vec<String> = [result.last_worked_before, result.first_worked_after]
            .into_iter()
            .flatten()
            .filter_map(|boundary| match boundary {
                Boundary::Found(_) => None,
                Boundary::NotFound {
                    from,
                    searched_days,
                } => Some(format!(
                    "no worked day within {searched_days} days of {}",
                    format_iso_date(from)
                )),
            })
            .collect();

        Self {
            range: result.range.to_string(),
            window: result.window.to_string(),
            charged_count: result.charged_count,
            counts: result.counts.into(),
            first_charged: result.first_charged.map(format_iso_date),
            last_charged: result.last_charged.map(format_iso_date),
            last_worked_before: result.last_worked_before_date().map(format_iso_date),
            first_worked_after: result.first_worked_after_date().map(format_iso_date),
            consecutive_off_span: result.consecutive_off_span,
            off_period: result.off_period.map(|period| period.to_string()),
            warnings,
            days,
        }
    }
}

impl fmt::Display for EvaluationView {
    /// Writes the day table followed by the totals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:<10}  {:<9}  {:>2}  CODE", "DATE", "DAY", "WK")?;
        for day in &self.days {
            let marker: &str = if day.in_window { "" } else { "(out)" };
            let holiday: &str = day.holiday.as_deref().unwrap_or("");
            writeln!(
                f,
                "{:<10}  {:<9}  {:>2}  {:<4}  {marker}{holiday}",
                day.date, day.weekday, day.iso_week, day.code
            )?;
        }
        writeln!(f)?;
        writeln!(f, "window:   {}", self.window)?;
        writeln!(
            f,
            "charged:  {} (CX {}, C4 {}, CZ {})",
            self.charged_count,
            self.counts.leave,
            self.counts.supplementary_leave,
            self.counts.taxed_rest
        )?;
        writeln!(f, "DJT:      {}", or_dash(self.last_worked_before.as_deref()))?;
        writeln!(f, "RAT:      {}", or_dash(self.first_worked_after.as_deref()))?;
        match self.consecutive_off_span {
            Some(span) => writeln!(f, "off span: {span} days")?,
            None => writeln!(f, "off span: -")?,
        }
        for warning in &self.warnings {
            writeln!(f, "warning:  {warning}")?;
        }
        Ok(())
    }
}

/// The result of a placement strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacementView {
    pub strategy: &'static str,
    pub placed_leave: Vec<String>,
    pub placed_supplementary: Vec<String>,
    pub start: Option<String>,
    pub span: Option<u32>,
    pub quota_remaining: Option<u32>,
    pub applied: bool,
    pub evaluation: EvaluationView,
}

impl PlacementView {
    pub fn new(strategy: &'static str, placed_leave: &[Date], evaluation: EvaluationView) -> Self {
        Self {
            strategy,
            placed_leave: placed_leave.iter().copied().map(format_iso_date).collect(),
            placed_supplementary: Vec::new(),
            start: None,
            span: None,
            quota_remaining: None,
            applied: false,
            evaluation,
        }
    }
}

impl fmt::Display for PlacementView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "strategy: {}", self.strategy)?;
        if let Some(start) = &self.start {
            writeln!(f, "start:    {start}")?;
        }
        writeln!(f, "leave:    {}", self.placed_leave.join(", "))?;
        if !self.placed_supplementary.is_empty() {
            writeln!(f, "supp.:    {}", self.placed_supplementary.join(", "))?;
        }
        if let Some(remaining) = self.quota_remaining {
            writeln!(f, "left:     {remaining}")?;
        }
        let applied: &str = if self.applied { "yes" } else { "no (use --apply)" };
        writeln!(f, "applied:  {applied}")?;
        writeln!(f)?;
        write!(f, "{}", self.evaluation)
    }
}

const fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(value) => value,
        None => "-",
    }
}
