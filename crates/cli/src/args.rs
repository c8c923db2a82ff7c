// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use conges_domain::{DateRange, DomainError, OverrideKind, WeekParity, parse_iso_date};
use conges_persistence::{DEFAULT_STATE_FILE, HolidayCalendar};
use std::path::PathBuf;
use time::Date;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Plan leave days against a rotating rest cycle.
#[derive(Debug, Parser)]
#[command(
    name = "conges",
    author,
    version,
    about,
    long_about = None,
    styles = clap_cargo::style::CLAP_STYLING
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub options: GlobalOptions,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Options shared by every subcommand. Rest-cycle options apply to the
/// current run only and are never written back to the state file.
#[derive(Debug, Clone, clap::Args)]
pub struct GlobalOptions {
    /// Path to the calendar state file
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state: PathBuf,

    /// Reject rest-day sets that do not hold two or three days
    #[arg(long, global = true)]
    pub strict: bool,

    /// Rest days on even weeks, comma separated (English or French names)
    #[arg(long, global = true, value_delimiter = ',')]
    pub even: Option<Vec<String>>,

    /// Rest days on odd weeks, comma separated (English or French names)
    #[arg(long, global = true, value_delimiter = ',')]
    pub odd: Option<Vec<String>>,

    /// Only tax weeks of this parity (even or odd)
    #[arg(long, global = true)]
    pub taxed_parity: Option<WeekParity>,

    /// Holiday calendar (french or none)
    #[arg(long, global = true)]
    pub holidays: Option<HolidayCalendar>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

/// An inclusive date range given on the command line.
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct RangeArgs {
    /// First day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub from: Date,

    /// Last day (YYYY-MM-DD)
    #[arg(long, value_parser = parse_iso_date)]
    pub to: Date,
}

impl RangeArgs {
    pub fn range(self) -> Result<DateRange, DomainError> {
        DateRange::new(self.from, self.to)
    }
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate a range and print every day with the totals
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        range: RangeArgs,

        /// First day of the scoring window (defaults to --from)
        #[arg(long, value_parser = parse_iso_date)]
        window_from: Option<Date>,

        /// Last day of the scoring window (defaults to --to)
        #[arg(long, value_parser = parse_iso_date)]
        window_to: Option<Date>,
    },

    /// Record a status for one day
    Set {
        /// The day (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        date: Date,

        /// WORK, REST, HOLIDAY, LEAVE or SUPPLEMENTARY_LEAVE (or TRA, ZZ, FC, CX, C4)
        status: OverrideKind,
    },

    /// Remove the recorded status of one day
    Unset {
        /// The day (YYYY-MM-DD)
        #[arg(value_parser = parse_iso_date)]
        date: Date,
    },

    /// Remove recorded statuses, either all of them or those in a range
    Reset {
        /// First day to clear
        #[arg(long, value_parser = parse_iso_date, requires = "to")]
        from: Option<Date>,

        /// Last day to clear
        #[arg(long, value_parser = parse_iso_date, requires = "from")]
        to: Option<Date>,
    },

    /// Place leave greedily, maximizing the charged count
    #[command(visible_alias = "g")]
    Greedy {
        #[command(flatten)]
        range: RangeArgs,

        /// Leave days to place (defaults to the stored quota)
        #[arg(long)]
        leave: Option<u32>,

        /// Supplementary leave days to place (defaults to the stored quota)
        #[arg(long)]
        supplementary: Option<u32>,

        /// Save the placement to the state file
        #[arg(long)]
        apply: bool,
    },

    /// Find the start date giving the longest time off
    Span {
        #[command(flatten)]
        range: RangeArgs,

        /// Leave days to place (defaults to the stored quota)
        #[arg(long)]
        leave: Option<u32>,

        /// Save the placement to the state file
        #[arg(long)]
        apply: bool,
    },

    /// Take every work day of a range as leave, within a quota
    #[command(visible_alias = "p")]
    Plan {
        #[command(flatten)]
        range: RangeArgs,

        /// Days the placement may charge (defaults to the stored quota)
        #[arg(long)]
        quota: Option<u32>,

        /// Save the placement to the state file
        #[arg(long)]
        apply: bool,
    },

    /// Import a month-bucketed state file into the current state
    Import {
        /// Path of the file to import
        legacy: PathBuf,
    },
}
