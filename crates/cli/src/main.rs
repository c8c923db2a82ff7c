// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Command-line front end for the Conges leave planner.
//!
//! Every run loads the state file, performs one command, and saves the state
//! again if the command changed it.

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
#![allow(clippy::multiple_crate_versions)]

mod args;
mod commands;
mod output;
mod session;

use args::Args;
use clap::Parser;
use color_eyre::Result;
use session::Session;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match run(args) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let mut session: Session = Session::open(&args.options)?;
    args.command.run(&mut session)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;
    use crate::args::Command;
    use conges_domain::OverrideKind;
    use conges_persistence::{CalendarState, JsonStateStore};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU64, Ordering};
    use time::macros::date;

    static FILE_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn create_test_path() -> PathBuf {
        let id: u64 = FILE_COUNTER.fetch_add(1, Ordering::SeqCst);
        std::env::temp_dir()
            .join(format!("conges-cli-test-{}", std::process::id()))
            .join(format!("state-{id}.json"))
    }

    fn run_with(path: &std::path::Path, extra: &[&str]) -> Result<()> {
        let mut argv: Vec<String> = vec![
            String::from("conges"),
            String::from("--state"),
            path.display().to_string(),
            String::from("--holidays"),
            String::from("none"),
        ];
        argv.extend(extra.iter().map(ToString::to_string));
        run(Args::try_parse_from(argv)?)
    }

    fn load(path: &std::path::Path) -> CalendarState {
        JsonStateStore::new(path).load().unwrap()
    }

    #[test]
    fn test_parse_set_accepts_short_codes() {
        let args: Args = Args::try_parse_from(["conges", "set", "2026-05-12", "CX"]).unwrap();

        assert!(matches!(
            args.command,
            Command::Set {
                status: OverrideKind::Leave,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        assert!(Args::try_parse_from(["conges", "unset", "2026-13-01"]).is_err());
    }

    #[test]
    fn test_parse_rest_day_lists() {
        let args: Args = Args::try_parse_from([
            "conges",
            "--even",
            "samedi,dimanche,lundi",
            "show",
            "--from",
            "2026-05-11",
            "--to",
            "2026-05-17",
        ])
        .unwrap();

        assert_eq!(
            args.options.even,
            Some(vec![
                String::from("samedi"),
                String::from("dimanche"),
                String::from("lundi"),
            ])
        );
        assert!(args.options.odd.is_none());
    }

    #[test]
    fn test_reset_requires_both_bounds() {
        assert!(Args::try_parse_from(["conges", "reset", "--from", "2026-05-01"]).is_err());
    }

    #[test]
    fn test_set_and_unset_persist() {
        let path: PathBuf = create_test_path();

        run_with(&path, &["set", "2026-05-12", "LEAVE"]).unwrap();
        assert_eq!(
            load(&path).overrides.get(date!(2026 - 05 - 12)),
            Some(OverrideKind::Leave)
        );

        run_with(&path, &["unset", "2026-05-12"]).unwrap();
        assert!(load(&path).overrides.is_empty());
    }

    #[test]
    fn test_greedy_applies_only_when_asked() {
        let path: PathBuf = create_test_path();
        let window: [&str; 5] = ["greedy", "--from", "2026-05-11", "--to", "2026-05-17"];

        run_with(&path, &window).unwrap();
        assert!(load(&path).overrides.is_empty());

        let mut applied: Vec<&str> = window.to_vec();
        applied.extend(["--leave", "2", "--apply"]);
        run_with(&path, &applied).unwrap();
        assert_eq!(load(&path).overrides.len(), 2);
    }

    #[test]
    fn test_rest_cycle_options_are_not_saved() {
        let path: PathBuf = create_test_path();

        run_with(
            &path,
            &["--even", "samedi,dimanche,lundi", "set", "2026-05-15", "CX"],
        )
        .unwrap();

        assert_eq!(
            load(&path).settings.rest_days_on_even_weeks,
            vec![String::from("saturday"), String::from("sunday")]
        );
    }

    #[test]
    fn test_span_reports_horizon_cap() {
        let path: PathBuf = create_test_path();

        let result: Result<()> = run_with(
            &path,
            &["span", "--from", "2026-01-01", "--to", "2026-12-31"],
        );

        assert!(result.is_err());
    }
}
