// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Import of the month-bucketed state layout.
//!
//! The older layout stores every visible day, grouped by month, with short
//! status codes:
//!
//! ```json
//! { "data": { "2026-05": { "2026-05-04": "CX", "2026-05-09": "ZZ" } }, "settings": {} }
//! ```
//!
//! Only decisions survive the import. Leave codes are kept, derived `CZ`
//! days are dropped, and work/rest/holiday codes are kept only where they
//! disagree with the base classification.

use crate::error::PersistenceError;
use crate::store::CalendarState;
use conges_domain::{
    DayStatus, HolidaySource, OverrideKind, OverrideStore, RestCycleConfig, classify,
    parse_iso_date,
};
use serde::Deserialize;
use std::collections::BTreeMap;
use time::Date;
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct LegacyState {
    #[serde(default)]
    data: BTreeMap<String, BTreeMap<String, String>>,
}

/// Result of a legacy import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyImport {
    /// The imported state, with default settings.
    pub state: CalendarState,
    /// Number of entries kept as overrides.
    pub imported: usize,
    /// Number of entries dropped as derived or redundant.
    pub dropped: usize,
}

/// Converts a month-bucketed state document into a [`CalendarState`].
///
/// # Arguments
///
/// * `json` - The legacy document
/// * `config` - The rest cycle used to detect redundant entries
/// * `holidays` - The holiday calendar used to detect redundant entries
///
/// # Errors
///
/// Returns `PersistenceError::Serialization` if the document is malformed,
/// holds an invalid date, or holds an unknown status code.
pub fn import_legacy_state<H>(
    json: &str,
    config: &RestCycleConfig,
    holidays: &H,
) -> Result<LegacyImport, PersistenceError>
where
    H: HolidaySource + ?Sized,
{
    let legacy: LegacyState = serde_json::from_str(json)?;
    let mut overrides: OverrideStore = OverrideStore::new();
    let mut dropped: usize = 0;

    for (month, days) in &legacy.data {
        for (key, code) in days {
            let date: Date = parse_iso_date(key)
                .map_err(|err| PersistenceError::Serialization(format!("{month}: {err}")))?;
            let status: DayStatus = code
                .parse()
                .map_err(|err| PersistenceError::Serialization(format!("{key}: {err}")))?;

            if status == DayStatus::TaxedRest {
                dropped += 1;
                continue;
            }
            if !status.is_charged() && status == classify(date, config, holidays) {
                dropped += 1;
                continue;
            }

            let kind: OverrideKind = OverrideKind::try_from(status)
                .map_err(|err| PersistenceError::Serialization(format!("{key}: {err}")))?;
            overrides.set(date, kind);
        }
        debug!(month = %month, "Imported legacy month");
    }

    let imported: usize = overrides.len();
    info!(imported, dropped, "Imported legacy calendar state");

    Ok(LegacyImport {
        state: CalendarState {
            overrides,
            ..CalendarState::default()
        },
        imported,
        dropped,
    })
}
