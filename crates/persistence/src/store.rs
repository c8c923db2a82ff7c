// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::PersistenceError;
use crate::settings::StoredSettings;
use conges_domain::OverrideStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default state file name, relative to the working directory.
pub const DEFAULT_STATE_FILE: &str = "calendar_state.json";

/// Everything persisted between runs.
///
/// Taxed rest days are never stored; they are derived again on every
/// evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarState {
    /// Explicit per-day decisions.
    pub overrides: OverrideStore,
    /// Rest cycle, quotas and search bounds.
    pub settings: StoredSettings,
}

/// Reads and writes [`CalendarState`] as a pretty-printed JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the state, or returns an empty default state if the file does
    /// not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// holds settings that fail validation.
    pub fn load(&self) -> Result<CalendarState, PersistenceError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No state file, starting empty");
            return Ok(CalendarState::default());
        }

        let contents: String = std::fs::read_to_string(&self.path)?;
        let state: CalendarState = serde_json::from_str(&contents)?;
        state.settings.validate()?;

        info!(
            path = %self.path.display(),
            overrides = state.overrides.len(),
            "Loaded calendar state"
        );
        Ok(state)
    }

    /// Writes `state` to the backing file, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if the state cannot be serialized or written.
    pub fn save(&self, state: &CalendarState) -> Result<(), PersistenceError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let contents: String = serde_json::to_string_pretty(state)?;
        std::fs::write(&self.path, contents)?;

        info!(
            path = %self.path.display(),
            overrides = state.overrides.len(),
            "Saved calendar state"
        );
        Ok(())
    }
}
