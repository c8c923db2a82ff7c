// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::args::GlobalOptions;
use color_eyre::Result;
use conges::{EngineSettings, RuleEngine};
use conges_domain::{HolidaySource, OverrideStore, RestCycleConfig};
use conges_persistence::{CalendarState, JsonStateStore, StoredSettings};
use tracing::debug;

/// Loaded state plus the configuration in force for this run.
#[derive(Debug)]
pub struct Session {
    store: JsonStateStore,
    state: CalendarState,
    settings: StoredSettings,
    config: RestCycleConfig,
    holidays: &'static dyn HolidaySource,
    pub json: bool,
}

impl Session {
    /// Loads the state file and applies command-line overrides.
    pub fn open(options: &GlobalOptions) -> Result<Self> {
        let store: JsonStateStore = JsonStateStore::new(&options.state);
        let state: CalendarState = store.load()?;
        let settings: StoredSettings = effective_settings(&state.settings, options);
        settings.validate()?;
        let config: RestCycleConfig = settings.rest_cycle()?;

        debug!(
            even = ?settings.rest_days_on_even_weeks,
            odd = ?settings.rest_days_on_odd_weeks,
            strict = settings.strict,
            "Opened session"
        );

        Ok(Self {
            store,
            state,
            holidays: settings.holidays.source(),
            settings,
            config,
            json: options.json,
        })
    }

    pub fn engine(&self) -> RuleEngine<'_, dyn HolidaySource> {
        let bounds: EngineSettings = self.settings.engine_settings();
        RuleEngine::new(&self.config, self.holidays).with_settings(bounds)
    }

    pub const fn overrides(&self) -> &OverrideStore {
        &self.state.overrides
    }

    pub const fn settings(&self) -> &StoredSettings {
        &self.settings
    }

    pub const fn config(&self) -> &RestCycleConfig {
        &self.config
    }

    pub const fn holidays(&self) -> &dyn HolidaySource {
        self.holidays
    }

    /// Replaces the overrides and saves the state file.
    pub fn commit(&mut self, overrides: OverrideStore) -> Result<()> {
        self.state.overrides = overrides;
        self.save()
    }

    /// Applies `edit` to the overrides and saves the state file.
    pub fn edit<T>(&mut self, edit: impl FnOnce(&mut OverrideStore) -> T) -> Result<T> {
        let result: T = edit(&mut self.state.overrides);
        self.save()?;
        Ok(result)
    }

    fn save(&self) -> Result<()> {
        self.store.save(&self.state)?;
        Ok(())
    }
}

fn effective_settings(stored: &StoredSettings, options: &GlobalOptions) -> StoredSettings {
    let mut settings: StoredSettings = stored.clone();
    if let Some(even) = &options.even {
        settings.rest_days_on_even_weeks.clone_from(even);
    }
    if let Some(odd) = &options.odd {
        settings.rest_days_on_odd_weeks.clone_from(odd);
    }
    if options.taxed_parity.is_some() {
        settings.taxed_parity = options.taxed_parity;
    }
    if let Some(holidays) = options.holidays {
        settings.holidays = holidays;
    }
    settings.strict |= options.strict;
    settings
}
