// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Default cap on the DJT/RAT boundary walk, in days.
pub const DEFAULT_BOUNDARY_SEARCH_LIMIT: u32 = 60;

/// Default cap on any optimizer search range, in days (about six months).
pub const DEFAULT_MAX_HORIZON_DAYS: u32 = 184;

/// Search bounds applied by the engine and the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineSettings {
    /// Maximum number of days walked when looking for DJT or RAT.
    pub boundary_search_limit: u32,
    /// Maximum length of the range any optimizer strategy searches.
    pub max_horizon_days: u32,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            boundary_search_limit: DEFAULT_BOUNDARY_SEARCH_LIMIT,
            max_horizon_days: DEFAULT_MAX_HORIZON_DAYS,
        }
    }
}
