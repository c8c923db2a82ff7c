// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Explicit per-day decisions that take precedence over base classification.
//!
//! Entries are created by a user edit or by the optimizer and stay until they
//! are overwritten or cleared. The store performs no persistence itself;
//! callers persist the serialized form after each mutation.
//!
//! ## Serialized form
//!
//! A JSON object mapping `YYYY-MM-DD` to a status code:
//!
//! ```json
//! { "2026-05-04": "LEAVE", "2026-05-05": "SUPPLEMENTARY_LEAVE" }
//! ```

use crate::error::DomainError;
use crate::types::{DateRange, OverrideKind, format_iso_date, parse_iso_date};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::Date;

/// A mapping from date to an explicit status decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, OverrideKind>",
    into = "BTreeMap<String, OverrideKind>"
)]
pub struct OverrideStore {
    entries: BTreeMap<Date, OverrideKind>,
}

impl OverrideStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Records `kind` for `date`, returning the previous entry.
    pub fn set(&mut self, date: Date, kind: OverrideKind) -> Option<OverrideKind> {
        self.entries.insert(date, kind)
    }

    /// Returns the entry for `date`, if any.
    #[must_use]
    pub fn get(&self, date: Date) -> Option<OverrideKind> {
        self.entries.get(&date).copied()
    }

    /// Removes the entry for `date`, returning it.
    pub fn remove(&mut self, date: Date) -> Option<OverrideKind> {
        self.entries.remove(&date)
    }

    /// Puts back an entry previously returned by `set` or `remove`.
    ///
    /// `None` removes whatever is stored for `date`.
    pub fn restore(&mut self, date: Date, previous: Option<OverrideKind>) {
        match previous {
            Some(kind) => {
                self.entries.insert(date, kind);
            }
            None => {
                self.entries.remove(&date);
            }
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes every entry inside `range`, returning how many were removed.
    pub fn clear_range(&mut self, range: DateRange) -> usize {
        let before: usize = self.entries.len();
        self.entries
            .retain(|date, _| !range.contains(*date));
        before - self.entries.len()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in date order.
    pub fn iter(&self) -> impl Iterator<Item = (Date, OverrideKind)> + '_ {
        self.entries.iter().map(|(date, kind)| (*date, *kind))
    }

    /// Iterates over the entries inside `range` in date order.
    pub fn range(&self, range: DateRange) -> impl Iterator<Item = (Date, OverrideKind)> + '_ {
        self.entries
            .range(range.start()..=range.end())
            .map(|(date, kind)| (*date, *kind))
    }
}

impl TryFrom<BTreeMap<String, OverrideKind>> for OverrideStore {
    type Error = DomainError;

    fn try_from(raw: BTreeMap<String, OverrideKind>) -> Result<Self, Self::Error> {
        let mut entries: BTreeMap<Date, OverrideKind> = BTreeMap::new();
        for (key, kind) in raw {
            entries.insert(parse_iso_date(&key)?, kind);
        }
        Ok(Self { entries })
    }
}

impl From<OverrideStore> for BTreeMap<String, OverrideKind> {
    fn from(store: OverrideStore) -> Self {
        store
            .entries
            .into_iter()
            .map(|(date, kind)| (format_iso_date(date), kind))
            .collect()
    }
}

impl FromIterator<(Date, OverrideKind)> for OverrideStore {
    fn from_iter<I: IntoIterator<Item = (Date, OverrideKind)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
