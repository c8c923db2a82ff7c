// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use conges_domain::DomainError;

/// Errors that can occur while reading or writing calendar state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The state file could not be read or written.
    Io(String),
    /// The state file is not valid JSON or does not match the expected layout.
    Serialization(String),
    /// The stored settings do not describe a usable configuration.
    InvalidSettings(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "State file I/O error: {msg}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidSettings(msg) => write!(f, "Invalid settings: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<DomainError> for PersistenceError {
    fn from(err: DomainError) -> Self {
        Self::InvalidSettings(err.to_string())
    }
}
