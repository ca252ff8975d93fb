//! Dot-separated variable names.
//!
//! Invariants:
//! - A `VariablePath` is never empty and never contains an empty segment.

use std::fmt;

use crate::constants::PATH_SEPARATOR;
use crate::loader::LoadError;

/// A validated, dot-separated variable name such as `database.host`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VariablePath {
    raw: String,
}

impl VariablePath {
    /// Validate `name` as a dot-path.
    ///
    /// Returns `LoadError::InvalidVariable` for an empty name or an empty
    /// segment (`a..b`, `.a`, `a.`).
    pub fn parse(name: &str) -> Result<Self, LoadError> {
        if name.trim().is_empty() {
            return Err(LoadError::InvalidVariable {
                variable: name.to_string(),
                reason: "variable name is empty".to_string(),
            });
        }
        if name.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(LoadError::InvalidVariable {
                variable: name.to_string(),
                reason: "variable name contains an empty segment".to_string(),
            });
        }
        Ok(Self {
            raw: name.to_string(),
        })
    }

    /// The full name as given.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.raw.split(PATH_SEPARATOR)
    }

    pub fn first(&self) -> &str {
        self.segments().next().unwrap_or(self.raw.as_str())
    }

    /// Segments after the first one.
    pub fn rest(&self) -> impl Iterator<Item = &str> {
        self.segments().skip(1)
    }

    pub fn depth(&self) -> usize {
        self.segments().count()
    }
}

impl fmt::Display for VariablePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
