//! Error types for configuration value loading.
//!
//! Responsibilities:
//! - Define the error taxonomy surfaced by every `load` call.
//! - Separate caller usage errors from file-level failures.
//!
//! Does NOT handle:
//! - Line-level custom-format diagnostics (see `custom::CustomParseError`,
//!   which is re-surfaced here as `Decode`).
//!
//! Invariants:
//! - `FileNotFound`, `VariableNotFound`, and `Decode` never overlap: a missing
//!   file is reported before any parse attempt, and a variable is only reported
//!   missing once the file parsed cleanly.
//! - Decode messages NEVER include raw line contents to prevent secret leakage.

use std::path::PathBuf;
use thiserror::Error;

use crate::constants::SUPPORTED_FORMATS;

/// Result type for configuration value loading.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while loading a configuration value.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The requested file does not exist at the default or explicit path.
    #[error("{format} file not found. Please make sure the file exists at {}.", path.display())]
    FileNotFound { format: &'static str, path: PathBuf },

    /// The file parsed but does not contain the requested variable.
    #[error("Variable '{variable}' not found in {}.", path.display())]
    VariableNotFound { variable: String, path: PathBuf },

    /// The file exists but cannot be parsed into a mapping.
    #[error("Error decoding {}: {message}. Please ensure the file is properly formatted.", path.display())]
    Decode { path: PathBuf, message: String },

    #[error(
        "Unsupported file format '{0}'. Supported formats are {formats}.",
        formats = SUPPORTED_FORMATS.join(", ")
    )]
    UnsupportedFormat(String),

    #[error("Invalid variable name '{variable}': {reason}")]
    InvalidVariable { variable: String, reason: String },

    /// Reading the file failed for a reason other than absence.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// True for errors caused by the caller's arguments rather than by the file.
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            LoadError::UnsupportedFormat(_) | LoadError::InvalidVariable { .. }
        )
    }

    /// Path of the file involved, when the error concerns one.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            LoadError::FileNotFound { path, .. }
            | LoadError::VariableNotFound { path, .. }
            | LoadError::Decode { path, .. }
            | LoadError::Io { path, .. } => Some(path.as_path()),
            LoadError::UnsupportedFormat(_) | LoadError::InvalidVariable { .. } => None,
        }
    }
}
