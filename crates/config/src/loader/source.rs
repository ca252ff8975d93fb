//! Scoped reading of configuration files.
//!
//! Invariants:
//! - Absence is detected from the open failure itself, never from a prior
//!   existence check.
//! - The file handle is released before any parsing starts.

use std::io::ErrorKind;
use std::path::Path;

use super::error::{LoadError, Result};
use crate::types::FileFormat;

/// Read the whole file at `path` as UTF-8 text.
pub(crate) fn read_source(format: FileFormat, path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::FileNotFound {
            format: format.label(),
            path: path.to_path_buf(),
        },
        ErrorKind::InvalidData => LoadError::Decode {
            path: path.to_path_buf(),
            message: "file is not valid UTF-8".to_string(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
