//! Default file path resolution.
//!
//! Responsibilities:
//! - Pick the file to read for a format when no explicit path is given.
//! - Anchor relative paths on the loader's base directory, when one is set.
//!
//! Does NOT handle:
//! - Opening or reading files (see `source.rs`).
//!
//! Invariants:
//! - An explicit path always wins over format defaults.
//! - The only filesystem access is the existence check between env candidates.

use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_ENV_FILES, FALLBACK_ENV_FILE};
use crate::types::FileFormat;

/// Resolve the file to read for `format`.
///
/// Defaults:
/// - env: the first existing of `.env`, `config.env`, else `.env`
/// - ini: `config.ini`
/// - json: `config.json`
/// - custom: `config.con`
pub fn resolve_path(format: FileFormat, explicit: Option<&Path>, base_dir: Option<&Path>) -> PathBuf {
    if let Some(path) = explicit {
        return anchor(path, base_dir);
    }

    match format.default_file_name() {
        Some(name) => anchor(Path::new(name), base_dir),
        None => find_env_file(base_dir),
    }
}

fn find_env_file(base_dir: Option<&Path>) -> PathBuf {
    DEFAULT_ENV_FILES
        .iter()
        .map(|name| anchor(Path::new(name), base_dir))
        .find(|candidate| candidate.exists())
        .unwrap_or_else(|| anchor(Path::new(FALLBACK_ENV_FILE), base_dir))
}

fn anchor(path: &Path, base_dir: Option<&Path>) -> PathBuf {
    match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}
