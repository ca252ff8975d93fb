//! Tests for the configuration value loader.
//!
//! Responsibilities:
//! - Test end-to-end loads for every format through `ConfigValueLoader`.
//! - Test default path resolution against a real working directory.
//! - Test the repeated-key and missing-key policies.
//!
//! Does NOT handle:
//! - Reader internals (tested next to each reader).
//!
//! Invariants:
//! - Tests that change the working directory are `#[serial]` and restore it
//!   through `CwdGuard`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;


/// Write `content` to `name` inside `dir`, returning the full path.
pub fn write_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write fixture");
    path
}

/// RAII guard for temporarily changing the current working directory.
pub struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    pub fn new(dir: &Path) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(dir).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}
