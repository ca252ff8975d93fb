//! Shared test utilities for confval integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that ignores host configuration.
//! - Write fixture files into temp directories.
//!
//! Invariants / Assumptions:
//! - `CONFVAL_*` and `RUST_LOG` are always cleared so the host cannot change defaults.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};

/// Returns a hermetic `confval` command for integration testing.
pub fn confval_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("confval");

    // Clear potential host leakage
    cmd.env_remove("CONFVAL_FORMAT")
        .env_remove("CONFVAL_FILE")
        .env_remove("CONFVAL_DIR")
        .env_remove("RUST_LOG");

    cmd
}

/// Write `content` to `dir/name` and return the full path.
#[allow(dead_code)]
pub fn write_fixture(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
