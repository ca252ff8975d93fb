//! Integration tests for structured exit codes.
//!
//! These tests verify that confval returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::{confval_cmd, write_fixture};
use predicates::prelude::*;
use tempfile::TempDir;

/// Test that successful lookups return exit code 0.
#[test]
fn test_success_returns_exit_code_0() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), ".env", "KEY=value\n");

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "KEY"])
        .assert()
        .code(0);
}

/// Test that unsupported formats are usage errors.
#[test]
fn test_unsupported_format_returns_exit_code_2() {
    confval_cmd()
        .args(["get", "KEY", "-f", "yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unsupported file format 'yaml'"));
}

/// Test that malformed variable names are usage errors.
#[test]
fn test_invalid_variable_returns_exit_code_2() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.json", "{}");

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "a..b", "-f", "json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid variable name"));
}

/// Test that a missing file returns exit code 3.
#[test]
fn test_missing_file_returns_exit_code_3() {
    let dir = TempDir::new().unwrap();

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "KEY", "-f", "ini"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("INI file not found"));
}

/// Test that a missing variable returns exit code 4.
#[test]
fn test_missing_variable_returns_exit_code_4() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.json", r#"{"a": 1}"#);

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "b", "-f", "json"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Variable 'b' not found"));
}

/// Test that an unparseable file returns exit code 5.
#[test]
fn test_malformed_json_returns_exit_code_5() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), "config.json", "{not json");

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "a", "-f", "json"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Error decoding"));
}

/// Test that env decode errors never echo the offending line.
#[test]
fn test_malformed_env_does_not_leak_contents() {
    let dir = TempDir::new().unwrap();
    write_fixture(dir.path(), ".env", "SECRET_TOKEN_WITHOUT_EQUALS\n");

    confval_cmd()
        .current_dir(dir.path())
        .args(["get", "KEY"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("SECRET_TOKEN").not());
}

/// Test that a missing subcommand is rejected by clap with exit code 2.
#[test]
fn test_missing_subcommand_returns_exit_code_2() {
    confval_cmd().assert().code(2);
}
