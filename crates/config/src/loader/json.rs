//! JSON-format reader.
//!
//! Responsibilities:
//! - Decode the whole file with `serde_json`.
//! - Walk dot-separated segments through nested objects.
//!
//! Invariants:
//! - A walk that reaches a non-object before its last segment is a
//!   `VariableNotFound`, never a type error.
//! - Decode errors carry line and column only.

use std::path::Path;

use super::error::{LoadError, Result};
use crate::types::{Value, VariablePath};

pub(crate) fn lookup(content: &str, variable: &VariablePath, path: &Path) -> Result<Value> {
    let document = parse_all(content, path)?;
    document
        .get_path(variable)
        .cloned()
        .ok_or_else(|| LoadError::VariableNotFound {
            variable: variable.to_string(),
            path: path.to_path_buf(),
        })
}

pub(crate) fn parse_all(content: &str, path: &Path) -> Result<Value> {
    serde_json::from_str::<serde_json::Value>(content)
        .map(Value::from)
        .map_err(|e| LoadError::Decode {
            path: path.to_path_buf(),
            message: format!("invalid JSON at line {}, column {}", e.line(), e.column()),
        })
}
