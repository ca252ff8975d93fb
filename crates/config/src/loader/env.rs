//! Env-format (`KEY=value`) reader.
//!
//! Responsibilities:
//! - Split each entry line at the first `=` into a key and a value.
//! - Look up a variable by exact key match.
//!
//! Does NOT handle:
//! - Modifying the process environment. Entries are read, never exported.
//! - Variable expansion, quote stripping, or inline comments. Values are
//!   returned exactly as written after the first `=`.
//! - Dot-path traversal: env keys are flat, so the full name is the key.
//!
//! Invariants:
//! - Blank lines and lines starting with `#` are skipped.
//! - A line without `=`, or with an empty key, is a `Decode` error, not skipped.
//! - The first entry whose key matches wins; reading stops there.
//! - Decode errors only include the line number, NOT the line content, to
//!   prevent leaking secrets.
//! - The result depends only on the file contents, never on the process
//!   environment.

use std::path::Path;

use super::error::{LoadError, Result};
use crate::types::{Mapping, Value, VariablePath};

/// Return the value of the first entry whose key equals `variable`.
pub(crate) fn lookup(content: &str, variable: &VariablePath, path: &Path) -> Result<Value> {
    for entry in entries(content) {
        let (key, value) = entry.map_err(|line| decode_error(line, path))?;
        if key == variable.as_str() {
            return Ok(Value::from(value));
        }
    }

    Err(LoadError::VariableNotFound {
        variable: variable.to_string(),
        path: path.to_path_buf(),
    })
}

/// Parse every entry. Later duplicates replace earlier ones.
pub(crate) fn parse_all(content: &str, path: &Path) -> Result<Value> {
    let mut map = Mapping::new();
    for entry in entries(content) {
        let (key, value) = entry.map_err(|line| decode_error(line, path))?;
        map.insert(key.to_string(), Value::from(value));
    }
    Ok(Value::Map(map))
}

/// Entries in file order. A malformed line yields its 1-based number.
fn entries(content: &str) -> impl Iterator<Item = std::result::Result<(&str, &str), usize>> {
    content
        .lines()
        .enumerate()
        .map(|(index, raw)| (index + 1, raw.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(number, line)| match line.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value.trim())),
            _ => Err(number),
        })
}

fn decode_error(line: usize, path: &Path) -> LoadError {
    LoadError::Decode {
        path: path.to_path_buf(),
        message: format!("line {line} is not a KEY=value entry"),
    }
}
