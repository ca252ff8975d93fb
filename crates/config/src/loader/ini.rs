//! INI-format reader.
//!
//! Responsibilities:
//! - Parse INI text with `rust-ini` into sections of string options.
//! - Resolve `section` and `section.option` variable names.
//!
//! Does NOT handle:
//! - Typed values. INI values are untyped text and are returned as strings.
//! - Lookups deeper than one option: segments after `section.option` are
//!   ignored.
//!
//! Invariants:
//! - Section names match case-sensitively; option names case-insensitively.
//! - Quote and escape processing is disabled so values are returned verbatim.

use std::path::Path;

use ini::{Ini, ParseOption, Properties};

use super::error::{LoadError, Result};
use crate::types::{Mapping, Value, VariablePath};

/// Resolve `variable` against the INI document in `content`.
pub(crate) fn lookup(content: &str, variable: &VariablePath, path: &Path) -> Result<Value> {
    let document = parse(content, path)?;
    let not_found = || LoadError::VariableNotFound {
        variable: variable.to_string(),
        path: path.to_path_buf(),
    };

    let section = document.section(Some(variable.first())).ok_or_else(not_found)?;

    let Some(option) = variable.rest().next() else {
        return Ok(section_to_value(section));
    };
    if variable.depth() > 2 {
        tracing::debug!(
            variable = %variable,
            "INI lookup ignores segments after section.option"
        );
    }

    section
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(option))
        .map(|(_, value)| Value::String(value.to_string()))
        .ok_or_else(not_found)
}

/// Parse the whole document as a mapping of sections.
///
/// Options outside any section are skipped.
pub(crate) fn parse_all(content: &str, path: &Path) -> Result<Value> {
    let document = parse(content, path)?;
    let mut map = Mapping::new();
    for (name, section) in document.iter() {
        match name {
            Some(name) => {
                map.insert(name.to_string(), section_to_value(section));
            }
            None if !section.is_empty() => {
                tracing::debug!(
                    path = %path.display(),
                    "Skipping INI options declared before the first section"
                );
            }
            None => {}
        }
    }
    Ok(Value::Map(map))
}

fn parse(content: &str, path: &Path) -> Result<Ini> {
    let options = ParseOption {
        enabled_quote: false,
        enabled_escape: false,
        ..ParseOption::default()
    };
    Ini::load_from_str_opt(content, options).map_err(|e| LoadError::Decode {
        path: path.to_path_buf(),
        message: format!("invalid INI syntax at line {}, column {}", e.line, e.col),
    })
}

fn section_to_value(section: &Properties) -> Value {
    Value::Map(
        section
            .iter()
            .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
            .collect(),
    )
}
