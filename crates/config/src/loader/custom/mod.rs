//! Custom-format reader: a line-oriented `key=value` dialect with
//! brace-delimited lists.
//!
//! Responsibilities:
//! - Tokenize and parse the dialect into a [`Mapping`].
//! - Apply the repeated-key policy when a key is assigned twice.
//!
//! Does NOT handle:
//! - Missing-key behavior during lookup (see `MissingKeyPolicy` in `builder.rs`).
//!
//! Grammar, one entry per line:
//! - Blank lines and lines starting with `#` are skipped.
//! - `key=value` splits at the first `=`; both sides are trimmed. This applies
//!   to any line with `=` that is not wrapped in braces, even one starting with `{`.
//! - `key={a, b, c}` assigns a list of scalars; `{}` is an empty list.
//! - `{a=1, flag}` (no key) merges each item into the top-level mapping as if
//!   it were its own line.
//! - Any other line is a presence-only key with a `Null` value.
//! - Dotted keys (`db.host=x`) build nested mappings.
//!
//! Invariants:
//! - A mapping is never replaced by, or merged with, a non-mapping value.
//! - Error messages name the line number and the key, never the raw value.

mod scalar;

pub use scalar::classify_scalar;

use std::collections::btree_map::Entry;

use thiserror::Error;

use crate::constants::{CUSTOM_COMMENT_PREFIX, PATH_SEPARATOR};
use crate::types::{Mapping, Value};

/// A syntax error in a custom-format document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {message}")]
pub struct CustomParseError {
    /// 1-based line number.
    pub line: usize,
    pub message: String,
}

/// What happens when a key is assigned more than once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RepeatedKeyPolicy {
    /// Collect every assignment into a list: `n=1`, `n=2` gives `[1, 2]`.
    /// List values are flattened into the collected list.
    #[default]
    Accumulate,
    /// The last assignment wins.
    Overwrite,
}

/// Parse a custom-format document.
pub fn parse_custom(
    content: &str,
    policy: RepeatedKeyPolicy,
) -> Result<Mapping, CustomParseError> {
    let mut parser = Parser {
        root: Mapping::new(),
        policy,
        line: 0,
    };
    for (index, raw) in content.lines().enumerate() {
        parser.line = index + 1;
        parser.parse_line(raw.trim())?;
    }
    Ok(parser.root)
}

struct Parser {
    root: Mapping,
    policy: RepeatedKeyPolicy,
    line: usize,
}

impl Parser {
    fn parse_line(&mut self, line: &str) -> Result<(), CustomParseError> {
        if line.is_empty() || line.starts_with(CUSTOM_COMMENT_PREFIX) {
            return Ok(());
        }

        if let Some(inner) = braced(line) {
            return self.merge_items(inner);
        }

        match line.split_once('=') {
            Some((key, raw_value)) => {
                let value = self.parse_value(raw_value.trim())?;
                self.assign(key.trim(), value)
            }
            None if line.starts_with('{') => Err(self.error("unterminated '{'")),
            None => self.assign(line, Value::Null),
        }
    }

    fn parse_value(&self, raw: &str) -> Result<Value, CustomParseError> {
        if !raw.starts_with('{') {
            return Ok(classify_scalar(raw));
        }
        let inner = braced(raw).ok_or_else(|| self.error("unterminated '{' in value"))?;
        if inner.trim().is_empty() {
            return Ok(Value::List(Vec::new()));
        }
        inner
            .split(',')
            .map(|item| self.list_item(item.trim()).map(classify_scalar))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::List)
    }

    /// Known edge case: the meaning of a keyless brace line is provisional.
    /// Items are merged as independent entries.
    fn merge_items(&mut self, inner: &str) -> Result<(), CustomParseError> {
        for item in inner.split(',') {
            let item = self.list_item(item.trim())?;
            if item.is_empty() {
                continue;
            }
            match item.split_once('=') {
                Some((key, raw_value)) => {
                    self.assign(key.trim(), classify_scalar(raw_value.trim()))?
                }
                None => self.assign(item, Value::Null)?,
            }
        }
        Ok(())
    }

    fn list_item<'a>(&self, item: &'a str) -> Result<&'a str, CustomParseError> {
        if item.contains(['{', '}']) {
            return Err(self.error("nested braces are not supported in lists"));
        }
        Ok(item)
    }

    fn assign(&mut self, key: &str, value: Value) -> Result<(), CustomParseError> {
        if key.is_empty() {
            return Err(self.error("missing key before '='"));
        }
        if key.split(PATH_SEPARATOR).any(str::is_empty) {
            return Err(self.error(format!("key '{key}' has an empty segment")));
        }

        let line = self.line;
        let conflict = || CustomParseError {
            line,
            message: format!("key '{key}' conflicts with an existing value"),
        };

        let mut segments: Vec<&str> = key.split(PATH_SEPARATOR).collect();
        let last = segments.pop().unwrap_or(key);

        let mut map = &mut self.root;
        for segment in segments {
            let node = map
                .entry(segment.to_string())
                .or_insert_with(|| Value::Map(Mapping::new()));
            map = match node {
                Value::Map(inner) => inner,
                _ => return Err(conflict()),
            };
        }

        match map.entry(last.to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(value);
            }
            Entry::Occupied(mut slot) => {
                if matches!(slot.get(), Value::Map(_)) {
                    return Err(conflict());
                }
                match self.policy {
                    RepeatedKeyPolicy::Overwrite => {
                        slot.insert(value);
                    }
                    RepeatedKeyPolicy::Accumulate => accumulate(slot.get_mut(), value),
                }
            }
        }
        Ok(())
    }

    fn error(&self, message: impl Into<String>) -> CustomParseError {
        CustomParseError {
            line: self.line,
            message: message.into(),
        }
    }
}

/// Inner text of `{...}`, if `text` is wrapped in braces.
fn braced(text: &str) -> Option<&str> {
    text.strip_prefix('{')?.strip_suffix('}')
}

fn accumulate(slot: &mut Value, value: Value) {
    let mut items = match std::mem::replace(slot, Value::Null) {
        Value::List(items) => items,
        previous => vec![previous],
    };
    match value {
        Value::List(more) => items.extend(more),
        other => items.push(other),
    }
    *slot = Value::List(items);
}
