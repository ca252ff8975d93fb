//! Output rendering for loaded values.

use anyhow::Result;
use confval_config::Value;

use crate::args::OutputFormat;

/// Render a single value for `get`.
pub fn format_value(value: &Value, output: OutputFormat) -> Result<String> {
    match output {
        OutputFormat::Text => Ok(value.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
    }
}

/// Render a whole parsed file for `dump`.
pub fn format_document(document: &Value) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_strings_are_unquoted() {
        let value = Value::from("postgres://localhost");
        assert_eq!(
            format_value(&value, OutputFormat::Text).unwrap(),
            "postgres://localhost"
        );
    }

    #[test]
    fn test_json_strings_are_quoted() {
        let value = Value::from("db1");
        assert_eq!(format_value(&value, OutputFormat::Json).unwrap(), "\"db1\"");
    }

    #[test]
    fn test_text_lists_are_compact_json() {
        let value = Value::List(vec![Value::Integer(1), Value::Integer(2)]);
        assert_eq!(format_value(&value, OutputFormat::Text).unwrap(), "[1,2]");
    }

    #[test]
    fn test_document_is_pretty() {
        let value = Value::List(vec![Value::Bool(true)]);
        assert_eq!(format_document(&value).unwrap(), "[\n  true\n]");
    }
}
