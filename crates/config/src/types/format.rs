//! Supported configuration file formats.

use std::fmt;
use std::str::FromStr;

use crate::constants::{DEFAULT_CUSTOM_FILE, DEFAULT_INI_FILE, DEFAULT_JSON_FILE};
use crate::loader::LoadError;

/// File format of a configuration source.
///
/// The format selects both the default file name and the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileFormat {
    /// `KEY=value` lines, as in a `.env` file.
    Env,
    /// Sectioned INI file.
    Ini,
    /// JSON document.
    Json,
    /// Line-oriented `key=value` dialect with brace-delimited lists.
    Custom,
}

impl FileFormat {
    pub const ALL: [FileFormat; 4] = [
        FileFormat::Env,
        FileFormat::Ini,
        FileFormat::Json,
        FileFormat::Custom,
    ];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            FileFormat::Env => "env",
            FileFormat::Ini => "ini",
            FileFormat::Json => "json",
            FileFormat::Custom => "custom",
        }
    }

    /// Human-facing label used in "file not found" messages.
    pub fn label(self) -> &'static str {
        match self {
            FileFormat::Env => "env",
            FileFormat::Ini => "INI",
            FileFormat::Json => "JSON",
            FileFormat::Custom => "Custom",
        }
    }

    /// Default file name for formats with a single fixed default.
    ///
    /// Env files are resolved from a candidate list instead, see
    /// [`crate::resolve_path`].
    pub fn default_file_name(self) -> Option<&'static str> {
        match self {
            FileFormat::Env => None,
            FileFormat::Ini => Some(DEFAULT_INI_FILE),
            FileFormat::Json => Some(DEFAULT_JSON_FILE),
            FileFormat::Custom => Some(DEFAULT_CUSTOM_FILE),
        }
    }
}

impl fmt::Display for FileFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileFormat {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "env" => Ok(FileFormat::Env),
            "ini" => Ok(FileFormat::Ini),
            "json" => Ok(FileFormat::Json),
            "custom" => Ok(FileFormat::Custom),
            _ => Err(LoadError::UnsupportedFormat(s.to_string())),
        }
    }
}
