//! Configuration value loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigValueLoader` carrying the lookup policies.
//! - Resolve the file path, read it once, and dispatch to the format reader.
//!
//! Does NOT handle:
//! - Format-specific parsing (delegated to env.rs, ini.rs, json.rs, custom/).
//! - Default path rules (delegated to resolve.rs).
//!
//! Invariants / Assumptions:
//! - Every call re-reads and re-parses the file; nothing is cached.
//! - The variable name is validated before any filesystem access.
//! - `MissingKeyPolicy` only affects custom-format lookups.

use std::path::{Path, PathBuf};

use super::custom::{RepeatedKeyPolicy, parse_custom};
use super::error::{LoadError, Result};
use super::resolve::resolve_path;
use super::source::read_source;
use super::{env, ini, json};
use crate::types::{FileFormat, Value, VariablePath};

/// What a custom-format lookup does when the variable is absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingKeyPolicy {
    /// Fail with `LoadError::VariableNotFound`.
    #[default]
    Error,
    /// Log a warning and return `Value::Null`.
    Warn,
}

/// Loads single configuration values from env, INI, JSON, or custom files.
#[derive(Debug, Clone, Default)]
pub struct ConfigValueLoader {
    base_dir: Option<PathBuf>,
    repeated_key: RepeatedKeyPolicy,
    missing_key: MissingKeyPolicy,
}

impl ConfigValueLoader {
    /// Create a loader with default policies, resolving paths against the
    /// current working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve default and relative paths against `dir` instead of the
    /// current working directory.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    pub fn with_repeated_key_policy(mut self, policy: RepeatedKeyPolicy) -> Self {
        self.repeated_key = policy;
        self
    }

    pub fn with_missing_key_policy(mut self, policy: MissingKeyPolicy) -> Self {
        self.missing_key = policy;
        self
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    pub fn repeated_key_policy(&self) -> RepeatedKeyPolicy {
        self.repeated_key
    }

    pub fn missing_key_policy(&self) -> MissingKeyPolicy {
        self.missing_key
    }

    /// The path a call with these arguments would read.
    pub fn resolve(&self, format: FileFormat, path: Option<&Path>) -> PathBuf {
        resolve_path(format, path, self.base_dir())
    }

    /// Load `variable` from the file for `format`.
    ///
    /// When `path` is `None` the format's default file is used.
    pub fn load(&self, variable: &str, format: FileFormat, path: Option<&Path>) -> Result<Value> {
        let variable = VariablePath::parse(variable)?;
        let path = self.resolve(format, path);
        tracing::debug!(
            variable = %variable,
            format = %format,
            path = %path.display(),
            "Loading configuration value"
        );

        let content = read_source(format, &path)?;
        let value = match format {
            FileFormat::Env => env::lookup(&content, &variable, &path),
            FileFormat::Ini => ini::lookup(&content, &variable, &path),
            FileFormat::Json => json::lookup(&content, &variable, &path),
            FileFormat::Custom => self.lookup_custom(&content, &variable, &path),
        }?;
        tracing::debug!(variable = %variable, kind = value.type_name(), "Loaded configuration value");
        Ok(value)
    }

    /// Parse the whole file for `format` into a `Value::Map`.
    pub fn parse_file(&self, format: FileFormat, path: Option<&Path>) -> Result<Value> {
        let path = self.resolve(format, path);
        tracing::debug!(format = %format, path = %path.display(), "Parsing configuration file");

        let content = read_source(format, &path)?;
        match format {
            FileFormat::Env => env::parse_all(&content, &path),
            FileFormat::Ini => ini::parse_all(&content, &path),
            FileFormat::Json => json::parse_all(&content, &path),
            FileFormat::Custom => self.parse_custom_file(&content, &path),
        }
    }

    fn parse_custom_file(&self, content: &str, path: &Path) -> Result<Value> {
        parse_custom(content, self.repeated_key)
            .map(Value::Map)
            .map_err(|e| LoadError::Decode {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
    }

    fn lookup_custom(&self, content: &str, variable: &VariablePath, path: &Path) -> Result<Value> {
        let document = self.parse_custom_file(content, path)?;
        if let Some(value) = document.get_path(variable) {
            return Ok(value.clone());
        }

        match self.missing_key {
            MissingKeyPolicy::Error => Err(LoadError::VariableNotFound {
                variable: variable.to_string(),
                path: path.to_path_buf(),
            }),
            MissingKeyPolicy::Warn => {
                tracing::warn!(
                    variable = %variable,
                    path = %path.display(),
                    "Variable not found, returning null"
                );
                Ok(Value::Null)
            }
        }
    }
}

/// Load `variable` with a default [`ConfigValueLoader`].
pub fn load(variable: &str, format: FileFormat, path: Option<&Path>) -> Result<Value> {
    ConfigValueLoader::new().load(variable, format, path)
}
