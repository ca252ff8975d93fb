//! Centralized constants for the confval workspace.
//!
//! This module contains default file names and literals shared by the
//! path resolver, the format readers, and the CLI.

// =============================================================================
// Default File Locations
// =============================================================================

/// Candidate env files, checked in order. The first one that exists wins.
pub const DEFAULT_ENV_FILES: &[&str] = &[".env", "config.env"];

/// Env file used when none of [`DEFAULT_ENV_FILES`] exists.
pub const FALLBACK_ENV_FILE: &str = ".env";

/// Default INI file name.
pub const DEFAULT_INI_FILE: &str = "config.ini";

/// Default JSON file name.
pub const DEFAULT_JSON_FILE: &str = "config.json";

/// Default custom-format file name.
pub const DEFAULT_CUSTOM_FILE: &str = "config.con";

// =============================================================================
// Syntax
// =============================================================================

/// Separator between segments of a variable name.
pub const PATH_SEPARATOR: char = '.';

/// Line prefix that marks a comment in the custom format.
pub const CUSTOM_COMMENT_PREFIX: char = '#';

/// Supported format names, in the order they are listed to users.
pub const SUPPORTED_FORMATS: &[&str] = &["env", "ini", "json", "custom"];
