//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map LoadError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit code 2 is shared with clap's own usage errors.

use confval_config::LoadError;

/// Structured exit codes for confval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - the value was printed.
    Success = 0,

    /// General error - I/O failures and anything unclassified.
    GeneralError = 1,

    /// Usage error - unsupported format or malformed variable name.
    UsageError = 2,

    /// The configuration file does not exist.
    ///
    /// Scripts may fall back to another file or format.
    FileNotFound = 3,

    /// The file exists but does not define the variable.
    ///
    /// Scripts may fall back to a default value.
    VariableNotFound = 4,

    /// The file exists but could not be parsed.
    ///
    /// Scripts should fix the file rather than retry.
    DecodeError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&LoadError> for ExitCode {
    fn from(err: &LoadError) -> Self {
        match err {
            LoadError::FileNotFound { .. } => ExitCode::FileNotFound,
            LoadError::VariableNotFound { .. } => ExitCode::VariableNotFound,
            LoadError::Decode { .. } => ExitCode::DecodeError,
            LoadError::UnsupportedFormat(_) | LoadError::InvalidVariable { .. } => {
                ExitCode::UsageError
            }
            LoadError::Io { .. } => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no LoadError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<LoadError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
