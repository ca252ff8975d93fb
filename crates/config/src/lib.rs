//! Configuration value loading for confval.
//!
//! This crate looks up a single variable in an env, INI, JSON, or custom
//! brace/list configuration file and returns it as a typed [`Value`].
//!
//! ```no_run
//! use confval_config::{ConfigValueLoader, FileFormat};
//!
//! let loader = ConfigValueLoader::new();
//! let host = loader.load("database.host", FileFormat::Json, None)?;
//! println!("{host}");
//! # Ok::<(), confval_config::LoadError>(())
//! ```

pub mod constants;
mod loader;
pub mod types;

pub use loader::custom::{CustomParseError, classify_scalar, parse_custom};
pub use loader::{
    ConfigValueLoader, LoadError, MissingKeyPolicy, RepeatedKeyPolicy, Result, load,
    resolve_path,
};
pub use types::{FileFormat, Mapping, Value, VariablePath};
