//! Configuration value loader for env, INI, JSON, and custom files.
//!
//! Responsibilities:
//! - Resolve the file to read from a format and an optional explicit path.
//! - Dispatch to one format reader and return the requested value.
//! - Surface a small, typed error taxonomy (`LoadError`).
//!
//! Does NOT handle:
//! - Writing configuration back to disk.
//! - Watching files or merging several files.
//!
//! Invariants / Assumptions:
//! - Each call opens at most one file, reads it to completion, and closes it.
//! - A missing file is reported before any parse attempt.
//! - Calls share no mutable state and are safe to issue from several threads.

mod builder;
pub(crate) mod custom;
mod env;
mod error;
mod ini;
mod json;
mod resolve;
mod source;

#[cfg(test)]
mod tests;

pub use builder::{ConfigValueLoader, MissingKeyPolicy, load};
pub use custom::RepeatedKeyPolicy;
pub use error::{LoadError, Result};
pub use resolve::resolve_path;
