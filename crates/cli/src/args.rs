//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map CLI-level enums onto the loader's policy types.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not render values (see `formatters` module).

use clap::{Args, Parser, Subcommand, ValueEnum};
use confval_config::{FileFormat, MissingKeyPolicy, RepeatedKeyPolicy};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "confval")]
#[command(about = "Read a single value from env, INI, JSON, or custom config files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  confval get DATABASE_URL\n  confval get database.host --format json\n  confval get section1.option1 -f ini --file settings.ini\n  confval get ports -f custom --repeated-key overwrite\n  confval dump -f custom --dir /etc/myapp\n"
)]
pub struct Cli {
    /// Log debug details to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of one variable
    Get {
        /// Variable name; dots navigate nested sections (e.g. database.host)
        variable: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Output format for the value
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,

        /// What to do when a custom-format variable is missing
        #[arg(long, value_enum, default_value_t = MissingKey::Error)]
        missing_key: MissingKey,

        /// What to do when a custom-format key is assigned twice
        #[arg(long, value_enum, default_value_t = RepeatedKey::Accumulate)]
        repeated_key: RepeatedKey,
    },

    /// Print the whole parsed file as JSON
    Dump {
        #[command(flatten)]
        source: SourceArgs,

        /// What to do when a custom-format key is assigned twice
        #[arg(long, value_enum, default_value_t = RepeatedKey::Accumulate)]
        repeated_key: RepeatedKey,
    },
}

/// Where to read configuration from.
#[derive(Args)]
pub struct SourceArgs {
    /// File format: env, ini, json, or custom
    #[arg(short, long, env = "CONFVAL_FORMAT", default_value = "env")]
    pub format: FileFormat,

    /// Explicit file to read instead of the format's default
    #[arg(long, env = "CONFVAL_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Directory that default and relative paths are resolved against
    #[arg(long, env = "CONFVAL_DIR", value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Strings raw, lists and mappings as JSON
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MissingKey {
    /// Fail with exit code 4
    Error,
    /// Warn on stderr and print null
    Warn,
}

impl From<MissingKey> for MissingKeyPolicy {
    fn from(value: MissingKey) -> Self {
        match value {
            MissingKey::Error => MissingKeyPolicy::Error,
            MissingKey::Warn => MissingKeyPolicy::Warn,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RepeatedKey {
    /// Collect repeated assignments into a list
    Accumulate,
    /// Keep the last assignment
    Overwrite,
}

impl From<RepeatedKey> for RepeatedKeyPolicy {
    fn from(value: RepeatedKey) -> Self {
        match value {
            RepeatedKey::Accumulate => RepeatedKeyPolicy::Accumulate,
            RepeatedKey::Overwrite => RepeatedKeyPolicy::Overwrite,
        }
    }
}
