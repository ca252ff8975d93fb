//! Command dispatch and execution.
//!
//! Responsibilities:
//! - Build a `ConfigValueLoader` from parsed arguments.
//! - Run the selected command and print its output to stdout.
//!
//! Does NOT handle:
//! - Exit code selection (see `error` module).

use anyhow::Result;
use confval_config::{ConfigValueLoader, RepeatedKeyPolicy};

use crate::args::{Cli, Commands, SourceArgs};
use crate::formatters::{format_document, format_value};

/// Execute the parsed command.
pub fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Get {
            variable,
            source,
            output,
            missing_key,
            repeated_key,
        } => {
            let loader = build_loader(&source, repeated_key.into())
                .with_missing_key_policy(missing_key.into());
            let value = loader.load(&variable, source.format, source.file.as_deref())?;
            println!("{}", format_value(&value, output)?);
        }
        Commands::Dump {
            source,
            repeated_key,
        } => {
            let loader = build_loader(&source, repeated_key.into());
            let document = loader.parse_file(source.format, source.file.as_deref())?;
            println!("{}", format_document(&document)?);
        }
    }
    Ok(())
}

fn build_loader(source: &SourceArgs, repeated_key: RepeatedKeyPolicy) -> ConfigValueLoader {
    let loader = ConfigValueLoader::new().with_repeated_key_policy(repeated_key);
    match &source.dir {
        Some(dir) => {
            tracing::debug!(dir = %dir.display(), "Resolving paths against base directory");
            loader.with_base_dir(dir)
        }
        None => loader,
    }
}
