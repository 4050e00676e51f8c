//! CLI command implementations

mod models;
mod output;
mod versions;


use std::io::Write;

use super::{CliError, LogLevel};
use crate::config::{Cli, Command, OutputFormat, RegistryConfig};
use crate::storage::ModelRegistry;

/// Execute a CLI command against the configured SQLite registry
pub fn run_command(cli: Cli) -> Result<(), CliError> {
    let log_level = LogLevel::from_flags(cli.verbose, cli.quiet);

    let config = RegistryConfig::resolve(cli.config.as_deref(), cli.db.as_deref())?;
    tracing::debug!(database = %config.database.display(), "opening registry");
    let registry = config.open_registry()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    execute(&registry, &config, cli.command, cli.format, log_level, &mut out)
}

/// Run one command against any registry backend, writing results to `out`
pub fn execute<R, W>(
    registry: &R,
    config: &RegistryConfig,
    command: Command,
    format: OutputFormat,
    log_level: LogLevel,
    out: &mut W,
) -> Result<(), CliError>
where
    R: ModelRegistry + ?Sized,
    W: Write,
{
    let ctx = output::Context { config, format, log_level };
    match command {
        Command::Model(args) => models::run_model(registry, args.command, &ctx, out),
        Command::Version(args) => versions::run_version(registry, args.command, &ctx, out),
    }
}
