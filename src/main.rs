//! model-registry CLI
//!
//! Command-line front end for the model registry.
//!
//! # Usage
//!
//! ```bash
//! # Register a model and a production version
//! model-registry model create bert --team nlp --tag transformer
//! model-registry version create 1 v1 --path s3://models/bert/v1 --stage production
//!
//! # Promote a newer version; v1 is archived in the same transaction
//! model-registry version promote 2 production
//!
//! # What is serving right now?
//! model-registry version latest bert --format json
//! ```

use clap::Parser;
use model_registry::cli::{init_tracing, run_command, Cli, LogLevel};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(LogLevel::from_flags(cli.verbose, cli.quiet));

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
