//! Core CLI types - Cli, Command, and global options

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::model::ModelArgs;
use super::types::OutputFormat;
use super::version::VersionArgs;

/// Model registry: track models, their versions and deployment stages
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "model-registry")]
#[command(version)]
#[command(about = "Catalog of ML models and their versions with staging/production/archived lifecycle")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// SQLite database file (overrides config file and MODEL_REGISTRY_DB)
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// YAML configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format (text, json, yaml)
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Create, inspect and list registered models
    Model(ModelArgs),

    /// Register versions and move them through stages
    Version(VersionArgs),
}

/// Parse command line arguments
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}
