//! CLI module for model-registry
//!
//! Command handlers, output rendering and logging setup.

mod commands;
mod logging;

use thiserror::Error;

use crate::config::ConfigError;
use crate::storage::{RegistryError, StorageError};

pub use commands::{execute, run_command};
pub use logging::{init_tracing, log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;

/// Errors surfaced to the command-line user
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to open registry: {0}")]
    Storage(#[from] StorageError),

    #[error("Serialization failed: {0}")]
    Serialize(String),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code: 2 for missing models/versions, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Registry(e) if e.is_not_found() => 2,
            _ => 1,
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize(e.to_string())
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(e: serde_yaml::Error) -> Self {
        CliError::Serialize(e.to_string())
    }
}
