//! Configuration: YAML settings file plus command-line definition

pub mod cli;
mod error;
mod settings;

pub use cli::{parse_args, Cli, Command, OutputFormat};
pub use error::{ConfigError, Result};
pub use settings::{RegistryConfig, DB_ENV_VAR};
