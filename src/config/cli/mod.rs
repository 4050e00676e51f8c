//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! model-registry model create bert --team nlp --tag transformer
//! model-registry version create 1 v1 --path s3://models/bert/v1 --metric accuracy=0.91
//! model-registry version promote 1 production
//! model-registry version latest bert --stage production --format json
//! ```

mod core;
mod model;
mod types;
mod version;

pub use self::core::{parse_args, Cli, Command};
pub use model::{
    ModelArgs, ModelCommand, ModelCreateArgs, ModelDeleteArgs, ModelGetArgs, ModelListArgs,
    ModelUpdateArgs,
};
pub use types::{MetricArg, OutputFormat};
pub use version::{
    VersionArgs, VersionCommand, VersionCreateArgs, VersionDeleteArgs, VersionGetArgs,
    VersionLatestArgs, VersionListArgs, VersionMetricsArgs, VersionPromoteArgs,
};

#[cfg(test)]
mod tests;
