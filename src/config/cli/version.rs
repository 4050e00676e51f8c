//! `version` subcommands

use clap::{Parser, Subcommand};

use super::types::MetricArg;
use crate::storage::ModelStage;

/// Arguments for the version command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionArgs {
    #[command(subcommand)]
    pub command: VersionCommand,
}

/// Version subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum VersionCommand {
    /// Register a version of a model
    Create(VersionCreateArgs),

    /// Show a version by id
    Get(VersionGetArgs),

    /// List a model's versions, newest first
    List(VersionListArgs),

    /// Show the newest version of a model in a stage
    Latest(VersionLatestArgs),

    /// Move a version to another stage
    Promote(VersionPromoteArgs),

    /// Merge metrics into a version
    Metrics(VersionMetricsArgs),

    /// Delete a single version
    Delete(VersionDeleteArgs),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionCreateArgs {
    /// Owning model id
    #[arg(value_name = "MODEL_ID")]
    pub model_id: i64,

    /// Version label, e.g. v1 or 2024-05-01
    #[arg(value_name = "LABEL")]
    pub label: String,

    /// Artifact location
    #[arg(long)]
    pub path: String,

    /// Initial stage
    #[arg(long, default_value = "staging")]
    pub stage: ModelStage,

    /// Metric as key=value (repeatable)
    #[arg(long = "metric", value_name = "KEY=VALUE")]
    pub metrics: Vec<MetricArg>,

    /// Tag to attach (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,

    #[arg(long)]
    pub description: Option<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionGetArgs {
    #[arg(value_name = "ID")]
    pub id: i64,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionListArgs {
    #[arg(value_name = "MODEL_ID")]
    pub model_id: i64,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionLatestArgs {
    /// Model id or name
    #[arg(value_name = "ID|NAME")]
    pub model: String,

    #[arg(long, default_value = "production")]
    pub stage: ModelStage,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionPromoteArgs {
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Target stage (staging, production, archived)
    #[arg(value_name = "STAGE")]
    pub stage: ModelStage,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionMetricsArgs {
    #[arg(value_name = "ID")]
    pub id: i64,

    /// Metrics as key=value
    #[arg(value_name = "KEY=VALUE", required = true)]
    pub metrics: Vec<MetricArg>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct VersionDeleteArgs {
    #[arg(value_name = "ID")]
    pub id: i64,
}
