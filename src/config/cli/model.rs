//! `model` subcommands

use clap::{Parser, Subcommand};

/// Arguments for the model command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelArgs {
    #[command(subcommand)]
    pub command: ModelCommand,
}

/// Model subcommands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum ModelCommand {
    /// Register a new model
    Create(ModelCreateArgs),

    /// Show a model by id or name
    Get(ModelGetArgs),

    /// List models, newest first
    List(ModelListArgs),

    /// Change a model's description or tags
    Update(ModelUpdateArgs),

    /// Delete a model and all of its versions
    Delete(ModelDeleteArgs),
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelCreateArgs {
    /// Unique model name
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Owning team
    #[arg(long)]
    pub team: String,

    #[arg(long)]
    pub description: Option<String>,

    /// Tag to attach (repeatable)
    #[arg(long = "tag", value_name = "TAG")]
    pub tags: Vec<String>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelGetArgs {
    /// Model id or name
    #[arg(value_name = "ID|NAME")]
    pub model: String,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelListArgs {
    /// Only models owned by this team
    #[arg(long)]
    pub team: Option<String>,

    /// Only models carrying this tag
    #[arg(long)]
    pub tag: Option<String>,

    /// Number of matching models to skip
    #[arg(long, default_value_t = 0)]
    pub skip: usize,

    /// Page size (defaults to the configured default_limit)
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelUpdateArgs {
    #[arg(value_name = "ID")]
    pub id: i64,

    #[arg(long)]
    pub description: Option<String>,

    /// Replacement tag set (repeatable)
    #[arg(long = "tag", value_name = "TAG", conflicts_with = "clear_tags")]
    pub tags: Vec<String>,

    /// Replace the tag set with an empty one
    #[arg(long)]
    pub clear_tags: bool,
}

#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ModelDeleteArgs {
    #[arg(value_name = "ID")]
    pub id: i64,
}
