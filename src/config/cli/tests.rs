//! Tests for CLI argument parsing

use super::*;
use crate::storage::ModelStage;
use serde_json::json;
use std::path::PathBuf;

#[test]
fn test_parse_model_create() {
    let cli = parse_args([
        "model-registry",
        "model",
        "create",
        "bert",
        "--team",
        "nlp",
        "--tag",
        "transformer",
        "--tag",
        "encoder",
    ])
    .unwrap();

    match cli.command {
        Command::Model(ModelArgs { command: ModelCommand::Create(args) }) => {
            assert_eq!(args.name, "bert");
            assert_eq!(args.team, "nlp");
            assert_eq!(args.tags, vec!["transformer", "encoder"]);
            assert_eq!(args.description, None);
        }
        _ => panic!("Expected model create command"),
    }
}

#[test]
fn test_model_create_requires_team() {
    assert!(parse_args(["model-registry", "model", "create", "bert"]).is_err());
}

#[test]
fn test_parse_model_list_defaults() {
    let cli = parse_args(["model-registry", "model", "list"]).unwrap();
    match cli.command {
        Command::Model(ModelArgs { command: ModelCommand::List(args) }) => {
            assert_eq!(args.skip, 0);
            assert_eq!(args.limit, None);
            assert_eq!(args.team, None);
        }
        _ => panic!("Expected model list command"),
    }
}

#[test]
fn test_parse_model_update_clear_tags() {
    let cli = parse_args(["model-registry", "model", "update", "3", "--clear-tags"]).unwrap();
    match cli.command {
        Command::Model(ModelArgs { command: ModelCommand::Update(args) }) => {
            assert_eq!(args.id, 3);
            assert!(args.clear_tags);
            assert!(args.tags.is_empty());
        }
        _ => panic!("Expected model update command"),
    }
}

#[test]
fn test_clear_tags_conflicts_with_tag() {
    let result =
        parse_args(["model-registry", "model", "update", "3", "--tag", "a", "--clear-tags"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_version_create() {
    let cli = parse_args([
        "model-registry",
        "version",
        "create",
        "1",
        "v2",
        "--path",
        "s3://models/bert/v2",
        "--stage",
        "prod",
        "--metric",
        "accuracy=0.93",
        "--metric",
        "dataset=imdb",
    ])
    .unwrap();

    match cli.command {
        Command::Version(VersionArgs { command: VersionCommand::Create(args) }) => {
            assert_eq!(args.model_id, 1);
            assert_eq!(args.label, "v2");
            assert_eq!(args.stage, ModelStage::Production);
            assert_eq!(args.metrics.len(), 2);
            assert_eq!(args.metrics[0].value, json!(0.93));
            assert_eq!(args.metrics[1].value, json!("imdb"));
        }
        _ => panic!("Expected version create command"),
    }
}

#[test]
fn test_version_create_default_stage_is_staging() {
    let cli = parse_args(["model-registry", "version", "create", "1", "v1", "--path", "/m"]).unwrap();
    match cli.command {
        Command::Version(VersionArgs { command: VersionCommand::Create(args) }) => {
            assert_eq!(args.stage, ModelStage::Staging);
        }
        _ => panic!("Expected version create command"),
    }
}

#[test]
fn test_parse_version_promote() {
    let cli = parse_args(["model-registry", "version", "promote", "7", "archived"]).unwrap();
    match cli.command {
        Command::Version(VersionArgs { command: VersionCommand::Promote(args) }) => {
            assert_eq!(args.id, 7);
            assert_eq!(args.stage, ModelStage::Archived);
        }
        _ => panic!("Expected version promote command"),
    }
}

#[test]
fn test_promote_rejects_unknown_stage() {
    assert!(parse_args(["model-registry", "version", "promote", "7", "canary"]).is_err());
}

#[test]
fn test_parse_version_latest_defaults_to_production() {
    let cli = parse_args(["model-registry", "version", "latest", "bert"]).unwrap();
    match cli.command {
        Command::Version(VersionArgs { command: VersionCommand::Latest(args) }) => {
            assert_eq!(args.model, "bert");
            assert_eq!(args.stage, ModelStage::Production);
        }
        _ => panic!("Expected version latest command"),
    }
}

#[test]
fn test_version_metrics_requires_at_least_one() {
    assert!(parse_args(["model-registry", "version", "metrics", "7"]).is_err());
    assert!(parse_args(["model-registry", "version", "metrics", "7", "novalue"]).is_err());
}

#[test]
fn test_global_options_after_subcommand() {
    let cli = parse_args([
        "model-registry",
        "model",
        "get",
        "bert",
        "--db",
        "/tmp/r.db",
        "--format",
        "json",
        "-v",
    ])
    .unwrap();

    assert!(cli.verbose);
    assert_eq!(cli.db, Some(PathBuf::from("/tmp/r.db")));
    assert_eq!(cli.format, OutputFormat::Json);
    assert_eq!(cli.config, None);
}

#[test]
fn test_verbose_and_quiet_conflict() {
    assert!(parse_args(["model-registry", "-v", "-q", "model", "list"]).is_err());
}

#[test]
fn test_missing_subcommand() {
    assert!(parse_args(["model-registry"]).is_err());
}
