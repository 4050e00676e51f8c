//! Rendering of command results.

use serde::Serialize;
use std::io::{self, Write};

use crate::cli::{CliError, LogLevel};
use crate::config::{OutputFormat, RegistryConfig};
use crate::storage::{Model, ModelVersion};

pub(super) const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings shared by every handler
pub(super) struct Context<'a> {
    pub config: &'a RegistryConfig,
    pub format: OutputFormat,
    pub log_level: LogLevel,
}

/// Write `value` as JSON or YAML, or hand off to `text` for the table view
pub(super) fn emit<T, W, F>(out: &mut W, format: OutputFormat, value: &T, text: F) -> Result<(), CliError>
where
    T: Serialize + ?Sized,
    W: Write,
    F: FnOnce(&mut W) -> io::Result<()>,
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            writeln!(out, "{json}")?;
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value)?;
            write!(out, "{yaml}")?;
        }
        OutputFormat::Text => text(out)?,
    }
    Ok(())
}

pub(super) fn model_table<W: Write>(out: &mut W, models: &[Model]) -> io::Result<()> {
    writeln!(out, "{:<8} {:<28} {:<16} {:<30} {:<20}", "ID", "NAME", "TEAM", "TAGS", "CREATED")?;
    writeln!(out, "{}", "-".repeat(104))?;
    for model in models {
        writeln!(
            out,
            "{:<8} {:<28} {:<16} {:<30} {:<20}",
            model.id,
            truncate(&model.name, 26),
            truncate(&model.team, 14),
            truncate(&model.tags.join(","), 28),
            model.created_at.format(TIME_FORMAT),
        )?;
    }
    Ok(())
}

pub(super) fn model_detail<W: Write>(out: &mut W, model: &Model) -> io::Result<()> {
    writeln!(out, "Model: {}", model.name)?;
    writeln!(out, "  ID:      {}", model.id)?;
    writeln!(out, "  Team:    {}", model.team)?;
    if let Some(desc) = &model.description {
        writeln!(out, "  Desc:    {desc}")?;
    }
    if !model.tags.is_empty() {
        writeln!(out, "  Tags:    {}", model.tags.join(", "))?;
    }
    writeln!(out, "  Created: {}", model.created_at.format(TIME_FORMAT))?;
    writeln!(out, "  Updated: {}", model.updated_at.format(TIME_FORMAT))
}

pub(super) fn version_table<W: Write>(out: &mut W, versions: &[ModelVersion]) -> io::Result<()> {
    writeln!(out, "{:<8} {:<16} {:<12} {:<36} {:<20}", "ID", "VERSION", "STAGE", "PATH", "CREATED")?;
    writeln!(out, "{}", "-".repeat(96))?;
    for version in versions {
        writeln!(
            out,
            "{:<8} {:<16} {:<12} {:<36} {:<20}",
            version.id,
            truncate(&version.version, 14),
            version.stage.as_str(),
            truncate(&version.path, 34),
            version.created_at.format(TIME_FORMAT),
        )?;
    }
    Ok(())
}

pub(super) fn version_detail<W: Write>(out: &mut W, version: &ModelVersion) -> io::Result<()> {
    writeln!(out, "Version: {} (model {})", version.version, version.model_id)?;
    writeln!(out, "  ID:      {}", version.id)?;
    writeln!(out, "  Stage:   {}", version.stage)?;
    writeln!(out, "  Path:    {}", version.path)?;
    if let Some(desc) = &version.description {
        writeln!(out, "  Desc:    {desc}")?;
    }
    if !version.tags.is_empty() {
        writeln!(out, "  Tags:    {}", version.tags.join(", "))?;
    }
    writeln!(out, "  Created: {}", version.created_at.format(TIME_FORMAT))?;
    writeln!(out, "  Updated: {}", version.updated_at.format(TIME_FORMAT))?;
    if !version.metrics.is_empty() {
        writeln!(out, "\n  Metrics ({}):", version.metrics.len())?;
        for (name, value) in &version.metrics {
            writeln!(out, "    {name:<24} {value}")?;
        }
    }
    Ok(())
}

/// Shorten `s` to at most `max` characters, marking the cut with `..`
pub(super) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(2)).collect();
        format!("{kept}..")
    }
}
