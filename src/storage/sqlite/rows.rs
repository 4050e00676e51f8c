//! Row mapping between SQLite and registry entities.
//!
//! Timestamps are stored as RFC 3339 UTC text with microsecond precision so
//! that text order equals time order. Tags and metrics pass through the
//! attribute codec.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Row;

use crate::storage::codec;
use crate::storage::registry::{Model, ModelStage, ModelVersion};

pub(crate) const MODEL_COLUMNS: &str = "id, name, team, description, tags, created_at, updated_at";

pub(crate) const VERSION_COLUMNS: &str =
    "id, model_id, version, path, stage, metrics, tags, description, created_at, updated_at";

/// Current time at storage precision
pub(crate) fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

pub(crate) fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Malformed values read as the Unix epoch, the same on every read
fn parse_ts(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map(|ts| ts.with_timezone(&Utc)).unwrap_or_else(|e| {
        tracing::warn!(value = raw, error = %e, "malformed stored timestamp");
        DateTime::<Utc>::default()
    })
}

impl ToSql for ModelStage {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ModelStage {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse().map_err(|e: String| FromSqlError::Other(e.into()))
    }
}

pub(crate) fn model_from_row(row: &Row<'_>) -> rusqlite::Result<Model> {
    let tags: Option<String> = row.get(4)?;
    let created_at: String = row.get(5)?;
    let updated_at: String = row.get(6)?;

    Ok(Model {
        id: row.get(0)?,
        name: row.get(1)?,
        team: row.get(2)?,
        description: row.get(3)?,
        tags: codec::decode_tags(tags.as_deref()),
        created_at: parse_ts(&created_at),
        updated_at: parse_ts(&updated_at),
    })
}

pub(crate) fn version_from_row(row: &Row<'_>) -> rusqlite::Result<ModelVersion> {
    let metrics: Option<String> = row.get(5)?;
    let tags: Option<String> = row.get(6)?;
    let created_at: String = row.get(8)?;
    let updated_at: String = row.get(9)?;

    Ok(ModelVersion {
        id: row.get(0)?,
        model_id: row.get(1)?,
        version: row.get(2)?,
        path: row.get(3)?,
        stage: row.get(4)?,
        metrics: codec::decode_metrics(metrics.as_deref()),
        tags: codec::decode_tags(tags.as_deref()),
        description: row.get(7)?,
        created_at: parse_ts(&created_at),
        updated_at: parse_ts(&updated_at),
    })
}
