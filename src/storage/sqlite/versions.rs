//! Version operations and lifecycle transitions for the SQLite backend.
//!
//! Every function takes the caller's connection or transaction; the
//! lifecycle entry points rely on running inside one immediate transaction so
//! the archival and the insert/update commit together.

use rusqlite::{params, Connection, OptionalExtension};

use super::models::require_model;
use super::rows::{format_ts, version_from_row, VERSION_COLUMNS};
use crate::storage::codec::{self, Metrics};
use crate::storage::registry::{
    ModelKey, ModelStage, ModelVersion, NewVersion, RegistryError, Result, VersionUpdate,
};

pub(crate) fn find_version(conn: &Connection, id: i64) -> Result<Option<ModelVersion>> {
    let version = conn
        .query_row(
            &format!("SELECT {VERSION_COLUMNS} FROM model_versions WHERE id = ?1"),
            [id],
            version_from_row,
        )
        .optional()?;
    Ok(version)
}

pub(crate) fn require_version(conn: &Connection, id: i64) -> Result<ModelVersion> {
    find_version(conn, id)?.ok_or(RegistryError::VersionNotFound(id))
}

/// Demote production versions of `model_id` other than `exclude` to archived
pub(crate) fn archive_production(
    conn: &Connection,
    model_id: i64,
    exclude: Option<i64>,
    ts: &str,
) -> Result<usize> {
    let archived = conn.execute(
        "UPDATE model_versions SET stage = ?1, updated_at = ?2
         WHERE model_id = ?3 AND stage = ?4 AND (?5 IS NULL OR id != ?5)",
        params![ModelStage::Archived, ts, model_id, ModelStage::Production, exclude],
    )?;

    if archived > 0 {
        tracing::info!(model_id, archived, "archived previous production version");
    }
    Ok(archived)
}

/// Insert a version, archiving the current production one first if needed
pub(crate) fn create_version(
    conn: &Connection,
    model_id: i64,
    new: NewVersion,
) -> Result<ModelVersion> {
    require_model(conn, &ModelKey::Id(model_id))?;

    let now = super::rows::now();
    let ts = format_ts(&now);

    if new.stage.triggers_archival() {
        archive_production(conn, model_id, None, &ts)?;
    }

    conn.execute(
        "INSERT INTO model_versions
            (model_id, version, path, stage, metrics, tags, description, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?8)",
        params![
            model_id,
            new.version,
            new.path,
            new.stage,
            codec::encode_metrics(&new.metrics),
            codec::encode_tags(&new.tags),
            new.description,
            ts,
        ],
    )?;

    let version = new.into_version(conn.last_insert_rowid(), model_id, now);
    tracing::debug!(model_id, version_id = version.id, stage = %version.stage, "version created");
    Ok(version)
}

/// Move a version to `stage`, archiving the model's other production version
pub(crate) fn promote_version(conn: &Connection, id: i64, stage: ModelStage) -> Result<ModelVersion> {
    let mut version = require_version(conn, id)?;
    let now = super::rows::now();
    let ts = format_ts(&now);

    if stage.triggers_archival() {
        archive_production(conn, version.model_id, Some(id), &ts)?;
    }

    conn.execute(
        "UPDATE model_versions SET stage = ?1, updated_at = ?2 WHERE id = ?3",
        params![stage, ts, id],
    )?;

    tracing::debug!(version_id = id, from = %version.stage, to = %stage, "version stage changed");
    version.stage = stage;
    version.updated_at = now;
    Ok(version)
}

pub(crate) fn update_version(conn: &Connection, id: i64, update: &VersionUpdate) -> Result<ModelVersion> {
    let mut version = require_version(conn, id)?;
    update.apply(&mut version, super::rows::now());
    write_editable(conn, &version)?;
    Ok(version)
}

pub(crate) fn log_metrics(conn: &Connection, id: i64, metrics: Metrics) -> Result<ModelVersion> {
    let mut version = require_version(conn, id)?;
    version.metrics.extend(metrics);
    version.updated_at = super::rows::now();
    write_editable(conn, &version)?;
    Ok(version)
}

fn write_editable(conn: &Connection, version: &ModelVersion) -> Result<()> {
    conn.execute(
        "UPDATE model_versions SET description = ?1, metrics = ?2, updated_at = ?3 WHERE id = ?4",
        params![
            version.description,
            codec::encode_metrics(&version.metrics),
            format_ts(&version.updated_at),
            version.id,
        ],
    )?;
    Ok(())
}

pub(crate) fn delete_version(conn: &Connection, id: i64) -> Result<()> {
    let deleted = conn.execute("DELETE FROM model_versions WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(RegistryError::VersionNotFound(id));
    }
    Ok(())
}

pub(crate) fn list_versions(conn: &Connection, model_id: i64) -> Result<Vec<ModelVersion>> {
    require_model(conn, &ModelKey::Id(model_id))?;

    let mut stmt = conn.prepare(&format!(
        "SELECT {VERSION_COLUMNS} FROM model_versions
         WHERE model_id = ?1 ORDER BY created_at DESC, id DESC"
    ))?;
    let versions = stmt
        .query_map([model_id], version_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(versions)
}

pub(crate) fn latest_version(conn: &Connection, key: &ModelKey, stage: ModelStage) -> Result<ModelVersion> {
    let model = require_model(conn, key)?;

    conn.query_row(
        &format!(
            "SELECT {VERSION_COLUMNS} FROM model_versions
             WHERE model_id = ?1 AND stage = ?2 ORDER BY created_at DESC, id DESC LIMIT 1"
        ),
        params![model.id, stage],
        version_from_row,
    )
    .optional()?
    .ok_or(RegistryError::NoVersionInStage { model: model.name, stage })
}
