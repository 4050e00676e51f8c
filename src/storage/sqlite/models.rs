//! Model operations for the SQLite backend.
//!
//! Entity CRUD plus the filtered listing. Tag membership is checked in two
//! steps: `instr` over the encoded tag column narrows the scan, then the
//! decoded tag list is tested exactly, so a tag never matches a longer tag
//! that merely contains it.

use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension};

use super::rows::{format_ts, model_from_row, MODEL_COLUMNS};
use crate::storage::codec;
use crate::storage::registry::{
    query, Model, ModelKey, ModelPage, ModelQuery, ModelUpdate, NewModel, RegistryError, Result,
};

pub(crate) fn insert_model(conn: &Connection, new: NewModel) -> Result<Model> {
    let now = super::rows::now();
    let ts = format_ts(&now);

    let inserted = conn.execute(
        "INSERT INTO models (name, team, description, tags, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?5)",
        params![new.name, new.team, new.description, codec::encode_tags(&new.tags), ts],
    );

    match inserted {
        Ok(_) => {}
        Err(e) if is_unique_violation(&e) => return Err(RegistryError::Conflict(new.name)),
        Err(e) => return Err(e.into()),
    }

    Ok(Model {
        id: conn.last_insert_rowid(),
        name: new.name,
        team: new.team,
        description: new.description,
        tags: new.tags,
        created_at: now,
        updated_at: now,
    })
}

pub(crate) fn find_model(conn: &Connection, key: &ModelKey) -> Result<Option<Model>> {
    let found = match key {
        ModelKey::Id(id) => conn
            .query_row(
                &format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = ?1"),
                [id],
                model_from_row,
            )
            .optional()?,
        ModelKey::Name(name) => conn
            .query_row(
                &format!("SELECT {MODEL_COLUMNS} FROM models WHERE name = ?1"),
                [name],
                model_from_row,
            )
            .optional()?,
    };
    Ok(found)
}

pub(crate) fn require_model(conn: &Connection, key: &ModelKey) -> Result<Model> {
    find_model(conn, key)?.ok_or_else(|| RegistryError::ModelNotFound(key.to_string()))
}

pub(crate) fn update_model(conn: &Connection, id: i64, update: &ModelUpdate) -> Result<Model> {
    let mut model = require_model(conn, &ModelKey::Id(id))?;
    if update.is_empty() {
        return Ok(model);
    }
    update.apply(&mut model, super::rows::now());

    conn.execute(
        "UPDATE models SET description = ?1, tags = ?2, updated_at = ?3 WHERE id = ?4",
        params![model.description, codec::encode_tags(&model.tags), format_ts(&model.updated_at), id],
    )?;
    Ok(model)
}

pub(crate) fn delete_model(conn: &Connection, id: i64) -> Result<usize> {
    let versions: i64 = conn.query_row(
        "SELECT COUNT(*) FROM model_versions WHERE model_id = ?1",
        [id],
        |row| row.get(0),
    )?;

    // Versions go with the model through ON DELETE CASCADE
    let deleted = conn.execute("DELETE FROM models WHERE id = ?1", [id])?;
    if deleted == 0 {
        return Err(RegistryError::ModelNotFound(id.to_string()));
    }
    Ok(versions as usize)
}

pub(crate) fn list_models(conn: &Connection, query: &ModelQuery) -> Result<ModelPage> {
    let mut filter = String::from(" WHERE 1 = 1");
    let mut args: Vec<Value> = Vec::new();

    if let Some(team) = &query.team {
        args.push(Value::Text(team.clone()));
        filter.push_str(&format!(" AND team = ?{}", args.len()));
    }
    if let Some(tag) = &query.tag {
        args.push(Value::Text(codec::tag_probe(tag)));
        filter.push_str(&format!(" AND instr(tags, ?{}) > 0", args.len()));
    }

    let order = " ORDER BY created_at DESC, id DESC";

    if query.tag.is_some() {
        // Exact membership needs the decoded list, so count and window here
        let sql = format!("SELECT {MODEL_COLUMNS} FROM models{filter}{order}");
        let mut stmt = conn.prepare(&sql)?;
        let candidates = stmt
            .query_map(params_from_iter(args.iter()), model_from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        let matched: Vec<Model> = candidates.into_iter().filter(|m| query.matches(m)).collect();
        let total = matched.len();
        return Ok(ModelPage { total, items: query::window(matched, query.skip, query.limit) });
    }

    let total: i64 = conn.query_row(
        &format!("SELECT COUNT(*) FROM models{filter}"),
        params_from_iter(args.iter()),
        |row| row.get(0),
    )?;

    args.push(Value::Integer(to_sql_int(query.limit)));
    let limit_idx = args.len();
    args.push(Value::Integer(to_sql_int(query.skip)));
    let offset_idx = args.len();

    let sql = format!(
        "SELECT {MODEL_COLUMNS} FROM models{filter}{order} LIMIT ?{limit_idx} OFFSET ?{offset_idx}"
    );
    let mut stmt = conn.prepare(&sql)?;
    let items = stmt
        .query_map(params_from_iter(args.iter()), model_from_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(ModelPage { total: total as usize, items })
}

fn to_sql_int(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

fn is_unique_violation(e: &rusqlite::Error) -> bool {
    matches!(
        e,
        rusqlite::Error::SqliteFailure(err, _)
            if err.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
    )
}
