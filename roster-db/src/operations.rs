//! Write operations for the player roster.

use rusqlite::{Connection, params};
use thiserror::Error;

use crate::codec::{DELIMITER, encode_lanes, encode_names};
use crate::types::PlayerUpdate;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("player must have at least one name")]
    EmptyNames,
    #[error("name '{name}' contains the reserved delimiter ','")]
    NameContainsDelimiter { name: String },
}

/// Insert a new player. Returns the generated row id.
pub fn insert_player(
    conn: &Connection,
    names: &[String],
    mmr: i64,
    lane_pref: &[f64],
) -> Result<i64, OperationError> {
    validate_names(names)?;
    conn.execute(
        "INSERT INTO users (name, MMR, lane_pref) VALUES (?1, ?2, ?3)",
        params![encode_names(names), mmr, encode_lanes(lane_pref)],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("inserted player {} ({})", id, names.join(", "));
    Ok(id)
}

/// Apply the set fields of `update` to the player with `id`.
///
/// Unset fields leave their columns untouched, and a set field replaces its
/// column entirely (no list merging). Executes no statement when every field
/// is unset, and changes nothing, without error, when `id` does not exist.
pub fn update_player(
    conn: &Connection,
    id: i64,
    update: &PlayerUpdate,
) -> Result<(), OperationError> {
    let mut columns: Vec<&str> = Vec::new();
    let mut values: Vec<Box<dyn rusqlite::types::ToSql>> = Vec::new();

    if let Some(ref names) = update.names {
        validate_names(names)?;
        columns.push("name");
        values.push(Box::new(encode_names(names)));
    }
    if let Some(mmr) = update.mmr {
        columns.push("MMR");
        values.push(Box::new(mmr));
    }
    if let Some(ref lanes) = update.lane_pref {
        columns.push("lane_pref");
        values.push(Box::new(encode_lanes(lanes)));
    }

    if columns.is_empty() {
        return Ok(());
    }

    let assignments = columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{} = ?{}", col, i + 1))
        .collect::<Vec<_>>()
        .join(", ");
    let sql = format!(
        "UPDATE users SET {} WHERE id = ?{}",
        assignments,
        columns.len() + 1
    );
    values.push(Box::new(id));

    let params: Vec<&dyn rusqlite::types::ToSql> = values.iter().map(|v| v.as_ref()).collect();
    let changed = conn.execute(&sql, params.as_slice())?;
    log::debug!("update player {}: {} row(s) changed", id, changed);
    Ok(())
}

/// Delete the player with `id`. A missing id is a silent no-op.
pub fn delete_player(conn: &Connection, id: i64) -> Result<(), OperationError> {
    let changed = conn.execute("DELETE FROM users WHERE id = ?1", params![id])?;
    log::debug!("delete player {}: {} row(s) changed", id, changed);
    Ok(())
}

fn validate_names(names: &[String]) -> Result<(), OperationError> {
    if names.is_empty() {
        return Err(OperationError::EmptyNames);
    }
    if let Some(name) = names.iter().find(|n| n.contains(DELIMITER)) {
        return Err(OperationError::NameContainsDelimiter { name: name.clone() });
    }
    Ok(())
}
