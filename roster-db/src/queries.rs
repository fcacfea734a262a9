//! Read queries for the roster database.

use rusqlite::{Connection, params};

use crate::codec::{decode_lanes, decode_names};
use crate::operations::OperationError;
use crate::types::Player;

/// List all players in engine row order.
pub fn list_players(conn: &Connection) -> Result<Vec<Player>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name, MMR, lane_pref FROM users")?;
    let rows = stmt.query_map([], row_to_player)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Search players whose joined alias text contains `query`.
///
/// The match runs against the stored comma-joined string, so a query may
/// span an alias boundary including the comma itself. SQLite's default LIKE
/// collation applies (ASCII case-insensitive).
pub fn search_players(conn: &Connection, query: &str) -> Result<Vec<Player>, OperationError> {
    let pattern = format!("%{}%", query);
    let mut stmt =
        conn.prepare("SELECT id, name, MMR, lane_pref FROM users WHERE name LIKE ?1")?;
    let rows = stmt.query_map(params![pattern], row_to_player)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Find a single player by id.
pub fn find_player(conn: &Connection, id: i64) -> Result<Option<Player>, OperationError> {
    let mut stmt = conn.prepare("SELECT id, name, MMR, lane_pref FROM users WHERE id = ?1")?;
    let result = stmt.query_row(params![id], row_to_player);
    match result {
        Ok(player) => Ok(Some(player)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Number of players in the roster.
pub fn count_players(conn: &Connection) -> Result<i64, OperationError> {
    let count = conn.query_row("SELECT COUNT(*) FROM users", [], |row| row.get(0))?;
    Ok(count)
}

fn row_to_player(row: &rusqlite::Row<'_>) -> rusqlite::Result<Player> {
    let name_text: String = row.get(1)?;
    let lane_text: String = row.get(3)?;
    let lane_pref = decode_lanes(&lane_text).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, rusqlite::types::Type::Text, Box::new(e))
    })?;
    Ok(Player {
        id: row.get(0)?,
        names: decode_names(&name_text),
        mmr: row.get(2)?,
        lane_pref,
    })
}
