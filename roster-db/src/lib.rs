//! SQLite persistence layer for the player roster.
//!
//! Provides schema creation, CRUD operations, substring search, and console
//! display helpers backed by SQLite (via rusqlite with bundled feature).

pub mod codec;
pub mod display;
pub mod operations;
pub mod queries;
pub mod schema;
pub mod types;

pub use rusqlite::Connection;

pub use display::write_players;
pub use operations::{OperationError, delete_player, insert_player, update_player};
pub use queries::{count_players, find_player, list_players, search_players};
pub use schema::{DEFAULT_DB_FILE, SchemaError, create_schema, open_database, open_memory};
pub use types::{Player, PlayerUpdate};
