use roster_db::*;

#[test]
fn create_schema_is_idempotent() {
    let conn = open_memory().unwrap();
    create_schema(&conn).unwrap();

    let count: i32 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name='users'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn open_database_creates_file_and_reopens() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DB_FILE);

    let conn = open_database(&path).unwrap();
    insert_player(&conn, &["PlayerOne".to_string()], 3000, &[1.0]).unwrap();
    drop(conn);

    assert!(path.exists());

    let conn = open_database(&path).unwrap();
    let players = list_players(&conn).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].names, vec!["PlayerOne"]);
}
