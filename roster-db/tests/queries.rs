use roster_db::*;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn seeded() -> Connection {
    let conn = open_memory().unwrap();
    insert_player(
        &conn,
        &names(&["PlayerOne", "AliasOne"]),
        3000,
        &[0.7, 0.3, 0.0, 0.0, 0.0],
    )
    .unwrap();
    insert_player(
        &conn,
        &names(&["PlayerTwo", "AliasTwo"]),
        2800,
        &[0.5, 0.5, 0.0, 0.0, 0.0],
    )
    .unwrap();
    insert_player(
        &conn,
        &names(&["PlayerThree"]),
        3200,
        &[0.0, 0.0, 0.7, 0.3, 0.0],
    )
    .unwrap();
    conn
}

#[test]
fn list_returns_rows_in_id_order() {
    let conn = seeded();
    let players = list_players(&conn).unwrap();
    let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn list_empty_table_yields_empty_vec() {
    let conn = open_memory().unwrap();
    assert!(list_players(&conn).unwrap().is_empty());
}

#[test]
fn search_matches_within_alias() {
    let conn = seeded();
    let hits = search_players(&conn, "PlayerOne").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);
}

#[test]
fn search_matches_any_alias() {
    let conn = seeded();
    let hits = search_players(&conn, "AliasTwo").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 2);
}

#[test]
fn search_runs_against_joined_text() {
    let conn = seeded();

    // The stored text for player 1 is "PlayerOne,AliasOne": a query may span
    // the alias boundary, comma included.
    let hits = search_players(&conn, "One,A").unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, 1);

    // Without the comma the boundary does not collapse.
    assert!(search_players(&conn, "neA").unwrap().is_empty());
}

#[test]
fn search_no_match_returns_empty() {
    let conn = seeded();
    assert!(search_players(&conn, "Nobody").unwrap().is_empty());
}

#[test]
fn find_player_by_id() {
    let conn = seeded();
    let player = find_player(&conn, 3).unwrap().unwrap();
    assert_eq!(player.names, names(&["PlayerThree"]));
    assert_eq!(player.mmr, 3200);

    assert!(find_player(&conn, 99).unwrap().is_none());
}

#[test]
fn count_players_tracks_changes() {
    let conn = seeded();
    assert_eq!(count_players(&conn).unwrap(), 3);
    delete_player(&conn, 2).unwrap();
    assert_eq!(count_players(&conn).unwrap(), 2);
}

#[test]
fn end_to_end_scenario() {
    let conn = seeded();

    let players = list_players(&conn).unwrap();
    assert_eq!(players.len(), 3);
    assert_eq!(players[0].lane_pref, vec![0.7, 0.3, 0.0, 0.0, 0.0]);

    update_player(
        &conn,
        2,
        &PlayerUpdate {
            mmr: Some(2900),
            ..Default::default()
        },
    )
    .unwrap();

    let players = list_players(&conn).unwrap();
    assert_eq!(players[1].id, 2);
    assert_eq!(players[1].mmr, 2900);
    assert_eq!(players[1].names, names(&["PlayerTwo", "AliasTwo"]));

    delete_player(&conn, 3).unwrap();

    let players = list_players(&conn).unwrap();
    let ids: Vec<i64> = players.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);
}
