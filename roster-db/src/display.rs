//! Console rendering for roster query results.

use std::io::{self, Write};

use crate::types::Player;

/// Write a human-readable block per player, or a single "no players" line.
pub fn write_players(out: &mut impl Write, players: &[Player]) -> io::Result<()> {
    if players.is_empty() {
        writeln!(out, "No players found.")?;
        return Ok(());
    }

    for player in players {
        writeln!(out, "ID: {}", player.id)?;
        writeln!(out, "Names: {}", player.names.join(", "))?;
        writeln!(out, "MMR: {}", player.mmr)?;
        writeln!(out, "Lane Preferences: {:?}", player.lane_pref)?;
        writeln!(out, "{}", "-".repeat(20))?;
    }
    Ok(())
}
