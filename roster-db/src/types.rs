//! Row types for the roster database.

/// A player row decoded from the `users` table.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: i64,
    /// Known aliases, in insertion order.
    pub names: Vec<String>,
    /// Matchmaking rating.
    pub mmr: i64,
    /// Per-lane preference weights.
    pub lane_pref: Vec<f64>,
}

/// Fields to change in an update operation.
///
/// `None` leaves the column untouched; `Some` replaces it entirely. An
/// explicit `Some(0)` for `mmr` is a real update to zero, not "absent".
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub names: Option<Vec<String>>,
    pub mmr: Option<i64>,
    pub lane_pref: Option<Vec<f64>>,
}

impl PlayerUpdate {
    /// True when no field is set. An empty update executes no statement.
    pub fn is_empty(&self) -> bool {
        self.names.is_none() && self.mmr.is_none() && self.lane_pref.is_none()
    }
}
