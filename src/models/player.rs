//! Player data structure with derived statistics.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in match teams and lookups).
pub type PlayerId = Uuid;

/// A player in the tournament.
///
/// All statistics are derived: they are recomputed from the full match history
/// whenever a score changes (see `logic::standings`), never bumped in place.
/// `points` is fractional because a draw in WINS scoring awards 0.5.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub points: f64,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points_for: u32,
    pub points_against: u32,
}

impl Player {
    /// Create a new player with the given name. All statistics start at zero.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            points: 0.0,
            wins: 0,
            draws: 0,
            losses: 0,
            points_for: 0,
            points_against: 0,
        }
    }

    /// Point differential across all completed matches.
    pub fn point_diff(&self) -> i64 {
        i64::from(self.points_for) - i64::from(self.points_against)
    }

    /// Reset every statistic to zero (the standings fold starts from here).
    pub fn reset_stats(&mut self) {
        self.points = 0.0;
        self.wins = 0;
        self.draws = 0;
        self.losses = 0;
        self.points_for = 0;
        self.points_against = 0;
    }
}
