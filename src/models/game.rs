//! Match and Round for 2v2 (doubles) play.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// A single doubles match on one court.
///
/// Teams reference players by id; display names are resolved at render time.
/// There is no stored "finished" flag: completion is derived from the scores
/// and the tournament's target via [`GameMatch::is_complete`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// Court number, 1-based, assigned sequentially when the round is generated.
    pub court: u32,
    pub team_1: [PlayerId; 2],
    pub team_2: [PlayerId; 2],
    pub team_1_score: u32,
    pub team_2_score: u32,
}

impl GameMatch {
    /// New match at 0-0 on the given court.
    pub fn new(court: u32, team_1: [PlayerId; 2], team_2: [PlayerId; 2]) -> Self {
        Self {
            id: Uuid::new_v4(),
            court,
            team_1,
            team_2,
            team_1_score: 0,
            team_2_score: 0,
        }
    }

    /// A match is complete iff its scores add up to the tournament's target.
    /// While incomplete, both scores may hold arbitrary intermediate values.
    pub fn is_complete(&self, points_to_play: u32) -> bool {
        self.team_1_score + self.team_2_score == points_to_play
    }
}

/// One scheduling cycle: a fixed set of matches played concurrently.
///
/// Round numbers are 1-based and contiguous. The current round may be
/// regenerated in place (reshuffle) until the tournament advances past it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub matches: Vec<GameMatch>,
}
