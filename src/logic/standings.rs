//! Standings: full-history stat recomputation and the ranking order.

use crate::models::{Player, Round, ScoringMode};
use std::cmp::Ordering;

/// Recompute every player's statistics from scratch over the full ledger.
///
/// Deliberately not incremental: folding the whole history on every score
/// change keeps the stats in lockstep with the matches at the scale this app
/// runs at (dozens of players, tens of rounds). Only complete matches count;
/// the result is independent of the order matches are stored in.
pub fn recompute_player_stats(
    players: &mut [Player],
    rounds: &[Round],
    points_to_play: u32,
    scoring_mode: ScoringMode,
) {
    for player in players.iter_mut() {
        player.reset_stats();
        for round in rounds {
            for m in &round.matches {
                if !m.is_complete(points_to_play) {
                    continue;
                }
                let in_team_1 = m.team_1.contains(&player.id);
                let in_team_2 = m.team_2.contains(&player.id);
                if !in_team_1 && !in_team_2 {
                    continue;
                }

                let (own, opp) = if in_team_1 {
                    (m.team_1_score, m.team_2_score)
                } else {
                    (m.team_2_score, m.team_1_score)
                };
                player.points_for += own;
                player.points_against += opp;

                match scoring_mode {
                    ScoringMode::Wins => match own.cmp(&opp) {
                        Ordering::Greater => {
                            player.wins += 1;
                            player.points += 1.0;
                        }
                        Ordering::Less => player.losses += 1,
                        Ordering::Equal => {
                            player.draws += 1;
                            player.points += 0.5;
                        }
                    },
                    ScoringMode::Points => player.points += f64::from(own),
                }
            }
        }
    }
}

/// Total order over players used for the leaderboard and for ranked pairing.
///
/// WINS: wins, then points, then point differential, all descending.
/// POINTS: points, then points for, descending.
pub fn compare_standings(a: &Player, b: &Player, scoring_mode: ScoringMode) -> Ordering {
    match scoring_mode {
        ScoringMode::Wins => b
            .wins
            .cmp(&a.wins)
            .then(b.points.total_cmp(&a.points))
            .then(b.point_diff().cmp(&a.point_diff())),
        ScoringMode::Points => b
            .points
            .total_cmp(&a.points)
            .then(b.points_for.cmp(&a.points_for)),
    }
}

/// Players sorted best-first by [`compare_standings`]. The sort is stable, so
/// fully tied players keep their roster order.
pub fn standings_order(players: &[Player], scoring_mode: ScoringMode) -> Vec<Player> {
    let mut sorted = players.to_vec();
    sorted.sort_by(|a, b| compare_standings(a, b, scoring_mode));
    sorted
}
