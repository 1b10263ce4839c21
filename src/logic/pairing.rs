//! Round generation: random pairing for the opening rounds, ranking-based
//! Mexicano pairing afterwards.

use crate::logic::standings::standings_order;
use crate::models::{GameMatch, Player, PlayerId, TournamentConfig};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate the matches for one round.
///
/// Pure function of the roster, the round number, and the config (plus the
/// RNG): it never looks at previous rounds.
///
/// 1. While `round_number <= rounds_before_ranking`, the roster is shuffled
///    and split into consecutive groups of four; `[a, b, c, d]` becomes
///    `[a, b]` vs `[c, d]`.
/// 2. Afterwards the roster is sorted by the current standings order and the
///    groups are cross-paired Mexicano style: `[p1, p2, p3, p4]` becomes
///    `[p1, p4]` vs `[p2, p3]`.
///
/// Courts are numbered sequentially from 1 in production order. Any trailing
/// group smaller than four sits the round out; fewer than four players means
/// an empty round.
pub fn generate_round_matches(
    players: &[Player],
    round_number: u32,
    config: &TournamentConfig,
    rng: &mut impl Rng,
) -> Vec<GameMatch> {
    let ranked_phase = round_number > config.rounds_before_ranking;

    let ordered: Vec<PlayerId> = if ranked_phase {
        standings_order(players, config.scoring_mode)
            .iter()
            .map(|p| p.id)
            .collect()
    } else {
        let mut ids: Vec<PlayerId> = players.iter().map(|p| p.id).collect();
        ids.shuffle(rng);
        ids
    };

    ordered
        .chunks_exact(4)
        .enumerate()
        .map(|(i, group)| {
            let (team_1, team_2) = if ranked_phase {
                // 1st with 4th against 2nd with 3rd
                ([group[0], group[3]], [group[1], group[2]])
            } else {
                ([group[0], group[1]], [group[2], group[3]])
            };
            GameMatch::new(i as u32 + 1, team_1, team_2)
        })
        .collect()
}
