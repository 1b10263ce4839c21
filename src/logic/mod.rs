//! Tournament business logic: pairing, standings, scoring, lifecycle.

mod lifecycle;
mod pairing;
mod scoring;
mod standings;

pub use lifecycle::{advance_round, finish_tournament, reshuffle_current_round, start_tournament};
pub use pairing::generate_round_matches;
pub use scoring::update_match_score;
pub use standings::{compare_standings, recompute_player_stats, standings_order};
