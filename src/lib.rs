//! Padel Mexicano tournament web app: library with models and business logic.

pub mod logic;
pub mod models;
pub mod storage;
pub mod store;

pub use logic::{
    advance_round, compare_standings, finish_tournament, generate_round_matches,
    recompute_player_stats, reshuffle_current_round, standings_order, start_tournament,
    update_match_score,
};
pub use models::{
    compute_courts, Format, GameMatch, MatchId, Player, PlayerId, Round, ScoringMode, Tournament,
    TournamentConfig, TournamentError, TournamentId, TournamentStatus,
};
pub use storage::JsonStorage;
pub use store::TournamentStore;
