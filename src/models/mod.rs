//! Data structures for the padel tournament: players, matches, rounds, tournament state.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, Round};
pub use player::{Player, PlayerId};
pub use tournament::{
    compute_courts, Format, ScoringMode, Tournament, TournamentConfig, TournamentError,
    TournamentId, TournamentStatus,
};
