//! Match ledger: score entry and the standings recomputation it triggers.

use crate::logic::standings::recompute_player_stats;
use crate::models::{MatchId, Tournament, TournamentError, TournamentStatus};

/// Record both scores for one match, then refold the standings.
///
/// Only valid while the tournament is Active. An unknown round number or match
/// id is a recoverable logic error: it is logged and the tournament is left
/// untouched, it never fails the call. Scores are taken verbatim; the entry
/// surface is expected to keep them within `[0, points_to_play]`, and a match
/// only counts toward standings once they sum to the target.
pub fn update_match_score(
    tournament: &mut Tournament,
    round_number: u32,
    match_id: MatchId,
    team_1_score: u32,
    team_2_score: u32,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Active {
        return Err(TournamentError::InvalidState);
    }

    let Some(round) = tournament
        .rounds
        .iter_mut()
        .find(|r| r.round_number == round_number)
    else {
        log::warn!(
            "score update for unknown round {} in tournament {}",
            round_number,
            tournament.id
        );
        return Ok(());
    };
    let Some(m) = round.matches.iter_mut().find(|m| m.id == match_id) else {
        log::warn!(
            "score update for unknown match {} in round {} of tournament {}",
            match_id,
            round_number,
            tournament.id
        );
        return Ok(());
    };

    m.team_1_score = team_1_score;
    m.team_2_score = team_2_score;

    let config = tournament.effective_config();
    recompute_player_stats(
        &mut tournament.players,
        &tournament.rounds,
        tournament.points_to_play,
        config.scoring_mode,
    );
    tournament.touch();
    Ok(())
}
