//! Tournament lifecycle: start, round advancement, reshuffle, finish.

use crate::logic::pairing::generate_round_matches;
use crate::logic::standings::recompute_player_stats;
use crate::models::{Round, Tournament, TournamentError, TournamentStatus};
use rand::Rng;

/// Start the tournament (Draft only): freeze the config (defaults if none was
/// set), generate round 1, and go Active.
///
/// A roster smaller than four players still starts; the round simply has no
/// matches until more of the schedule makes sense to the organizer.
pub fn start_tournament(
    tournament: &mut Tournament,
    rng: &mut impl Rng,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Draft {
        return Err(TournamentError::InvalidState);
    }
    let config = tournament.effective_config();
    let matches = generate_round_matches(&tournament.players, 1, &config, rng);
    tournament.config = Some(config);
    tournament.rounds = vec![Round {
        round_number: 1,
        matches,
    }];
    tournament.current_round = 1;
    tournament.status = TournamentStatus::Active;
    tournament.touch();
    log::info!("tournament {} started", tournament.id);
    Ok(())
}

/// Open the next round (Active only), pairing from the current standings.
///
/// Does not require the current round to be complete; that gate belongs to
/// the layer driving the tournament. Incomplete matches just never score.
pub fn advance_round(
    tournament: &mut Tournament,
    rng: &mut impl Rng,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Active {
        return Err(TournamentError::InvalidState);
    }
    let config = tournament.effective_config();
    let next = tournament.current_round + 1;
    let matches = generate_round_matches(&tournament.players, next, &config, rng);
    tournament.rounds.push(Round {
        round_number: next,
        matches,
    });
    tournament.current_round = next;
    tournament.touch();
    Ok(())
}

/// Regenerate the current round's matches in place (Active only).
///
/// Uses the same phase rule as generating the round fresh. Scores already
/// entered for the round are discarded, so the standings are refolded.
pub fn reshuffle_current_round(
    tournament: &mut Tournament,
    rng: &mut impl Rng,
) -> Result<(), TournamentError> {
    if tournament.status != TournamentStatus::Active {
        return Err(TournamentError::InvalidState);
    }
    let config = tournament.effective_config();
    let current = tournament.current_round;
    let matches = generate_round_matches(&tournament.players, current, &config, rng);
    if let Some(round) = tournament
        .rounds
        .iter_mut()
        .find(|r| r.round_number == current)
    {
        round.matches = matches;
    }
    recompute_player_stats(
        &mut tournament.players,
        &tournament.rounds,
        tournament.points_to_play,
        config.scoring_mode,
    );
    tournament.touch();
    Ok(())
}

/// Finish the tournament. Idempotent: finishing a Finished tournament is fine
/// and changes nothing; rounds are never regenerated or mutated here.
pub fn finish_tournament(tournament: &mut Tournament) -> Result<(), TournamentError> {
    match tournament.status {
        TournamentStatus::Active => {
            tournament.status = TournamentStatus::Finished;
            tournament.touch();
            log::info!("tournament {} finished", tournament.id);
            Ok(())
        }
        TournamentStatus::Finished => Ok(()),
        TournamentStatus::Draft => Err(TournamentError::InvalidState),
    }
}
