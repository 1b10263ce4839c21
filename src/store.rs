//! In-memory session over all tournaments.
//!
//! One `TournamentStore` owns every tournament plus the active-tournament
//! pointer. The web layer wraps it in a single lock, so operations on any one
//! tournament are totally ordered. All mutations address a tournament by id;
//! an unknown id is a guaranteed no-op reported as `TournamentNotFound`.

use crate::logic;
use crate::models::{
    MatchId, PlayerId, Tournament, TournamentConfig, TournamentError, TournamentId,
};
use serde::{Deserialize, Serialize};

/// All tournaments known to this app, newest first, plus the active one.
///
/// Serializes to the same single JSON document the storage channel persists.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentStore {
    tournaments: Vec<Tournament>,
    active_tournament_id: Option<TournamentId>,
}

impl TournamentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a freshly built Draft tournament (newest first) and make it the
    /// active one. Returns its id.
    pub fn create_tournament(&mut self, tournament: Tournament) -> TournamentId {
        let id = tournament.id;
        self.tournaments.insert(0, tournament);
        self.active_tournament_id = Some(id);
        id
    }

    pub fn tournaments(&self) -> &[Tournament] {
        &self.tournaments
    }

    pub fn get(&self, id: TournamentId) -> Option<&Tournament> {
        self.tournaments.iter().find(|t| t.id == id)
    }

    pub fn active_tournament_id(&self) -> Option<TournamentId> {
        self.active_tournament_id
    }

    /// Point the app at a tournament (or none). The id must be known.
    pub fn set_active_tournament(
        &mut self,
        id: Option<TournamentId>,
    ) -> Result<(), TournamentError> {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return Err(TournamentError::TournamentNotFound);
            }
        }
        self.active_tournament_id = id;
        Ok(())
    }

    /// Drop every tournament and the active pointer.
    pub fn clear_all(&mut self) {
        self.tournaments.clear();
        self.active_tournament_id = None;
    }

    fn with_tournament<F>(&mut self, id: TournamentId, op: F) -> Result<(), TournamentError>
    where
        F: FnOnce(&mut Tournament) -> Result<(), TournamentError>,
    {
        let tournament = self
            .tournaments
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TournamentError::TournamentNotFound)?;
        op(tournament)
    }

    pub fn add_player(&mut self, id: TournamentId, name: &str) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| t.add_player(name))
    }

    pub fn remove_player(
        &mut self,
        id: TournamentId,
        player_id: PlayerId,
    ) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| t.remove_player(player_id))
    }

    pub fn set_config(
        &mut self,
        id: TournamentId,
        config: TournamentConfig,
    ) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| t.set_config(config))
    }

    pub fn set_courts(&mut self, id: TournamentId, courts: u32) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| t.set_courts(courts))
    }

    pub fn start_tournament(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        let result = self.with_tournament(id, |t| {
            logic::start_tournament(t, &mut rand::thread_rng())
        });
        if result.is_ok() {
            self.active_tournament_id = Some(id);
        }
        result
    }

    pub fn advance_round(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| logic::advance_round(t, &mut rand::thread_rng()))
    }

    pub fn reshuffle_current_round(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| {
            logic::reshuffle_current_round(t, &mut rand::thread_rng())
        })
    }

    pub fn finish_tournament(&mut self, id: TournamentId) -> Result<(), TournamentError> {
        let result = self.with_tournament(id, logic::finish_tournament);
        if result.is_ok() && self.active_tournament_id == Some(id) {
            self.active_tournament_id = None;
        }
        result
    }

    pub fn record_match_score(
        &mut self,
        id: TournamentId,
        round_number: u32,
        match_id: MatchId,
        team_1_score: u32,
        team_2_score: u32,
    ) -> Result<(), TournamentError> {
        self.with_tournament(id, |t| {
            logic::update_match_score(t, round_number, match_id, team_1_score, team_2_score)
        })
    }
}
