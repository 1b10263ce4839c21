//! Tournament, its configuration, and lifecycle status.

use crate::models::game::Round;
use crate::models::player::{Player, PlayerId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Tournament is not in a status that allows this action.
    InvalidState,
    /// No tournament with the given id in the store.
    TournamentNotFound,
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::InvalidState => write!(f, "Invalid state for this action"),
            TournamentError::TournamentNotFound => write!(f, "No tournament with that id"),
        }
    }
}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Tournament format. Only Mexicano has behavior; the other variants are
/// stored placeholders the engine does not branch on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Format {
    #[default]
    Mexicano,
    Americano,
    FixedAmericano,
    FixedMexicano,
}

/// How standings points are earned.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoringMode {
    /// 1 point per win, 0.5 per draw; ranked by wins, then points, then diff.
    #[default]
    Wins,
    /// Match scores are the points; ranked by points, then points for.
    Points,
}

/// Pairing and scoring parameters, frozen in when the tournament starts.
///
/// `allow_draws`, `court_rotation` and `auto_advance_rounds` are accepted and
/// persisted but currently enforce nothing in the engine; they inform the
/// presentation layer only.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    /// Number of initial rounds paired at random before ranking kicks in.
    pub rounds_before_ranking: u32,
    pub allow_draws: bool,
    pub court_rotation: bool,
    pub auto_advance_rounds: bool,
    pub scoring_mode: ScoringMode,
}

impl Default for TournamentConfig {
    fn default() -> Self {
        Self {
            rounds_before_ranking: 2,
            allow_draws: false,
            court_rotation: true,
            auto_advance_rounds: true,
            scoring_mode: ScoringMode::Wins,
        }
    }
}

/// Lifecycle status. No transition leaves Finished, and Active never returns
/// to Draft.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TournamentStatus {
    /// Roster building; players may be added and removed.
    #[default]
    Draft,
    /// Rounds are being played; roster is frozen.
    Active,
    /// Terminal; no further round generation or score changes.
    Finished,
}

/// Full tournament state: metadata, roster, rounds, and status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    pub format: Format,
    /// Target score a match is played to; a match is complete when the two
    /// team scores sum to this.
    pub points_to_play: u32,
    pub description: Option<String>,
    pub club: Option<String>,
    pub start_at: Option<String>,
    pub entrance_fee: Option<u32>,
    pub ranked: bool,
    pub court_booked: bool,
    pub status: TournamentStatus,
    pub players: Vec<Player>,
    /// When true, `courts` follows the roster size; a manual override via
    /// [`Tournament::set_courts`] turns this off.
    pub auto_courts: bool,
    pub courts: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// 1-based index of the round currently being played; 0 before start.
    pub current_round: u32,
    pub rounds: Vec<Round>,
    /// None until set; defaults are frozen in at start.
    pub config: Option<TournamentConfig>,
}

/// Court heuristic: one court per full group of four, at least one.
///
/// Informational only: the pairing generator chunks players four at a time
/// regardless of this number, and any remainder sits the round out.
pub fn compute_courts(player_count: usize) -> u32 {
    ((player_count / 4).max(1)) as u32
}

impl Tournament {
    /// Create a new Draft tournament with an empty roster.
    pub fn new(name: impl Into<String>, format: Format, points_to_play: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format,
            points_to_play,
            description: None,
            club: None,
            start_at: None,
            entrance_fee: None,
            ranked: false,
            court_booked: false,
            status: TournamentStatus::Draft,
            players: Vec::new(),
            auto_courts: true,
            courts: 1,
            created_at: now,
            updated_at: now,
            current_round: 0,
            rounds: Vec::new(),
            config: None,
        }
    }

    /// The config that will govern (or governs) play, defaults if unset.
    pub fn effective_config(&self) -> TournamentConfig {
        self.config.unwrap_or_default()
    }

    /// Refresh `updated_at`. Every mutating operation calls this.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Look up a player's display name (render-time resolution of team ids).
    pub fn player_name(&self, id: PlayerId) -> Option<&str> {
        self.players.iter().find(|p| p.id == id).map(|p| p.name.as_str())
    }

    /// The round currently being played, if the tournament has started.
    pub fn current_round_ref(&self) -> Option<&Round> {
        self.rounds
            .iter()
            .find(|r| r.round_number == self.current_round)
    }

    fn recompute_courts(&mut self) {
        if self.auto_courts {
            self.courts = compute_courts(self.players.len());
        }
    }

    /// Add a player (Draft only). A name that is empty after trimming is
    /// ignored. Recomputes the court count in auto mode.
    pub fn add_player(&mut self, name: &str) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Draft {
            return Err(TournamentError::InvalidState);
        }
        let trimmed = name.trim();
        if trimmed.is_empty() {
            log::debug!("ignoring empty player name for tournament {}", self.id);
            return Ok(());
        }
        self.players.push(Player::new(trimmed));
        self.recompute_courts();
        self.touch();
        Ok(())
    }

    /// Remove a player by id (Draft only). Unknown ids are a no-op.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Draft {
            return Err(TournamentError::InvalidState);
        }
        self.players.retain(|p| p.id != player_id);
        self.recompute_courts();
        self.touch();
        Ok(())
    }

    /// Replace the pending config (Draft only; it is frozen at start).
    pub fn set_config(&mut self, config: TournamentConfig) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Draft {
            return Err(TournamentError::InvalidState);
        }
        self.config = Some(config);
        self.touch();
        Ok(())
    }

    /// Manually override the court count (Draft only). Disables auto-sizing.
    pub fn set_courts(&mut self, courts: u32) -> Result<(), TournamentError> {
        if self.status != TournamentStatus::Draft {
            return Err(TournamentError::InvalidState);
        }
        self.auto_courts = false;
        self.courts = courts.max(1);
        self.touch();
        Ok(())
    }
}
