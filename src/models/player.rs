//! Participant and PlayerStats data structures.

use serde::{Deserialize, Serialize};

/// Upstream identifier for a participant (used in matches and winner lookups).
pub type ParticipantId = u64;

/// Points per Swiss win.
pub const WIN_POINTS: f64 = 3.0;
/// Points per Swiss loss by more than `CLOSE_LOSS_MARGIN`.
pub const LOSS_POINTS: f64 = 0.5;
/// Points per Swiss loss by at most `CLOSE_LOSS_MARGIN`.
pub const CLOSE_LOSS_POINTS: f64 = 1.5;
/// Largest score difference that still counts as a close loss.
pub const CLOSE_LOSS_MARGIN: u32 = 2;
/// Points per inferred bye round.
pub const BYE_POINTS: f64 = 3.0;
/// Bonus for each consecutive win after the first in a streak.
pub const STREAK_STEP: f64 = 0.5;

/// A tournament entrant.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    /// Ids the same entrant uses inside group stages.
    pub group_player_ids: Vec<ParticipantId>,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            group_player_ids: Vec::new(),
        }
    }

    pub fn with_group_player_ids(mut self, ids: Vec<ParticipantId>) -> Self {
        self.group_player_ids = ids;
        self
    }
}

/// Standings line for one player.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub event_id: String,
    pub player: String,
    pub swiss_wins: u32,
    pub swiss_losses: u32,
    pub swiss_close_losses: u32,
    pub byes: u32,
    pub streak_bonus: f64,
    pub finals_place: Option<u32>,
    pub finals_points: u32,
    pub event_total: f64,
}

impl PlayerStats {
    /// Create a record with every counter at zero.
    pub fn new(event_id: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            event_id: event_id.into(),
            player: player.into(),
            ..Self::default()
        }
    }

    pub fn record_swiss_win(&mut self) {
        self.swiss_wins += 1;
    }

    /// Record a scored Swiss loss, close or regular by score difference.
    pub fn record_swiss_loss(&mut self, difference: u32) {
        if difference <= CLOSE_LOSS_MARGIN {
            self.swiss_close_losses += 1;
        } else {
            self.swiss_losses += 1;
        }
    }

    /// Finals placement; a later result replaces an earlier one.
    pub fn record_finals_result(&mut self, place: u32, points: u32) {
        self.finals_place = Some(place);
        self.finals_points = points;
    }

    /// Weighted sum of all counters.
    pub fn weighted_total(&self) -> f64 {
        f64::from(self.swiss_wins) * WIN_POINTS
            + f64::from(self.swiss_close_losses) * CLOSE_LOSS_POINTS
            + f64::from(self.swiss_losses) * LOSS_POINTS
            + self.streak_bonus
            + f64::from(self.byes) * BYE_POINTS
            + f64::from(self.finals_points)
    }

    /// Zero every counter and the total. Placement is left as recorded.
    pub fn reset(&mut self) {
        self.swiss_wins = 0;
        self.swiss_losses = 0;
        self.swiss_close_losses = 0;
        self.byes = 0;
        self.streak_bonus = 0.0;
        self.finals_points = 0;
        self.event_total = 0.0;
    }
}
