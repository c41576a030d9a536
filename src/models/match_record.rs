//! MatchRecord, MatchState, Side and Stage for one normalized tournament match.

use crate::models::player::ParticipantId;
use crate::models::score::Score;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match.
pub type MatchId = u64;

/// Name the upstream data uses for an absent opponent.
pub const BYE: &str = "BYE";

/// Finals identifier of the grand final.
pub const GRAND_FINAL: &str = "G";

/// Finals identifier of the third-place match.
pub const THIRD_PLACE: &str = "3P";

/// Progress of a match. Only `Complete` matches are scored.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    #[default]
    Pending,
    Open,
    Complete,
}

impl MatchState {
    /// Unknown states count as pending so they are never scored.
    pub fn from_upstream(state: &str) -> Self {
        match state {
            "complete" => MatchState::Complete,
            "open" => MatchState::Open,
            _ => MatchState::Pending,
        }
    }
}

/// Which side of a match.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    One,
    Two,
}

impl Side {
    pub fn other(self) -> Self {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }
}

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Group ("Swiss") stage: matches carrying a group id.
    Group,
    /// Elimination bracket, or the whole bracket when there is no group stage.
    Final,
}

/// A single match as the scoring engine sees it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: MatchId,
    pub round: i32,
    /// Display name of side one. None (or `"BYE"`) when there is no opponent.
    pub player1: Option<String>,
    pub player2: Option<String>,
    pub player1_id: Option<ParticipantId>,
    pub player2_id: Option<ParticipantId>,
    pub winner_id: Option<ParticipantId>,
    pub state: MatchState,
    /// Raw upstream score line, kept for display.
    pub scores_csv: Option<String>,
    /// None when `scores_csv` is empty or unparseable.
    pub score: Option<Score>,
    pub forfeited: bool,
    pub group_id: Option<u64>,
    /// Bracket label; `"G"` and `"3P"` carry finals scoring meaning.
    pub identifier: Option<String>,
    pub completed_at: Option<DateTime<FixedOffset>>,
}

impl MatchRecord {
    /// New pending match between two (possibly absent) participants.
    pub fn new(
        id: MatchId,
        round: i32,
        player1: Option<(ParticipantId, &str)>,
        player2: Option<(ParticipantId, &str)>,
    ) -> Self {
        Self {
            id,
            round,
            player1: player1.map(|(_, name)| name.to_string()),
            player2: player2.map(|(_, name)| name.to_string()),
            player1_id: player1.map(|(id, _)| id),
            player2_id: player2.map(|(id, _)| id),
            ..Self::default()
        }
    }

    /// Place the match in a group (Swiss) stage.
    pub fn in_group(mut self, group_id: u64) -> Self {
        self.group_id = Some(group_id);
        self
    }

    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }

    /// Mark complete with the given winner and score line.
    pub fn completed(mut self, winner_id: Option<ParticipantId>, scores_csv: Option<&str>) -> Self {
        self.state = MatchState::Complete;
        self.winner_id = winner_id;
        self.set_scores(scores_csv.map(str::to_string));
        self
    }

    pub fn forfeit(mut self) -> Self {
        self.forfeited = true;
        self
    }

    /// Store the raw score line and its parsed form. Set `winner_id` first: the winner's
    /// score is read from the front of the line.
    pub fn set_scores(&mut self, scores_csv: Option<String>) {
        self.score = scores_csv
            .as_deref()
            .and_then(|raw| Score::parse(raw, self.winner_side()));
        self.scores_csv = scores_csv;
    }

    pub fn stage(&self) -> Stage {
        if self.group_id.is_some() {
            Stage::Group
        } else {
            Stage::Final
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == MatchState::Complete
    }

    /// Player name on `side`, treating `"BYE"` as absent.
    pub fn player(&self, side: Side) -> Option<&str> {
        let name = match side {
            Side::One => self.player1.as_deref(),
            Side::Two => self.player2.as_deref(),
        };
        name.filter(|n| *n != BYE)
    }

    pub fn involves(&self, name: &str) -> bool {
        self.player(Side::One) == Some(name) || self.player(Side::Two) == Some(name)
    }

    /// Side whose id equals `winner_id`. None for ties and unknown winners.
    pub fn winner_side(&self) -> Option<Side> {
        let winner = self.winner_id?;
        if self.player1_id == Some(winner) {
            Some(Side::One)
        } else if self.player2_id == Some(winner) {
            Some(Side::Two)
        } else {
            None
        }
    }

    /// Completed, not forfeited, and carrying a numeric score.
    pub fn has_genuine_result(&self) -> bool {
        self.is_complete() && !self.forfeited && self.score.is_some()
    }
}
