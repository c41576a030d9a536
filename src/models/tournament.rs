//! Tournament and GroupStage: one fetched tournament snapshot.

use crate::logic::compute_standings;
use crate::models::match_record::{MatchRecord, Stage};
use crate::models::player::{Participant, PlayerStats};
use serde::{Deserialize, Serialize};

/// Unique identifier for a tournament.
pub type TournamentId = u64;

/// A group inside the group stage (e.g. identifier "A").
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupStage {
    pub id: u64,
    pub identifier: String,
}

/// Tournament snapshot: participants and every match, in upstream order.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// URL slug the tournament was fetched by.
    pub url: String,
    pub group_stages_enabled: bool,
    pub group_stages: Vec<GroupStage>,
    pub participants: Vec<Participant>,
    pub matches: Vec<MatchRecord>,
}

impl Tournament {
    /// Event id written on every standings line.
    pub fn event_id(&self) -> String {
        self.id.to_string()
    }

    /// Group identifier for a group id, when group stages are enabled and known.
    pub fn group_label(&self, group_id: u64) -> Option<&str> {
        if !self.group_stages_enabled {
            return None;
        }
        self.group_stages
            .iter()
            .find(|g| g.id == group_id)
            .map(|g| g.identifier.as_str())
    }

    /// Completed matches per stage as `(group, final)`.
    pub fn completed_match_counts(&self) -> (usize, usize) {
        self.matches
            .iter()
            .filter(|m| m.is_complete())
            .fold((0, 0), |(group, fin), m| match m.stage() {
                Stage::Group => (group + 1, fin),
                Stage::Final => (group, fin + 1),
            })
    }

    /// Ranked standings for this tournament.
    pub fn standings(&self) -> Vec<PlayerStats> {
        compute_standings(&self.event_id(), &self.matches)
    }
}
