//! Player discovery: seed one stats record per distinct player name.

use crate::models::{MatchRecord, PlayerStats, Side};
use std::collections::HashMap;

/// Per-computation accumulator: stats records in discovery order, indexed by name.
#[derive(Clone, Debug, Default)]
pub struct StandingsTable {
    players: Vec<PlayerStats>,
    index: HashMap<String, usize>,
}

impl StandingsTable {
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&PlayerStats> {
        self.index.get(name).map(|&i| &self.players[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut PlayerStats> {
        self.index.get(name).map(|&i| &mut self.players[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStats> {
        self.players.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut PlayerStats> {
        self.players.iter_mut()
    }

    /// Sort by `event_total` descending. The sort is stable: equal totals keep discovery order.
    pub fn into_ranked(self) -> Vec<PlayerStats> {
        let mut players = self.players;
        players.sort_by(|a, b| b.event_total.total_cmp(&a.event_total));
        players
    }

    fn insert(&mut self, event_id: &str, name: &str) {
        if self.index.contains_key(name) {
            return;
        }
        self.index.insert(name.to_string(), self.players.len());
        self.players.push(PlayerStats::new(event_id, name));
    }
}

/// Collect every player name in `matches` (side one before side two, first appearance wins),
/// skipping absent opponents and `"BYE"`.
pub fn discover_players(event_id: &str, matches: &[MatchRecord]) -> StandingsTable {
    let mut table = StandingsTable::default();
    for m in matches {
        for side in [Side::One, Side::Two] {
            if let Some(name) = m.player(side) {
                table.insert(event_id, name);
            }
        }
    }
    table
}
