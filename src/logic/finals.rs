//! Final rounds: placement points from the grand final and the third-place match.

use crate::logic::discovery::StandingsTable;
use crate::models::{MatchRecord, Stage, GRAND_FINAL, THIRD_PLACE};

/// Places and points handed out by one terminal finals match.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FinalsAward {
    pub winner_place: u32,
    pub winner_points: u32,
    pub loser_place: u32,
    pub loser_points: u32,
}

impl FinalsAward {
    /// Award for a bracket identifier; only the grand final and third-place match score.
    pub fn for_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            GRAND_FINAL => Some(FinalsAward {
                winner_place: 1,
                winner_points: 6,
                loser_place: 2,
                loser_points: 4,
            }),
            THIRD_PLACE => Some(FinalsAward {
                winner_place: 3,
                winner_points: 3,
                loser_place: 4,
                loser_points: 2,
            }),
            _ => None,
        }
    }
}

/// Apply placement awards from completed finals matches, in match order.
/// A player placed twice keeps the last award.
pub fn tabulate_finals(table: &mut StandingsTable, matches: &[MatchRecord]) {
    for m in matches
        .iter()
        .filter(|m| m.stage() == Stage::Final && m.is_complete())
    {
        let Some(award) = m.identifier.as_deref().and_then(FinalsAward::for_identifier) else {
            continue;
        };
        let Some(winner_side) = m.winner_side() else {
            log::debug!("finals match {} has no resolvable winner, skipped", m.id);
            continue;
        };
        if let Some(s) = m.player(winner_side).and_then(|name| table.get_mut(name)) {
            s.record_finals_result(award.winner_place, award.winner_points);
        }
        if let Some(s) = m.player(winner_side.other()).and_then(|name| table.get_mut(name)) {
            s.record_finals_result(award.loser_place, award.loser_points);
        }
    }
}
