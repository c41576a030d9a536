//! Totals and pruning: weighted event totals, zeroing players without a genuine result.

use crate::logic::discovery::StandingsTable;
use crate::models::MatchRecord;

/// Recompute `event_total` for every player, then reset players who never had a completed,
/// non-forfeited, scored match in either stage.
pub fn apply_totals(table: &mut StandingsTable, matches: &[MatchRecord]) {
    for stats in table.iter_mut() {
        stats.event_total = stats.weighted_total();
        let ever_played = matches
            .iter()
            .any(|m| m.has_genuine_result() && m.involves(&stats.player));
        if !ever_played {
            stats.reset();
        }
    }
}
