//! Scoring engine: player discovery, group (Swiss) tabulation, finals tabulation, totals.
//!
//! Every function here is a pure, synchronous transformation of one match list.

mod discovery;
mod finals;
mod group_play;
mod totals;

pub use discovery::{discover_players, StandingsTable};
pub use finals::{tabulate_finals, FinalsAward};
pub use group_play::tabulate_group_play;
pub use totals::apply_totals;

use crate::models::{MatchRecord, PlayerStats};

/// Ranked standings for one tournament's matches, highest `event_total` first.
pub fn compute_standings(event_id: &str, matches: &[MatchRecord]) -> Vec<PlayerStats> {
    let mut table = discover_players(event_id, matches);
    tabulate_group_play(&mut table, matches);
    tabulate_finals(&mut table, matches);
    apply_totals(&mut table, matches);
    log::debug!(
        "event {}: {} matches, {} players scored",
        event_id,
        matches.len(),
        table.len()
    );
    table.into_ranked()
}
