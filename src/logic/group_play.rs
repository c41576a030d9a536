//! Group stage: round-ordered Swiss tabulation, streak bonus and inferred byes.

use crate::logic::discovery::StandingsTable;
use crate::models::{MatchRecord, Side, Stage, STREAK_STEP};
use std::collections::{BTreeMap, HashMap};

/// How a completed group match affects the table.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Outcome<'a> {
    /// No score and not forfeited: nothing changes.
    Bye,
    Forfeit { winner: &'a str, loser: &'a str },
    Scored { winner: &'a str, loser: &'a str, difference: u32 },
}

/// Classify a completed group match. None means the match is skipped for scoring
/// (absent player, tie, or a winner id matching neither side).
fn classify(m: &MatchRecord) -> Option<Outcome<'_>> {
    let one = m.player(Side::One)?;
    let two = m.player(Side::Two)?;
    if !m.forfeited && m.score.is_none() {
        return Some(Outcome::Bye);
    }
    let (winner, loser) = match m.winner_side()? {
        Side::One => (one, two),
        Side::Two => (two, one),
    };
    if m.forfeited {
        return Some(Outcome::Forfeit { winner, loser });
    }
    let difference = m.score?.difference();
    Some(Outcome::Scored {
        winner,
        loser,
        difference,
    })
}

/// Process completed group matches round by round.
///
/// 1. Group completed group-stage matches by `round`, ascending.
/// 2. Apply each match: wins, close/regular losses, forfeits, streaks.
/// 3. Infer byes from the gap between rounds played and total rounds.
pub fn tabulate_group_play(table: &mut StandingsTable, matches: &[MatchRecord]) {
    let mut rounds: BTreeMap<i32, Vec<&MatchRecord>> = BTreeMap::new();
    for m in matches
        .iter()
        .filter(|m| m.stage() == Stage::Group && m.is_complete())
    {
        rounds.entry(m.round).or_default().push(m);
    }

    let mut streaks: HashMap<&str, u32> = HashMap::new();
    for round in rounds.values() {
        for &m in round {
            if let Some(outcome) = classify(m) {
                apply_outcome(table, &mut streaks, outcome);
            }
        }
    }

    count_byes(table, &rounds);
}

fn apply_outcome<'a>(
    table: &mut StandingsTable,
    streaks: &mut HashMap<&'a str, u32>,
    outcome: Outcome<'a>,
) {
    match outcome {
        Outcome::Bye => {}
        Outcome::Forfeit { winner, loser } => {
            // Forfeit wins count but neither build nor break the winner's streak.
            if let Some(s) = table.get_mut(winner) {
                s.record_swiss_win();
            }
            streaks.insert(loser, 0);
        }
        Outcome::Scored {
            winner,
            loser,
            difference,
        } => {
            let streak = streaks.entry(winner).or_insert(0);
            *streak += 1;
            let extends_streak = *streak >= 2;
            if let Some(s) = table.get_mut(winner) {
                s.record_swiss_win();
                if extends_streak {
                    s.streak_bonus += STREAK_STEP;
                }
            }
            streaks.insert(loser, 0);
            if let Some(s) = table.get_mut(loser) {
                s.record_swiss_loss(difference);
            }
        }
    }
}

/// `byes = max(0, total rounds - completed group matches played)` for every player.
fn count_byes(table: &mut StandingsTable, rounds: &BTreeMap<i32, Vec<&MatchRecord>>) {
    let total_rounds = rounds.len() as u32;
    for stats in table.iter_mut() {
        let played = rounds
            .values()
            .flatten()
            .filter(|m| m.involves(&stats.player))
            .count() as u32;
        stats.byes = total_rounds.saturating_sub(played);
    }
}
