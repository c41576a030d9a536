//! Parsed score line from the upstream `scores_csv` field.

use crate::models::match_record::Side;
use serde::{Deserialize, Serialize};

/// Numeric result of a match, already assigned to player 1 / player 2.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Score {
    pub player1: i32,
    pub player2: i32,
}

impl Score {
    /// Parse a `"W-L"` score line. Only the first comma-separated set is read.
    ///
    /// With a known winner the first number is the winner's score; otherwise numbers are
    /// assigned positionally. Anything unparseable yields `None`.
    pub fn parse(raw: &str, winner: Option<Side>) -> Option<Self> {
        let set = raw.split(',').next()?.trim();
        let (first, second) = split_pair(set)?;
        Some(match winner {
            Some(Side::Two) => Score {
                player1: second,
                player2: first,
            },
            Some(Side::One) | None => Score {
                player1: first,
                player2: second,
            },
        })
    }

    /// Absolute score difference.
    pub fn difference(&self) -> u32 {
        self.player1.abs_diff(self.player2)
    }
}

fn split_pair(set: &str) -> Option<(i32, i32)> {
    // Start at 1: a leading '-' is the sign of the first number, not the separator.
    let (sep, _) = set.char_indices().skip(1).find(|&(_, c)| c == '-')?;
    let first = set[..sep].trim().parse().ok()?;
    let second = set[sep + 1..].trim().parse().ok()?;
    Some((first, second))
}
