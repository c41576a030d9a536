//! CSV export of standings.

use crate::models::PlayerStats;
use serde::Serialize;
use std::io;

/// Column headers, in output order.
pub const CSV_HEADERS: [&str; 10] = [
    "Event ID",
    "Player",
    "Swiss Wins",
    "Swiss Losses",
    "Swiss Close Losses",
    "Byes",
    "Streak Bonus",
    "Finals Place",
    "Finals Points",
    "Event Total",
];

/// Errors while encoding standings as CSV.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV output is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

#[derive(Serialize)]
struct CsvRow<'a> {
    event_id: &'a str,
    player: &'a str,
    swiss_wins: u32,
    swiss_losses: u32,
    swiss_close_losses: u32,
    byes: u32,
    streak_bonus: f64,
    /// Empty cell when unplaced.
    finals_place: Option<u32>,
    finals_points: u32,
    event_total: f64,
}

impl<'a> From<&'a PlayerStats> for CsvRow<'a> {
    fn from(s: &'a PlayerStats) -> Self {
        Self {
            event_id: &s.event_id,
            player: &s.player,
            swiss_wins: s.swiss_wins,
            swiss_losses: s.swiss_losses,
            swiss_close_losses: s.swiss_close_losses,
            byes: s.byes,
            streak_bonus: s.streak_bonus,
            finals_place: s.finals_place,
            finals_points: s.finals_points,
            event_total: s.event_total,
        }
    }
}

/// Write a header row followed by one row per player, in the given order.
/// The header is written even when `standings` is empty.
pub fn write_standings_csv<W: io::Write>(writer: W, standings: &[PlayerStats]) -> Result<(), ExportError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(CSV_HEADERS)?;
    for s in standings {
        wtr.serialize(CsvRow::from(s))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Standings as a CSV string.
pub fn standings_csv_string(standings: &[PlayerStats]) -> Result<String, ExportError> {
    let mut buf = Vec::new();
    write_standings_csv(&mut buf, standings)?;
    Ok(String::from_utf8(buf)?)
}
