//! Bracket standings: library with models, the scoring engine, the Challonge client,
//! CSV export and the REST API.

pub mod api;
pub mod challonge;
pub mod config;
pub mod error;
pub mod export;
pub mod logic;
pub mod models;

pub use challonge::{ChallongeClient, FetchError};
pub use config::{AppConfig, ConfigError};
pub use error::StandingsError;
pub use export::{standings_csv_string, write_standings_csv, ExportError, CSV_HEADERS};
pub use logic::{
    apply_totals, compute_standings, discover_players, tabulate_finals, tabulate_group_play,
    FinalsAward, StandingsTable,
};
pub use models::{
    GroupStage, MatchId, MatchRecord, MatchState, Participant, ParticipantId, PlayerStats, Score,
    Side, Stage, Tournament, TournamentId, BYE, GRAND_FINAL, THIRD_PLACE,
};
