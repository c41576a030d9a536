//! Data structures for bracket standings: tournaments, match records, player stats.

mod match_record;
mod player;
mod score;
mod tournament;

pub use match_record::{
    MatchId, MatchRecord, MatchState, Side, Stage, BYE, GRAND_FINAL, THIRD_PLACE,
};
pub use player::{
    Participant, ParticipantId, PlayerStats, BYE_POINTS, CLOSE_LOSS_MARGIN, CLOSE_LOSS_POINTS,
    LOSS_POINTS, STREAK_STEP, WIN_POINTS,
};
pub use score::Score;
pub use tournament::{GroupStage, Tournament, TournamentId};
