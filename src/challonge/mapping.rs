//! Normalization: Challonge wire types → Tournament / Participant / MatchRecord.

use crate::challonge::wire::{MatchWire, ParticipantWire, TournamentWire};
use crate::models::{
    GroupStage, MatchRecord, MatchState, Participant, ParticipantId, Tournament,
};
use chrono::DateTime;
use std::collections::HashMap;

impl From<ParticipantWire> for Participant {
    fn from(wire: ParticipantWire) -> Self {
        let name = wire
            .display_name
            .filter(|n| !n.trim().is_empty())
            .or(wire.name)
            .unwrap_or_default();
        Participant::new(wire.id, name.trim()).with_group_player_ids(wire.group_player_ids)
    }
}

impl From<TournamentWire> for Tournament {
    fn from(wire: TournamentWire) -> Self {
        let participants: Vec<Participant> = wire
            .participants
            .into_iter()
            .map(|p| Participant::from(p.participant))
            .collect();
        let names = participant_names(&participants);
        let matches = wire
            .matches
            .into_iter()
            .map(|m| match_record(m.inner, &names))
            .collect();
        let group_stages = wire
            .group_stages
            .into_iter()
            .map(|g| GroupStage {
                id: g.id,
                identifier: g.identifier,
            })
            .collect();

        Tournament {
            id: wire.id,
            name: wire.name,
            url: wire.url,
            group_stages_enabled: wire.group_stages_enabled,
            group_stages,
            participants,
            matches,
        }
    }
}

/// Every id a participant can appear under (main id and group-stage ids) → display name.
fn participant_names(participants: &[Participant]) -> HashMap<ParticipantId, &str> {
    let mut names = HashMap::new();
    for p in participants {
        names.insert(p.id, p.name.as_str());
        for &gid in &p.group_player_ids {
            names.insert(gid, p.name.as_str());
        }
    }
    names
}

fn match_record(wire: MatchWire, names: &HashMap<ParticipantId, &str>) -> MatchRecord {
    let name_of = |id: Option<u64>| id.and_then(|id| names.get(&id)).map(|n| n.to_string());
    let completed_at = wire
        .completed_at
        .as_deref()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok());

    let mut record = MatchRecord {
        id: wire.id,
        round: wire.round,
        player1: name_of(wire.player1_id),
        player2: name_of(wire.player2_id),
        player1_id: wire.player1_id,
        player2_id: wire.player2_id,
        winner_id: wire.winner_id,
        state: MatchState::from_upstream(&wire.state),
        forfeited: wire.forfeited.unwrap_or(false),
        group_id: wire.group_id,
        identifier: wire.identifier,
        completed_at,
        ..MatchRecord::default()
    };
    record.set_scores(wire.scores_csv.filter(|s| !s.trim().is_empty()));
    record
}
