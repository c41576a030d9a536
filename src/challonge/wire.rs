//! Challonge v1 JSON shapes, as returned by `tournaments/{key}.json` with participants and
//! matches included. Every list entry is wrapped in a single-key envelope object.

use serde::{Deserialize, Deserializer};

/// `null` and missing both become `T::default()`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
pub struct TournamentEnvelope {
    pub tournament: TournamentWire,
}

#[derive(Debug, Deserialize)]
pub struct TournamentWire {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_stages_enabled: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_stages: Vec<GroupStageWire>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<ParticipantEnvelope>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub matches: Vec<MatchEnvelope>,
}

#[derive(Debug, Deserialize)]
pub struct GroupStageWire {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub identifier: String,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantEnvelope {
    pub participant: ParticipantWire,
}

#[derive(Debug, Deserialize)]
pub struct ParticipantWire {
    pub id: u64,
    pub name: Option<String>,
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub group_player_ids: Vec<u64>,
}

#[derive(Debug, Deserialize)]
pub struct MatchEnvelope {
    #[serde(rename = "match")]
    pub inner: MatchWire,
}

#[derive(Debug, Deserialize)]
pub struct MatchWire {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub round: i32,
    pub player1_id: Option<u64>,
    pub player2_id: Option<u64>,
    pub winner_id: Option<u64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    pub scores_csv: Option<String>,
    pub forfeited: Option<bool>,
    pub group_id: Option<u64>,
    pub identifier: Option<String>,
    /// RFC 3339; parsed leniently during normalization.
    pub completed_at: Option<String>,
}
