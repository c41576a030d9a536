//! Integration tests for normalizing Challonge JSON into the scoring model.

use bracket_standings::challonge::wire::TournamentEnvelope;
use bracket_standings::{MatchState, Side, Stage, Tournament};

const FIXTURE: &str = r#"{
  "tournament": {
    "id": 9001,
    "name": "Friday Cup",
    "url": "friday_cup",
    "group_stages_enabled": true,
    "group_stages": [{ "id": 55, "identifier": "A" }],
    "participants": [
      { "participant": { "id": 1, "name": "alice", "display_name": "Alice", "group_player_ids": [101] } },
      { "participant": { "id": 2, "name": "Bob", "display_name": "", "group_player_ids": [102] } },
      { "participant": { "id": 3, "name": "Carol", "display_name": null, "group_player_ids": null } }
    ],
    "matches": [
      { "match": { "id": 10, "round": 1, "player1_id": 101, "player2_id": 102, "winner_id": 102,
                   "state": "complete", "scores_csv": "5-4", "forfeited": null, "group_id": 55,
                   "identifier": "A", "completed_at": "2024-03-01T19:30:00-05:00" } },
      { "match": { "id": 11, "round": 2, "player1_id": 101, "player2_id": null, "winner_id": null,
                   "state": "pending", "scores_csv": "", "forfeited": null, "group_id": 55,
                   "identifier": "B", "completed_at": null } },
      { "match": { "id": 12, "round": 1, "player1_id": 1, "player2_id": 3, "winner_id": 1,
                   "state": "complete", "scores_csv": "", "forfeited": true, "group_id": null,
                   "identifier": "G", "completed_at": "not a date" } },
      { "match": { "id": 13, "round": 1, "player1_id": 2, "player2_id": 999, "winner_id": 2,
                   "state": "awaiting_review", "scores_csv": "2-0", "group_id": null,
                   "identifier": "3P" } }
    ]
  }
}"#;

fn fixture() -> Tournament {
    let envelope: TournamentEnvelope = serde_json::from_str(FIXTURE).unwrap();
    Tournament::from(envelope.tournament)
}

#[test]
fn tournament_fields_and_participants() {
    let t = fixture();
    assert_eq!(t.id, 9001);
    assert_eq!(t.event_id(), "9001");
    assert_eq!(t.url, "friday_cup");
    let names: Vec<&str> = t.participants.iter().map(|p| p.name.as_str()).collect();
    // display_name wins; empty or null display_name falls back to name.
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    assert_eq!(t.participants[0].group_player_ids, vec![101]);
    assert!(t.participants[2].group_player_ids.is_empty());
    assert_eq!(t.group_label(55), Some("A"));
    assert_eq!(t.group_label(56), None);
}

#[test]
fn group_player_ids_resolve_to_names() {
    let t = fixture();
    let m = &t.matches[0];
    assert_eq!(m.stage(), Stage::Group);
    assert_eq!(m.player(Side::One), Some("Alice"));
    assert_eq!(m.player(Side::Two), Some("Bob"));
    assert_eq!(m.winner_side(), Some(Side::Two));
    assert_eq!(m.state, MatchState::Complete);
    assert!(!m.forfeited);
    let score = m.score.unwrap();
    assert_eq!((score.player1, score.player2), (4, 5));
    assert!(m.completed_at.is_some());
}

#[test]
fn empty_and_missing_fields_become_none() {
    let t = fixture();
    let pending = &t.matches[1];
    assert_eq!(pending.player2, None);
    assert_eq!(pending.scores_csv, None);
    assert_eq!(pending.score, None);
    assert_eq!(pending.state, MatchState::Pending);

    let forfeit = &t.matches[2];
    assert_eq!(forfeit.stage(), Stage::Final);
    assert!(forfeit.forfeited);
    assert_eq!(forfeit.completed_at, None);

    let odd = &t.matches[3];
    // Unknown states are never scored; unknown participants are absent.
    assert_eq!(odd.state, MatchState::Pending);
    assert_eq!(odd.player2, None);
    assert_eq!(odd.player2_id, Some(999));
    assert!(!odd.forfeited);
}

#[test]
fn fixture_standings() {
    let t = fixture();
    let standings = t.standings();
    assert_eq!(t.completed_match_counts(), (1, 1));

    let names: Vec<&str> = standings.iter().map(|s| s.player.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    // Alice's close loss is genuine; the forfeit grand-final win adds 6.
    let alice = &standings[0];
    assert_eq!(alice.swiss_close_losses, 1);
    assert_eq!(alice.finals_place, Some(1));
    assert_eq!(alice.event_total, 1.5 + 6.0);

    let bob = &standings[1];
    assert_eq!(bob.swiss_wins, 1);
    assert_eq!(bob.event_total, 3.0);

    // Carol only lost a forfeit: zeroed, placement kept.
    let carol = &standings[2];
    assert_eq!(carol.finals_place, Some(2));
    assert_eq!(carol.finals_points, 0);
    assert_eq!(carol.event_total, 0.0);
}
