//! Integration tests for finals placement points.

use bracket_standings::{
    compute_standings, discover_players, tabulate_finals, FinalsAward, MatchRecord, MatchState,
    ParticipantId,
};

const ALICE: (ParticipantId, &str) = (1, "Alice");
const BOB: (ParticipantId, &str) = (2, "Bob");
const CAROL: (ParticipantId, &str) = (3, "Carol");
const DAVE: (ParticipantId, &str) = (4, "Dave");

fn final_match(
    id: u64,
    identifier: &str,
    p1: (ParticipantId, &str),
    p2: (ParticipantId, &str),
    winner: Option<ParticipantId>,
    score: Option<&str>,
) -> MatchRecord {
    MatchRecord::new(id, 3, Some(p1), Some(p2))
        .with_identifier(identifier)
        .completed(winner, score)
}

#[test]
fn grand_final_and_third_place_award_points() {
    let matches = vec![
        final_match(1, "3P", CAROL, DAVE, Some(3), Some("3-2")),
        final_match(2, "G", ALICE, BOB, Some(2), Some("3-1")),
    ];
    let standings = compute_standings("7", &matches);

    let summary: Vec<(&str, Option<u32>, u32, f64)> = standings
        .iter()
        .map(|s| (s.player.as_str(), s.finals_place, s.finals_points, s.event_total))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("Bob", Some(1), 6, 6.0),
            ("Alice", Some(2), 4, 4.0),
            ("Carol", Some(3), 3, 3.0),
            ("Dave", Some(4), 2, 2.0),
        ]
    );
}

#[test]
fn earlier_bracket_matches_award_nothing() {
    let matches = vec![final_match(1, "A", ALICE, BOB, Some(1), Some("3-0"))];
    let standings = compute_standings("7", &matches);
    for s in &standings {
        assert_eq!(s.finals_place, None);
        assert_eq!(s.finals_points, 0);
        assert_eq!(s.event_total, 0.0);
    }
}

#[test]
fn later_placement_overwrites_earlier_one() {
    let matches = vec![
        final_match(1, "3P", ALICE, CAROL, Some(3), Some("3-0")),
        final_match(2, "G", ALICE, BOB, Some(1), Some("3-0")),
    ];
    let mut table = discover_players("7", &matches);
    tabulate_finals(&mut table, &matches);
    let alice = table.get("Alice").unwrap();
    assert_eq!(alice.finals_place, Some(1));
    assert_eq!(alice.finals_points, 6);
}

#[test]
fn unresolved_or_incomplete_finals_are_skipped() {
    let mut pending = final_match(1, "G", ALICE, BOB, Some(1), Some("3-0"));
    pending.state = MatchState::Open;
    let matches = vec![
        pending,
        final_match(2, "3P", CAROL, DAVE, Some(42), Some("3-0")),
    ];
    let mut table = discover_players("7", &matches);
    tabulate_finals(&mut table, &matches);
    assert!(table.iter().all(|s| s.finals_place.is_none() && s.finals_points == 0));
}

#[test]
fn group_matches_never_award_finals_points() {
    let matches = vec![MatchRecord::new(1, 1, Some(ALICE), Some(BOB))
        .in_group(9)
        .with_identifier("G")
        .completed(Some(1), Some("3-0"))];
    let standings = compute_standings("7", &matches);
    assert!(standings.iter().all(|s| s.finals_points == 0));
}

#[test]
fn award_table() {
    assert_eq!(
        FinalsAward::for_identifier("G"),
        Some(FinalsAward {
            winner_place: 1,
            winner_points: 6,
            loser_place: 2,
            loser_points: 4
        })
    );
    assert_eq!(FinalsAward::for_identifier("3P").map(|a| a.loser_points), Some(2));
    assert_eq!(FinalsAward::for_identifier("F"), None);
}
