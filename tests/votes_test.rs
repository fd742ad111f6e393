// Vote toggling and answer acceptance, including the property-based
// guarantees (toggle involution, single accepted answer).

use board_wasm::models::{
    accept_answer, accepted_answer, answer_views, toggle_vote, Answer, AnswerId, VoteDirection,
    VoteOverlay, VoteState,
};
use board_wasm::NotFoundError;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

fn answer(id: u32, is_accepted: bool) -> Answer {
    let at = Utc.with_ymd_and_hms(2024, 1, 15, 12, 15, 0).unwrap();
    Answer {
        is_accepted,
        base_vote_count: id as i64 * 3,
        ..Answer::new(id, format!("answer {}", id), "React Developer", at)
    }
}

fn vote_direction() -> impl Strategy<Value = VoteDirection> {
    prop_oneof![Just(VoteDirection::Up), Just(VoteDirection::Down)]
}

proptest! {
    // Holds from neutral or from the clicked direction; from the opposite
    // direction two clicks land on neutral (see test_opposite_vote_clicked_twice).
    #[test]
    fn toggle_twice_restores_state(direction in vote_direction(), from_neutral in any::<bool>()) {
        let state = if from_neutral { VoteState::None } else { VoteState::from(direction) };
        prop_assert_eq!(toggle_vote(toggle_vote(state, direction), direction), state);
    }

    #[test]
    fn accept_leaves_exactly_target_accepted(
        flags in proptest::collection::vec(any::<bool>(), 1..12),
        pick in any::<prop::sample::Index>(),
    ) {
        let answers: Vec<Answer> = flags
            .iter()
            .enumerate()
            .map(|(i, &accepted)| answer(i as u32 + 1, accepted))
            .collect();
        let target = answers[pick.index(answers.len())].id;

        let result = accept_answer(&answers, target).unwrap();
        let accepted: Vec<AnswerId> = result.iter().filter(|a| a.is_accepted).map(|a| a.id).collect();

        prop_assert_eq!(accepted, vec![target]);
        prop_assert_eq!(result.len(), answers.len());
    }
}

#[test]
fn test_opposite_vote_clicked_twice() {
    let once = toggle_vote(VoteState::Down, VoteDirection::Up);
    assert_eq!(once, VoteState::Up);
    assert_eq!(toggle_vote(once, VoteDirection::Up), VoteState::None);
}

#[test]
fn test_accept_scenario() {
    let answers = vec![answer(1, false), answer(2, true), answer(3, false)];
    let result = accept_answer(&answers, AnswerId(1)).unwrap();

    let flags: Vec<(u32, bool)> = result.iter().map(|a| (a.id.0, a.is_accepted)).collect();
    assert_eq!(flags, vec![(1, true), (2, false), (3, false)]);
    assert_eq!(accepted_answer(&result).map(|a| a.id), Some(AnswerId(1)));
}

#[test]
fn test_accept_absent_target_leaves_input() {
    let answers = vec![answer(1, false), answer(2, true)];
    let snapshot = answers.clone();

    assert_eq!(accept_answer(&answers, AnswerId(5)), Err(NotFoundError::Answer(AnswerId(5))));
    assert_eq!(answers, snapshot);
}

#[test]
fn test_viewer_click_scenario() {
    let mut overlay = VoteOverlay::new("alice");
    let id = AnswerId(1);

    assert_eq!(overlay.toggle(id, VoteDirection::Up), VoteState::Up);
    assert_eq!(overlay.toggle(id, VoteDirection::Up), VoteState::None);
    overlay.toggle(id, VoteDirection::Up);
    assert_eq!(overlay.toggle(id, VoteDirection::Down), VoteState::Down);
}

#[test]
fn test_views_show_base_count_regardless_of_vote() {
    let answers = vec![answer(1, true), answer(2, false)];
    let mut overlay = VoteOverlay::new("bob");
    overlay.toggle(AnswerId(1), VoteDirection::Up);
    overlay.toggle(AnswerId(2), VoteDirection::Down);

    let views = answer_views(&answers, &overlay);
    assert_eq!(views.iter().map(|v| v.display_votes).collect::<Vec<_>>(), vec![3, 6]);
    assert_eq!(views[0].vote, VoteState::Up);
    assert_eq!(views[1].vote, VoteState::Down);
    assert!(views[0].is_accepted);
}

#[test]
fn test_answers_from_json_fixture() {
    let fixture = r#"[
        {"id": 1, "content": "Redux Toolkit", "author": "Tech Expert",
         "created_at": "2024-01-15T11:30:00Z", "base_vote_count": 12, "is_accepted": true},
        {"id": 2, "content": "Context API", "author": "React Developer",
         "created_at": "2024-01-15T12:15:00Z", "base_vote_count": 5, "is_accepted": false}
    ]"#;
    let answers: Vec<Answer> = serde_json::from_str(fixture).unwrap();

    let result = accept_answer(&answers, AnswerId(2)).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json[0]["is_accepted"], false);
    assert_eq!(json[1]["is_accepted"], true);
    assert_eq!(json[1]["base_vote_count"], 5);
}
