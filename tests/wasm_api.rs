//! WASM API tests
//!
//! Exercises the JavaScript-facing functions. Run with `wasm-pack test`.

#![cfg(target_arch = "wasm32")]

use board_wasm::api::*;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn compose(value: JsValue) -> ComposeResult {
    serde_wasm_bindgen::from_value(value).unwrap()
}

#[wasm_bindgen_test]
fn test_toolbar_bold_restores_utf16_selection() {
    // "😊 " is three UTF-16 units
    let result = compose(apply_toolbar_action("😊 world", 3, 8, "bold").unwrap());
    assert_eq!(result.buffer, "😊 **world**");
    assert_eq!((result.selection_start, result.selection_end), (5, 10));
}

#[wasm_bindgen_test]
fn test_unknown_action_is_error() {
    assert!(apply_toolbar_action("x", 0, 1, "underline").is_err());
}

#[wasm_bindgen_test]
fn test_insert_link_requires_both_fields() {
    assert!(insert_link("x", 0, 0, "", "https://a.b").is_err());
    let result = compose(insert_link("x", 0, 0, "a", "b").unwrap());
    assert_eq!(result.buffer, "[a](b)x");
    assert_eq!(result.selection_start, 6);
}

#[wasm_bindgen_test]
fn test_emoji_caret_in_utf16() {
    let result = compose(insert_emoji("hi", 2, "👍").unwrap());
    assert_eq!(result.selection_start, 4);
}

#[wasm_bindgen_test]
fn test_toggle_vote_names() {
    assert_eq!(toggle_vote("none", "up").unwrap(), "up");
    assert_eq!(toggle_vote("up", "up").unwrap(), "none");
    assert_eq!(toggle_vote("up", "down").unwrap(), "down");
    assert!(toggle_vote("none", "left").is_err());
}

#[wasm_bindgen_test]
fn test_overlay_round_trip() {
    let first: VoteResult = serde_wasm_bindgen::from_value(
        toggle_answer_vote(JsValue::UNDEFINED, 1, "up").unwrap(),
    )
    .unwrap();
    assert_eq!(first.state, board_wasm::VoteState::Up);

    let overlay = serde_wasm_bindgen::to_value(&first.overlay).unwrap();
    let second: VoteResult = serde_wasm_bindgen::from_value(toggle_answer_vote(overlay, 1, "up").unwrap()).unwrap();
    assert_eq!(second.state, board_wasm::VoteState::None);
}

#[wasm_bindgen_test]
fn test_accept_answer_missing_target() {
    let answers: Vec<board_wasm::Answer> = serde_json::from_str(
        r#"[{"id": 1, "content": "a", "author": "x", "created_at": "2024-01-15T11:30:00Z", "base_vote_count": 0}]"#,
    )
    .unwrap();
    let answers_js = serde_wasm_bindgen::to_value(&answers).unwrap();
    assert!(accept_answer(answers_js.clone(), 2).is_err());
    assert!(accept_answer(answers_js, 1).is_ok());
}

#[wasm_bindgen_test]
fn test_palettes_and_time() {
    assert_eq!(get_emoji_palette().length(), 10);
    assert_eq!(get_popular_tags().length(), 10);
    assert_eq!(get_toolbar_actions().length(), 8);
    assert!(format_time_ago("not a date").is_err());
    assert!(format_time_ago("2000-01-01T00:00:00Z").unwrap().ends_with("d ago"));
}
