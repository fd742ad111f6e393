//! Vote and acceptance operations
//!
//! WASM API functions for the answer list. Answers and overlays cross the
//! boundary as serde values; the overlay's `votes` field is a JS `Map` keyed
//! by answer id, so hosts should hand back the overlay they received.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{board_error, deserialize, deserialize_or_default, serialize};
use crate::api::types::VoteResult;
use crate::models::{self, Answer, AnswerId, VoteDirection, VoteOverlay, VoteState};
use crate::{wasm_info, wasm_log};

/// Next vote state after clicking `requested` (`up` | `down`) from `current`
#[wasm_bindgen(js_name = toggleVote)]
pub fn toggle_vote(current: &str, requested: &str) -> Result<String, JsValue> {
    let current: VoteState = current.parse().map_err(board_error)?;
    let requested: VoteDirection = requested.parse().map_err(board_error)?;
    Ok(models::toggle_vote(current, requested).as_str().to_string())
}

/// Apply a vote click to the viewer's overlay
///
/// `overlay` may be `undefined` on the first click of a session.
#[wasm_bindgen(js_name = toggleAnswerVote)]
pub fn toggle_answer_vote(overlay: JsValue, answer_id: u32, requested: &str) -> Result<JsValue, JsValue> {
    wasm_log!("toggleAnswerVote answer={} requested={}", answer_id, requested);

    let mut overlay: VoteOverlay = deserialize_or_default(overlay, "Failed to deserialize vote overlay")?;
    let requested: VoteDirection = requested.parse().map_err(board_error)?;

    let state = overlay.toggle(AnswerId(answer_id), requested);
    serialize(&VoteResult { overlay, state }, "Failed to serialize vote result")
}

/// Mark one answer accepted and clear every other answer's acceptance
#[wasm_bindgen(js_name = acceptAnswer)]
pub fn accept_answer(answers: JsValue, target_id: u32) -> Result<JsValue, JsValue> {
    wasm_info!("acceptAnswer target={}", target_id);

    let answers: Vec<Answer> = deserialize(answers, "Failed to deserialize answers")?;
    let accepted = models::accept_answer(&answers, AnswerId(target_id)).map_err(board_error)?;
    serialize(&accepted, "Failed to serialize answers")
}

/// Display rows (count, viewer vote, accepted flag) for the answer list
#[wasm_bindgen(js_name = getAnswerViews)]
pub fn get_answer_views(answers: JsValue, overlay: JsValue) -> Result<JsValue, JsValue> {
    let answers: Vec<Answer> = deserialize(answers, "Failed to deserialize answers")?;
    let overlay: VoteOverlay = deserialize_or_default(overlay, "Failed to deserialize vote overlay")?;

    serialize(&models::answer_views(&answers, &overlay), "Failed to serialize answer views")
}

/// Drop overlay entries for answers that are no longer listed
#[wasm_bindgen(js_name = pruneVoteOverlay)]
pub fn prune_vote_overlay(overlay: JsValue, answers: JsValue) -> Result<JsValue, JsValue> {
    let mut overlay: VoteOverlay = deserialize_or_default(overlay, "Failed to deserialize vote overlay")?;
    let answers: Vec<Answer> = deserialize(answers, "Failed to deserialize answers")?;

    overlay.retain_answers(&answers);
    serialize(&overlay, "Failed to serialize vote overlay")
}
