//! Ask-question form support
//!
//! Tag editing, draft validation and relative timestamps for the question
//! form and question header.

use chrono::{DateTime, Utc};
use wasm_bindgen::prelude::*;

use crate::api::helpers::{board_error, deserialize, deserialize_or_default, serialize, validation_error};
use crate::config;
use crate::models::{QuestionDraft, TagSet};
use crate::utils::format_time_ago as time_ago;

/// Add a tag to the draft's tag list, returning the new list
#[wasm_bindgen(js_name = addTag)]
pub fn add_tag(tags: JsValue, tag: &str) -> Result<JsValue, JsValue> {
    let mut tags: TagSet = deserialize_or_default(tags, "Failed to deserialize tags")?;
    tags.add(tag).map_err(board_error)?;
    serialize(&tags, "Failed to serialize tags")
}

/// Remove a tag from the draft's tag list, returning the new list
#[wasm_bindgen(js_name = removeTag)]
pub fn remove_tag(tags: JsValue, tag: &str) -> Result<JsValue, JsValue> {
    let mut tags: TagSet = deserialize_or_default(tags, "Failed to deserialize tags")?;
    tags.remove(tag);
    serialize(&tags, "Failed to serialize tags")
}

/// Check a draft before posting; the error names the first missing field
#[wasm_bindgen(js_name = validateQuestionDraft)]
pub fn validate_question_draft(draft: JsValue) -> Result<(), JsValue> {
    let draft: QuestionDraft = deserialize(draft, "Failed to deserialize question draft")?;
    draft.validate().map_err(board_error)
}

/// Tag suggestions for the ask-question form
#[wasm_bindgen(js_name = getPopularTags)]
pub fn get_popular_tags() -> js_sys::Array {
    config::current()
        .popular_tags
        .iter()
        .map(|tag| JsValue::from_str(tag))
        .collect()
}

/// "Just now", "5h ago" or "3d ago" for an RFC 3339 timestamp
#[wasm_bindgen(js_name = formatTimeAgo)]
pub fn format_time_ago(created_at: &str) -> Result<String, JsValue> {
    let created_at = DateTime::parse_from_rfc3339(created_at)
        .map_err(|e| validation_error(format!("Invalid timestamp '{}': {}", created_at, e)))?
        .with_timezone(&Utc);

    Ok(time_ago(created_at, Utc::now()))
}
