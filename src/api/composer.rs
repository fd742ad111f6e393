//! Composer toolbar operations
//!
//! WASM API functions behind the rich-text toolbar. Each call takes the
//! textarea value and its current selection (UTF-16 offsets, as reported by
//! the browser) and returns a `ComposeResult` the host applies back to the
//! textarea before restoring focus.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{board_error, serialize};
use crate::api::position::{selection_from_utf16, utf16_to_char};
use crate::api::types::ComposeResult;
use crate::text::{self, EmojiToken, ImageSpec, LinkSpec, MarkupOperation, ToolbarAction};
use crate::{config, wasm_log};

fn compose_result(composition: text::Composition) -> Result<JsValue, JsValue> {
    serialize(&ComposeResult::from(composition), "Failed to serialize compose result")
}

/// Wrap the selection in an arbitrary prefix/suffix pair
#[wasm_bindgen(js_name = applyMarkup)]
pub fn apply_markup(
    buffer: &str,
    selection_start: usize,
    selection_end: usize,
    prefix: &str,
    suffix: &str,
) -> Result<JsValue, JsValue> {
    wasm_log!("applyMarkup {:?}/{:?} at {}..{}", prefix, suffix, selection_start, selection_end);

    let selection = selection_from_utf16(buffer, selection_start, selection_end);
    let op = MarkupOperation::wrap(prefix, suffix);
    compose_result(text::apply_markup(buffer, selection, &op))
}

/// Apply a toolbar button by name (`bold`, `italic`, `align_center`, ...)
#[wasm_bindgen(js_name = applyToolbarAction)]
pub fn apply_toolbar_action(
    buffer: &str,
    selection_start: usize,
    selection_end: usize,
    action: &str,
) -> Result<JsValue, JsValue> {
    wasm_log!("applyToolbarAction {} at {}..{}", action, selection_start, selection_end);

    let action: ToolbarAction = action.parse().map_err(board_error)?;
    let selection = selection_from_utf16(buffer, selection_start, selection_end);
    compose_result(text::apply_action(buffer, selection, action))
}

/// Insert plain text at the caret
#[wasm_bindgen(js_name = insertAtCaret)]
pub fn insert_at_caret(buffer: &str, caret: usize, inserted: &str) -> Result<JsValue, JsValue> {
    let caret = utf16_to_char(buffer, caret);
    compose_result(text::insert_at_caret(buffer, caret, inserted))
}

/// Insert a `[text](url)` link at the start of the selection
#[wasm_bindgen(js_name = insertLink)]
pub fn insert_link(
    buffer: &str,
    selection_start: usize,
    selection_end: usize,
    link_text: &str,
    url: &str,
) -> Result<JsValue, JsValue> {
    wasm_log!("insertLink text={:?} url={:?}", link_text, url);

    let selection = selection_from_utf16(buffer, selection_start, selection_end);
    let spec = LinkSpec::new(link_text, url);
    let composition = text::insert_link(buffer, selection, &spec).map_err(board_error)?;
    compose_result(composition)
}

/// Insert an `![alt](src)` image reference at the caret
///
/// `source_ref` comes from the upload collaborator (e.g. an object URL).
#[wasm_bindgen(js_name = insertImage)]
pub fn insert_image(buffer: &str, caret: usize, alt_text: &str, source_ref: &str) -> Result<JsValue, JsValue> {
    wasm_log!("insertImage alt={:?}", alt_text);

    let caret = utf16_to_char(buffer, caret);
    compose_result(text::insert_image(buffer, caret, &ImageSpec::new(alt_text, source_ref)))
}

/// Insert an emoji glyph at the caret
#[wasm_bindgen(js_name = insertEmoji)]
pub fn insert_emoji(buffer: &str, caret: usize, emoji: &str) -> Result<JsValue, JsValue> {
    let caret = utf16_to_char(buffer, caret);
    compose_result(text::insert_emoji(buffer, caret, &EmojiToken::new(emoji)))
}

/// Emoji glyphs for the toolbar's emoji row
#[wasm_bindgen(js_name = getEmojiPalette)]
pub fn get_emoji_palette() -> js_sys::Array {
    config::current()
        .emoji_palette
        .iter()
        .map(|emoji| JsValue::from_str(emoji.as_str()))
        .collect()
}

/// Names accepted by `applyToolbarAction`
#[wasm_bindgen(js_name = getToolbarActions)]
pub fn get_toolbar_actions() -> js_sys::Array {
    ToolbarAction::ALL
        .iter()
        .map(|action| JsValue::from_str(action.name()))
        .collect()
}
