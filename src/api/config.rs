//! Board configuration API

use wasm_bindgen::prelude::*;

use crate::api::helpers::{board_error, deserialize_or_default, serialize};
use crate::config::{self, BoardConfig};
use crate::wasm_info;

/// Install a configuration; omitted fields keep their defaults
#[wasm_bindgen(js_name = configureBoard)]
pub fn configure_board(config_js: JsValue) -> Result<(), JsValue> {
    let board_config: BoardConfig = deserialize_or_default(config_js, "Failed to deserialize board config")?;
    config::install(board_config.clone()).map_err(board_error)?;

    wasm_info!(
        "Board configured: {} emoji, {} popular tags, log level {}",
        board_config.emoji_palette.len(),
        board_config.popular_tags.len(),
        board_config.log_level
    );
    Ok(())
}

/// The active configuration
#[wasm_bindgen(js_name = getBoardConfig)]
pub fn get_board_config() -> Result<JsValue, JsValue> {
    serialize(&config::current(), "Failed to serialize board config")
}
