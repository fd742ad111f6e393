//! Board configuration
//!
//! The host supplies a configuration once after the module loads; anything it
//! leaves out falls back to the defaults below.

use lazy_static::lazy_static;
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Mutex;

use crate::errors::ValidationError;
use crate::text::EmojiToken;

pub const DEFAULT_EMOJI_PALETTE: [&str; 10] = ["😊", "👍", "❤️", "😂", "🤔", "👏", "🔥", "💡", "✅", "❌"];

pub const DEFAULT_POPULAR_TAGS: [&str; 10] = [
    "React",
    "JavaScript",
    "TypeScript",
    "Node.js",
    "Python",
    "CSS",
    "HTML",
    "Express",
    "MongoDB",
    "SQL",
];

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    /// Glyphs offered by the composer's emoji row
    pub emoji_palette: Vec<EmojiToken>,

    /// Suggestions offered by the ask-question tag picker
    pub popular_tags: Vec<String>,

    /// `off`, `error`, `warn`, `info`, `debug` or `trace`
    pub log_level: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            emoji_palette: DEFAULT_EMOJI_PALETTE.iter().map(|e| EmojiToken::new(*e)).collect(),
            popular_tags: DEFAULT_POPULAR_TAGS.iter().map(|t| t.to_string()).collect(),
            log_level: "debug".to_string(),
        }
    }
}

impl BoardConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, ValidationError> {
        LevelFilter::from_str(&self.log_level).map_err(|_| ValidationError::Unknown {
            kind: "log level",
            name: self.log_level.clone(),
        })
    }
}

lazy_static! {
    static ref CONFIG: Mutex<BoardConfig> = Mutex::new(BoardConfig::default());
}

/// Snapshot of the active configuration
pub fn current() -> BoardConfig {
    match CONFIG.lock() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// Validate and install a new configuration, applying its log level
pub fn install(config: BoardConfig) -> Result<(), ValidationError> {
    let level = config.level_filter()?;
    log::set_max_level(level);

    match CONFIG.lock() {
        Ok(mut guard) => *guard = config,
        Err(poisoned) => *poisoned.into_inner() = config,
    }
    Ok(())
}
