//! Markup templates emitted by the composer
//!
//! The textual forms here must match exactly what downstream renderers
//! expect, so every template lives in this one place.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::ValidationError;

pub const BOLD: &str = "**";
pub const ITALIC: &str = "*";
pub const STRIKETHROUGH: &str = "~~";
pub const NUMBERED_ITEM: &str = "1. ";
pub const BULLET_ITEM: &str = "• ";

/// A prefix/suffix pair applied around the current selection
///
/// An empty suffix models a pure insertion before the selection (list
/// bullets) rather than a wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarkupOperation {
    pub prefix: String,
    #[serde(default)]
    pub suffix: String,
}

impl MarkupOperation {
    pub fn wrap(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), suffix: suffix.into() }
    }

    /// Prefix-only operation
    pub fn prefix(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into(), suffix: String::new() }
    }

    /// Same marker on both sides
    pub fn symmetric(marker: &str) -> Self {
        Self::wrap(marker, marker)
    }

    pub fn is_wrap(&self) -> bool {
        !self.suffix.is_empty()
    }
}

/// Horizontal alignment block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// CSS keyword for `text-align`
    pub fn css_keyword(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }

    pub fn markup(&self) -> MarkupOperation {
        MarkupOperation::wrap(
            format!("<div style=\"text-align: {};\">", self.css_keyword()),
            "</div>",
        )
    }
}

/// Composer toolbar buttons that map to a fixed markup operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolbarAction {
    Bold,
    Italic,
    Strikethrough,
    NumberedList,
    BulletList,
    AlignLeft,
    AlignCenter,
    AlignRight,
}

impl ToolbarAction {
    pub const ALL: [ToolbarAction; 8] = [
        ToolbarAction::Bold,
        ToolbarAction::Italic,
        ToolbarAction::Strikethrough,
        ToolbarAction::NumberedList,
        ToolbarAction::BulletList,
        ToolbarAction::AlignLeft,
        ToolbarAction::AlignCenter,
        ToolbarAction::AlignRight,
    ];

    pub fn markup(&self) -> MarkupOperation {
        match self {
            ToolbarAction::Bold => MarkupOperation::symmetric(BOLD),
            ToolbarAction::Italic => MarkupOperation::symmetric(ITALIC),
            ToolbarAction::Strikethrough => MarkupOperation::symmetric(STRIKETHROUGH),
            ToolbarAction::NumberedList => MarkupOperation::prefix(NUMBERED_ITEM),
            ToolbarAction::BulletList => MarkupOperation::prefix(BULLET_ITEM),
            ToolbarAction::AlignLeft => Alignment::Left.markup(),
            ToolbarAction::AlignCenter => Alignment::Center.markup(),
            ToolbarAction::AlignRight => Alignment::Right.markup(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ToolbarAction::Bold => "bold",
            ToolbarAction::Italic => "italic",
            ToolbarAction::Strikethrough => "strikethrough",
            ToolbarAction::NumberedList => "numbered_list",
            ToolbarAction::BulletList => "bullet_list",
            ToolbarAction::AlignLeft => "align_left",
            ToolbarAction::AlignCenter => "align_center",
            ToolbarAction::AlignRight => "align_right",
        }
    }
}

impl FromStr for ToolbarAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolbarAction::ALL
            .iter()
            .copied()
            .find(|action| action.name() == s)
            .ok_or_else(|| ValidationError::Unknown {
                kind: "toolbar action",
                name: s.to_string(),
            })
    }
}

/// Link payload; both fields must be non-empty before it may be applied
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LinkSpec {
    pub text: String,
    pub url: String,
}

impl LinkSpec {
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self { text: text.into(), url: url.into() }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.text.is_empty() {
            return Err(ValidationError::EmptyLinkText);
        }
        if self.url.is_empty() {
            return Err(ValidationError::EmptyLinkUrl);
        }
        Ok(())
    }

    /// `[text](url)`
    pub fn render(&self) -> String {
        format!("[{}]({})", self.text, self.url)
    }
}

/// Image payload
///
/// `source_ref` is an opaque handle from the upload collaborator (blob handle
/// or remote URL). Nothing checks that it resolves.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageSpec {
    pub alt_text: String,
    pub source_ref: String,
}

impl ImageSpec {
    pub fn new(alt_text: impl Into<String>, source_ref: impl Into<String>) -> Self {
        Self { alt_text: alt_text.into(), source_ref: source_ref.into() }
    }

    /// `![alt](src)`
    pub fn render(&self) -> String {
        format!("![{}]({})", self.alt_text, self.source_ref)
    }
}

/// A raw emoji glyph inserted verbatim
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmojiToken(pub String);

impl EmojiToken {
    pub fn new(glyph: impl Into<String>) -> Self {
        Self(glyph.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
