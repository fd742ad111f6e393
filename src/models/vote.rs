//! Viewer vote overlay
//!
//! Each viewer holds a tri-state vote per answer. The overlay is UI feedback
//! only: it highlights the viewer's own choice and never alters an answer's
//! authoritative vote count. Reconciling real counts belongs to the
//! persistence layer.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::answer::{Answer, AnswerId};
use crate::errors::ValidationError;

/// The viewer's current vote on one answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteState {
    Up,
    Down,
    #[default]
    None,
}

/// A click on the up or down arrow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteDirection {
    Up,
    Down,
}

impl From<VoteDirection> for VoteState {
    fn from(direction: VoteDirection) -> Self {
        match direction {
            VoteDirection::Up => VoteState::Up,
            VoteDirection::Down => VoteState::Down,
        }
    }
}

impl FromStr for VoteDirection {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(VoteDirection::Up),
            "down" => Ok(VoteDirection::Down),
            _ => Err(ValidationError::Unknown { kind: "vote direction", name: s.to_string() }),
        }
    }
}

impl FromStr for VoteState {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" | "" => Ok(VoteState::None),
            other => other.parse::<VoteDirection>().map(VoteState::from).map_err(|_| {
                ValidationError::Unknown { kind: "vote state", name: s.to_string() }
            }),
        }
    }
}

impl VoteState {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteState::Up => "up",
            VoteState::Down => "down",
            VoteState::None => "none",
        }
    }
}

/// Clicking the active direction clears the vote; any other click selects it
pub fn toggle_vote(current: VoteState, requested: VoteDirection) -> VoteState {
    let requested = VoteState::from(requested);
    if current == requested {
        VoteState::None
    } else {
        requested
    }
}

/// Count shown next to an answer
///
/// Always the authoritative count; the local vote is highlight-only.
pub fn display_votes(base_vote_count: i64, _local_vote: VoteState) -> i64 {
    base_vote_count
}

/// One viewer's votes across the answers of a question
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VoteOverlay {
    /// Opaque reference to the viewing user
    #[serde(default)]
    pub viewer: String,

    /// Answers without an entry read as `VoteState::None`
    #[serde(default)]
    votes: BTreeMap<AnswerId, VoteState>,
}

impl VoteOverlay {
    pub fn new(viewer: impl Into<String>) -> Self {
        Self { viewer: viewer.into(), votes: BTreeMap::new() }
    }

    pub fn get(&self, answer: AnswerId) -> VoteState {
        self.votes.get(&answer).copied().unwrap_or_default()
    }

    /// Apply one click and return the resulting state
    pub fn toggle(&mut self, answer: AnswerId, direction: VoteDirection) -> VoteState {
        let next = toggle_vote(self.get(answer), direction);
        match next {
            VoteState::None => {
                self.votes.remove(&answer);
            }
            state => {
                self.votes.insert(answer, state);
            }
        }
        log::debug!("viewer {:?} vote on answer {} -> {}", self.viewer, answer, next.as_str());
        next
    }

    /// Drop votes for answers that are no longer listed
    pub fn retain_answers(&mut self, answers: &[Answer]) {
        self.votes.retain(|id, _| answers.iter().any(|answer| answer.id == *id));
    }

    /// Answers carrying a non-neutral vote
    pub fn len(&self) -> usize {
        self.votes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.votes.is_empty()
    }
}

/// Per-answer display data for the list renderer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct AnswerView {
    pub id: AnswerId,
    pub display_votes: i64,
    pub vote: VoteState,
    pub is_accepted: bool,
}

/// Combine answers with the viewer's overlay, preserving answer order
pub fn answer_views(answers: &[Answer], overlay: &VoteOverlay) -> Vec<AnswerView> {
    answers
        .iter()
        .map(|answer| {
            let vote = overlay.get(answer.id);
            AnswerView {
                id: answer.id,
                display_votes: display_votes(answer.base_vote_count, vote),
                vote,
                is_accepted: answer.is_accepted,
            }
        })
        .collect()
}
