//! Answers and the one-accepted-answer rule

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::NotFoundError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerId(pub u32);

impl fmt::Display for AnswerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An answer to a question, as supplied by the persistence collaborator
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Answer {
    pub id: AnswerId,

    /// Marked-up body produced by the composer
    pub content: String,

    /// Display name of the author
    pub author: String,

    pub created_at: DateTime<Utc>,

    /// Authoritative vote count; local viewer votes never change it
    pub base_vote_count: i64,

    #[serde(default)]
    pub is_accepted: bool,
}

impl Answer {
    pub fn new(id: u32, content: impl Into<String>, author: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: AnswerId(id),
            content: content.into(),
            author: author.into(),
            created_at,
            base_vote_count: 0,
            is_accepted: false,
        }
    }
}

/// Mark `target` as the accepted answer and clear acceptance everywhere else
///
/// This is the only way acceptance changes, so the result always holds
/// exactly one accepted answer. Order is preserved. If `target` is absent the
/// input is left untouched and `NotFoundError` is returned.
pub fn accept_answer(answers: &[Answer], target: AnswerId) -> Result<Vec<Answer>, NotFoundError> {
    if !answers.iter().any(|answer| answer.id == target) {
        log::warn!("accept_answer: answer {} not found among {} answers", target, answers.len());
        return Err(NotFoundError::Answer(target));
    }

    Ok(answers
        .iter()
        .map(|answer| Answer {
            is_accepted: answer.id == target,
            ..answer.clone()
        })
        .collect())
}

/// The accepted answer, if any
pub fn accepted_answer(answers: &[Answer]) -> Option<&Answer> {
    answers.iter().find(|answer| answer.is_accepted)
}
