//! Error types for board operations
//!
//! Every error here is recoverable at the call site: the caller corrects its
//! input and invokes the operation again. No operation mutates anything when
//! it returns one of these.

use thiserror::Error;

use crate::models::answer::AnswerId;

/// Top-level board error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// A required field of a templated insertion or record was missing or invalid
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// An operation targeted a record that is not in the supplied collection
    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),
}

/// Input validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("link text must not be empty")]
    EmptyLinkText,

    #[error("link url must not be empty")]
    EmptyLinkUrl,

    #[error("tag must not be empty")]
    EmptyTag,

    #[error("tag '{0}' is already present")]
    DuplicateTag(String),

    #[error("a question can carry at most {max} tags")]
    TooManyTags { max: usize },

    #[error("question title must not be empty")]
    MissingTitle,

    #[error("question description must not be empty")]
    MissingDescription,

    #[error("a question needs at least one tag")]
    NoTags,

    /// Name of a toolbar action, vote direction or log level that is not recognized
    #[error("unknown {kind}: '{name}'")]
    Unknown { kind: &'static str, name: String },
}

/// Lookup failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("answer {0} is not part of this question")]
    Answer(AnswerId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_wraps_kinds() {
        let err: BoardError = ValidationError::EmptyLinkUrl.into();
        assert_eq!(err.to_string(), "Validation failed: link url must not be empty");

        let err: BoardError = NotFoundError::Answer(AnswerId(7)).into();
        assert_eq!(err.to_string(), "Not found: answer 7 is not part of this question");
    }

    #[test]
    fn test_unknown_name_message() {
        let err = ValidationError::Unknown { kind: "toolbar action", name: "underline".into() };
        assert_eq!(err.to_string(), "unknown toolbar action: 'underline'");
    }
}
