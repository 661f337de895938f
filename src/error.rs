//! Error types shared by the question set, the session and the loader.

use thiserror::Error;

use crate::data::LoadError;
use crate::models::SessionState;

/// Error type for every quiz operation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuizError {
    /// A raw record could not be turned into a question.
    #[error("question {index} is malformed: {reason}")]
    MalformedQuestion { index: usize, reason: MalformedReason },

    /// The question source produced no questions.
    #[error("the question set is empty")]
    EmptySet,

    /// The question source could not be read or parsed.
    #[error(transparent)]
    SourceUnavailable(#[from] LoadError),

    /// The operation is not allowed in the current session state.
    #[error("`{operation}` is not allowed while {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },

    /// A question or option index was outside its valid range.
    #[error("index {index} is out of range (length {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Why a raw record was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedReason {
    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("question text is empty")]
    EmptyText,

    #[error("needs at least 2 options, found {count}")]
    TooFewOptions { count: usize },

    #[error("option {option} is empty")]
    EmptyOption { option: usize },

    #[error("correct index {correct_index} does not reference one of {options} options")]
    CorrectIndexOutOfRange { correct_index: i64, options: usize },

    #[error("unexpected record shape: {0}")]
    InvalidShape(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = QuizError::MalformedQuestion {
            index: 2,
            reason: MalformedReason::TooFewOptions { count: 1 },
        };
        assert_eq!(
            err.to_string(),
            "question 2 is malformed: needs at least 2 options, found 1"
        );

        let err = QuizError::InvalidState {
            operation: "advance",
            state: SessionState::Presenting(0),
        };
        assert_eq!(
            err.to_string(),
            "`advance` is not allowed while presenting question 1"
        );
    }
}
