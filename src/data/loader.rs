use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::{MalformedReason, QuizError};
use crate::models::{QuestionSet, RawQuestion};

pub const DEFAULT_QUESTIONS_PATH: &str = "questions.json";

/// Failure to obtain raw records from a question source.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read question file '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse questions from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read raw question records from a JSON file holding an array of objects.
///
/// # Errors
///
/// `QuizError::SourceUnavailable` if the file cannot be read or is not a JSON
/// array, `QuizError::MalformedQuestion` if an element has the wrong shape.
pub fn load_questions_from_json<P: AsRef<Path>>(path: P) -> Result<Vec<RawQuestion>, QuizError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "reading question file");

    let json_content = fs::read_to_string(path).map_err(|source| {
        warn!(path = %path.display(), error = %source, "question file unavailable");
        LoadError::Read {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let records = parse_records(&json_content, &path.display().to_string())?;
    info!(path = %path.display(), count = records.len(), "loaded question records");
    Ok(records)
}

/// Same as [`load_questions_from_json`] for JSON already in memory.
///
/// # Errors
///
/// See [`load_questions_from_json`].
pub fn load_questions_from_str(json: &str) -> Result<Vec<RawQuestion>, QuizError> {
    parse_records(json, "inline JSON")
}

/// Load and validate a question set in one step.
///
/// # Errors
///
/// Any loader error, or the validation errors of [`QuestionSet::build`].
pub fn load_question_set<P: AsRef<Path>>(path: P) -> Result<QuestionSet, QuizError> {
    QuestionSet::build(load_questions_from_json(path)?)
}

fn parse_records(json: &str, origin: &str) -> Result<Vec<RawQuestion>, QuizError> {
    let values: Vec<Value> = serde_json::from_str(json).map_err(|source| LoadError::Parse {
        origin: origin.to_string(),
        source,
    })?;

    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            serde_json::from_value(value).map_err(|err| QuizError::MalformedQuestion {
                index,
                reason: MalformedReason::InvalidShape(err.to_string()),
            })
        })
        .collect()
}
