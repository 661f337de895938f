use serde::{Deserialize, Serialize};

use crate::error::MalformedReason;

/// Minimum number of options a question must offer.
pub const MIN_OPTIONS: usize = 2;

/// A question record as it comes from a source, before validation.
///
/// Every field is optional so that a missing field can be reported as such
/// instead of failing the whole document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(alias = "texto")]
    pub text: Option<String>,
    #[serde(alias = "opciones")]
    pub options: Option<Vec<String>>,
    #[serde(
        rename = "correctIndex",
        alias = "correct_index",
        alias = "opcionCorrecta"
    )]
    pub correct_index: Option<i64>,
}

impl RawQuestion {
    pub fn new<T, O>(text: T, options: O, correct_index: i64) -> Self
    where
        T: Into<String>,
        O: IntoIterator,
        O::Item: Into<String>,
    {
        Self {
            text: Some(text.into()),
            options: Some(options.into_iter().map(Into::into).collect()),
            correct_index: Some(correct_index),
        }
    }
}

/// A validated multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_index: usize,
}

impl Question {
    /// Validate a raw record.
    ///
    /// # Errors
    ///
    /// Returns the first [`MalformedReason`] found: missing fields, blank
    /// text, fewer than [`MIN_OPTIONS`] options, a blank option, or a
    /// correct index that does not point at an option.
    pub fn from_raw(raw: RawQuestion) -> Result<Self, MalformedReason> {
        let text = raw.text.ok_or(MalformedReason::MissingField("text"))?;
        let options = raw
            .options
            .ok_or(MalformedReason::MissingField("options"))?;
        let correct_index = raw
            .correct_index
            .ok_or(MalformedReason::MissingField("correctIndex"))?;

        if text.trim().is_empty() {
            return Err(MalformedReason::EmptyText);
        }

        if options.len() < MIN_OPTIONS {
            return Err(MalformedReason::TooFewOptions {
                count: options.len(),
            });
        }

        if let Some(option) = options.iter().position(|o| o.trim().is_empty()) {
            return Err(MalformedReason::EmptyOption { option });
        }

        let correct_index = usize::try_from(correct_index)
            .ok()
            .filter(|i| *i < options.len())
            .ok_or(MalformedReason::CorrectIndexOutOfRange {
                correct_index,
                options: options.len(),
            })?;

        Ok(Self {
            text,
            options,
            correct_index,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }

    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_index
    }
}
