use std::fmt;

/// Where a quiz session is in its question sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Question `i` is shown and has not been answered.
    Presenting(usize),
    /// Question `i` has been answered and awaits `advance`.
    Answered(usize),
    /// Every question has been answered.
    Finished,
}

impl SessionState {
    /// Index of the question on display, `None` once finished.
    pub fn question_index(self) -> Option<usize> {
        match self {
            Self::Presenting(index) | Self::Answered(index) => Some(index),
            Self::Finished => None,
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Presenting(index) => write!(f, "presenting question {}", index + 1),
            Self::Answered(index) => write!(f, "question {} is answered", index + 1),
            Self::Finished => f.write_str("the quiz is finished"),
        }
    }
}

/// Which screen the terminal front end shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Welcome,
    Quiz,
    Result,
}

/// Outcome of a single answer submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnswerResult {
    pub selected_index: usize,
    pub correct_index: usize,
    pub is_correct: bool,
}
