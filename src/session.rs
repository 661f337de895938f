//! The quiz session state machine.
//!
//! A session walks a [`QuestionSet`] one question at a time:
//! `Presenting(i)` → `submit_answer` → `Answered(i)` → `advance` →
//! `Presenting(i + 1)` or `Finished`. Every call made in the wrong state is
//! rejected with `QuizError::InvalidState`, so a question can never be
//! scored twice and the summary can never be read early.

use std::sync::Arc;

use crate::error::QuizError;
use crate::models::{AnswerResult, Question, QuestionSet, RawQuestion, ScoreTracker, SessionState};
use crate::summary::{self, Summary};

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    score: ScoreTracker,
    state: SessionState,
}

impl QuizSession {
    /// Validate raw records and start a session on the first question.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`QuestionSet::build`].
    pub fn new<I>(raw: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = RawQuestion>,
    {
        let questions = QuestionSet::build(raw)?;
        Ok(Self::with_question_set(Arc::new(questions)))
    }

    /// Start a session over an already validated question set.
    pub fn with_question_set(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            score: ScoreTracker::new(),
            state: SessionState::Presenting(0),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> &ScoreTracker {
        &self.score
    }

    pub fn question_set(&self) -> &Arc<QuestionSet> {
        &self.questions
    }

    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.question_index()
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|index| index + 1 == self.questions.len())
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` once the session is finished.
    pub fn current_question(&self) -> Result<&Question, QuizError> {
        let index = self
            .current_index()
            .ok_or_else(|| self.invalid("current_question"))?;
        self.questions.get(index)
    }

    /// Score the selected option of the current question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless a question is being presented,
    /// and `QuizError::IndexOutOfRange` if `selected_index` is not one of its
    /// options. Neither error changes the score or the state.
    pub fn submit_answer(&mut self, selected_index: usize) -> Result<AnswerResult, QuizError> {
        let SessionState::Presenting(index) = self.state else {
            return Err(self.invalid("submit_answer"));
        };

        let question = self.questions.get(index)?;
        if selected_index >= question.options().len() {
            return Err(QuizError::IndexOutOfRange {
                index: selected_index,
                len: question.options().len(),
            });
        }

        let result = AnswerResult {
            selected_index,
            correct_index: question.correct_index(),
            is_correct: question.is_correct(selected_index),
        };

        self.score.record(result.is_correct);
        self.state = SessionState::Answered(index);
        Ok(result)
    }

    /// Move past an answered question.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` unless the current question has been
    /// answered.
    pub fn advance(&mut self) -> Result<(), QuizError> {
        let SessionState::Answered(index) = self.state else {
            return Err(self.invalid("advance"));
        };

        self.state = if index + 1 < self.questions.len() {
            SessionState::Presenting(index + 1)
        } else {
            SessionState::Finished
        };
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `QuizError::InvalidState` until every question is answered.
    pub fn summary(&self) -> Result<Summary, QuizError> {
        match self.state {
            SessionState::Finished => Ok(summary::compute(&self.score, self.questions.len())),
            _ => Err(self.invalid("summary")),
        }
    }

    /// Start over on the first question with a zero score.
    pub fn reset(&mut self) {
        self.score.reset();
        self.state = SessionState::Presenting(0);
    }

    fn invalid(&self, operation: &'static str) -> QuizError {
        QuizError::InvalidState {
            operation,
            state: self.state,
        }
    }
}
