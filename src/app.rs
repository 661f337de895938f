use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::models::{AnswerResult, AppState, Question, QuestionSet, SessionState};
use crate::session::QuizSession;
use crate::summary::Summary;

/// Pause between answering and the "next question" prompt.
pub const DEFAULT_ADVANCE_DELAY: Duration = Duration::from_millis(3500);

/// Front-end settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizOptions {
    pub advance_delay: Duration,
}

impl Default for QuizOptions {
    fn default() -> Self {
        Self {
            advance_delay: DEFAULT_ADVANCE_DELAY,
        }
    }
}

/// Terminal front-end state wrapped around a [`QuizSession`].
///
/// The session owns scoring and sequencing; this type only adds what the
/// screens need: the option cursor, the feedback of the last answer, the
/// pause timer before the next question, and the per-question breakdown.
pub struct App {
    pub state: AppState,
    session: QuizSession,
    options: QuizOptions,
    selected_option: usize,
    last_answer: Option<AnswerResult>,
    answered_at: Option<Instant>,
    answers: Vec<Option<usize>>,
    result_scroll: usize,
    error: Option<String>,
}

impl App {
    pub fn new(session: QuizSession, options: QuizOptions) -> Self {
        let num_questions = session.total_questions();

        Self {
            state: AppState::Welcome,
            session,
            options,
            selected_option: 0,
            last_answer: None,
            answered_at: None,
            answers: vec![None; num_questions],
            result_scroll: 0,
            error: None,
        }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.session.current_question().ok()
    }

    pub fn current_question_number(&self) -> usize {
        self.session
            .current_index()
            .map_or(self.total_questions(), |index| index + 1)
    }

    pub fn total_questions(&self) -> usize {
        self.session.total_questions()
    }

    pub fn questions(&self) -> &QuestionSet {
        self.session.question_set()
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn selected_option(&self) -> usize {
        self.selected_option
    }

    pub fn last_answer(&self) -> Option<&AnswerResult> {
        self.last_answer.as_ref()
    }

    pub fn result_scroll(&self) -> usize {
        self.result_scroll
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn summary(&self) -> Option<Summary> {
        self.session.summary().ok()
    }

    /// Feedback line for the answered question.
    pub fn feedback(&self) -> Option<String> {
        let answer = self.last_answer?;
        if answer.is_correct {
            return Some("Correct!".to_string());
        }
        let correct = self.current_question()?.correct_option();
        Some(format!("Incorrect. The correct answer was: {correct}"))
    }

    pub fn start_quiz(&mut self) {
        self.state = AppState::Quiz;
    }

    pub fn select_next_option(&mut self) {
        if let Some(count) = self.selectable_options() {
            self.selected_option = (self.selected_option + 1) % count;
        }
    }

    pub fn select_previous_option(&mut self) {
        if let Some(count) = self.selectable_options() {
            self.selected_option = (self.selected_option + count - 1) % count;
        }
    }

    /// Enter/space: answer the highlighted option, or move on once the
    /// pause after an answer is over.
    pub fn confirm(&mut self, now: Instant) {
        match self.session.state() {
            SessionState::Presenting(_) => self.submit_answer(now),
            SessionState::Answered(_) => {
                if self.is_next_ready(now) {
                    self.advance();
                }
            }
            SessionState::Finished => {}
        }
    }

    /// Highlight `index` and answer with it.
    pub fn submit_option(&mut self, index: usize, now: Instant) {
        if !matches!(self.session.state(), SessionState::Presenting(_)) {
            return;
        }
        self.selected_option = index;
        self.submit_answer(now);
    }

    pub fn submit_answer(&mut self, now: Instant) {
        match self.session.submit_answer(self.selected_option) {
            Ok(result) => {
                if let Some(index) = self.session.current_index() {
                    self.answers[index] = Some(result.selected_index);
                }
                debug!(
                    selected = result.selected_index,
                    correct = result.correct_index,
                    is_correct = result.is_correct,
                    "answer submitted"
                );
                self.last_answer = Some(result);
                self.answered_at = Some(now);
                self.error = None;
            }
            Err(err) => {
                warn!(error = %err, "answer rejected");
                self.error = Some(err.to_string());
            }
        }
    }

    /// Whether the pause after the last answer has elapsed.
    pub fn is_next_ready(&self, now: Instant) -> bool {
        self.answered_at
            .is_some_and(|at| now.saturating_duration_since(at) >= self.options.advance_delay)
    }

    /// Time left before the next prompt appears, if a pause is running.
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        let at = self.answered_at?;
        Some(
            self.options
                .advance_delay
                .saturating_sub(now.saturating_duration_since(at)),
        )
    }

    /// Called on every event loop turn. The last question moves to the
    /// result screen by itself when its pause ends.
    pub fn tick(&mut self, now: Instant) {
        if self.session.is_last_question()
            && matches!(self.session.state(), SessionState::Answered(_))
            && self.is_next_ready(now)
        {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if let Err(err) = self.session.advance() {
            warn!(error = %err, "advance rejected");
            self.error = Some(err.to_string());
            return;
        }

        self.selected_option = 0;
        self.last_answer = None;
        self.answered_at = None;

        if self.session.state() == SessionState::Finished {
            if let Some(summary) = self.summary() {
                info!(
                    correct = summary.correct_count,
                    incorrect = summary.incorrect_count,
                    percentage = summary.percentage,
                    "quiz finished"
                );
            }
            self.state = AppState::Result;
        }
    }

    pub fn scroll_results_down(&mut self) {
        if self.result_scroll + 1 < self.answers.len() {
            self.result_scroll += 1;
        }
    }

    pub fn scroll_results_up(&mut self) {
        self.result_scroll = self.result_scroll.saturating_sub(1);
    }

    pub fn restart(&mut self) {
        self.session.reset();
        self.state = AppState::Quiz;
        self.selected_option = 0;
        self.last_answer = None;
        self.answered_at = None;
        self.answers = vec![None; self.session.total_questions()];
        self.result_scroll = 0;
        self.error = None;
        info!("quiz restarted");
    }

    fn selectable_options(&self) -> Option<usize> {
        match self.session.state() {
            SessionState::Presenting(_) => self.current_question().map(|q| q.options().len()),
            _ => None,
        }
    }
}
