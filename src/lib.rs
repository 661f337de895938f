//! # flashcard-quiz
//!
//! A multiple-choice quiz engine with a terminal front end.
//!
//! The engine is [`QuizSession`]: a strict state machine over a validated
//! [`QuestionSet`] that scores each question exactly once and produces a
//! [`Summary`] at the end. [`Quiz`] drives a session in the terminal.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use flashcard_quiz::{AppError, Quiz, QuizOptions};
//!
//! fn main() -> Result<(), AppError> {
//!     // Load questions from a JSON file
//!     let quiz = Quiz::from_json("questions.json", QuizOptions::default())?;
//!
//!     // Run the quiz in the terminal
//!     quiz.run()?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Or without any terminal:
//!
//! ```rust
//! use flashcard_quiz::{QuizSession, RawQuestion, SessionState};
//!
//! let mut session = QuizSession::new(vec![
//!     RawQuestion::new("2 + 2?", ["3", "4"], 1),
//! ])?;
//! assert!(session.submit_answer(1)?.is_correct);
//! session.advance()?;
//! assert_eq!(session.state(), SessionState::Finished);
//! assert_eq!(session.summary()?.percentage, 100);
//! # Ok::<(), flashcard_quiz::QuizError>(())
//! ```

mod app;
mod data;
mod error;
pub mod logging;
mod models;
mod session;
pub mod summary;
pub mod terminal;
mod ui;

use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use thiserror::Error;
use tracing::info;

pub use app::{App, DEFAULT_ADVANCE_DELAY, QuizOptions};
pub use data::{
    DEFAULT_QUESTIONS_PATH, LoadError, load_question_set, load_questions_from_json,
    load_questions_from_str,
};
pub use error::{MalformedReason, QuizError};
pub use models::{
    AnswerResult, AppState, MIN_OPTIONS, Question, QuestionSet, RawQuestion, ScoreTracker,
    SessionState,
};
pub use session::QuizSession;
pub use summary::{Grade, Summary};

/// Longest the event loop waits for input before re-checking timers.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Error type for running the terminal quiz.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load questions: {0}")]
    Quiz(#[from] QuizError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// A quiz instance that can be run in the terminal.
pub struct Quiz {
    app: App,
}

impl Quiz {
    /// Create a new quiz around a session.
    pub fn new(session: QuizSession, options: QuizOptions) -> Self {
        Self {
            app: App::new(session, options),
        }
    }

    /// Load a quiz from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing questions.
    /// * `options` - Front-end settings.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use flashcard_quiz::{Quiz, QuizOptions};
    ///
    /// let quiz = Quiz::from_json("questions.json", QuizOptions::default())
    ///     .expect("Failed to load quiz");
    /// ```
    pub fn from_json<P: AsRef<Path>>(path: P, options: QuizOptions) -> Result<Self, AppError> {
        let questions = load_question_set(path)?;
        info!(count = questions.len(), "question set ready");
        let session = QuizSession::with_question_set(questions.into());
        Ok(Self::new(session, options))
    }

    /// Run the quiz in the terminal.
    ///
    /// This will take over the terminal, display the quiz UI, and return
    /// when the user quits.
    pub fn run(mut self) -> Result<(), AppError> {
        let mut term = terminal::init()?;
        let result = run_event_loop(&mut term, &mut self.app);
        terminal::restore()?;
        result
    }

    /// Get a reference to the underlying app for custom handling.
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a mutable reference to the underlying app for custom handling.
    pub fn app_mut(&mut self) -> &mut App {
        &mut self.app
    }
}

fn run_event_loop(terminal: &mut terminal::AppTerminal, app: &mut App) -> Result<(), AppError> {
    loop {
        let now = Instant::now();
        app.tick(now);
        terminal.draw(|frame| ui::render(frame, app, now))?;

        // Wake up when the answer pause ends so the next prompt shows on time.
        let timeout = app
            .time_until_next(now)
            .filter(|left| !left.is_zero())
            .map_or(IDLE_POLL, |left| left.min(IDLE_POLL));

        if !event::poll(timeout)? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if handle_input(app, key.code, Instant::now()) {
                break;
            }
        }
    }

    Ok(())
}

/// Returns true if the app should exit.
fn handle_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match app.state {
        AppState::Welcome => handle_welcome_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key, now),
        AppState::Result => handle_result_input(app, key),
    }
}

fn handle_welcome_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Enter => {
            app.start_quiz();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_quiz_input(app: &mut App, key: KeyCode, now: Instant) -> bool {
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            app.select_previous_option();
            false
        }
        KeyCode::Down | KeyCode::Char('j') => {
            app.select_next_option();
            false
        }
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.confirm(now);
            false
        }
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(digit) = c.to_digit(10) {
                app.submit_option(digit as usize - 1, now);
            }
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

fn handle_result_input(app: &mut App, key: KeyCode) -> bool {
    match key {
        KeyCode::Down | KeyCode::Char('j') => {
            app.scroll_results_down();
            false
        }
        KeyCode::Up | KeyCode::Char('k') => {
            app.scroll_results_up();
            false
        }
        KeyCode::Char('r') | KeyCode::Char('R') => {
            app.restart();
            false
        }
        KeyCode::Char('q') | KeyCode::Char('Q') => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let session = QuizSession::new(vec![
            RawQuestion::new("Q0", ["a", "b", "c"], 2),
            RawQuestion::new("Q1", ["a", "b"], 0),
        ])
        .unwrap();
        App::new(
            session,
            QuizOptions {
                advance_delay: Duration::ZERO,
            },
        )
    }

    #[test]
    fn test_full_run_with_keys() {
        let mut app = app();
        let now = Instant::now();

        assert!(!handle_input(&mut app, KeyCode::Enter, now));
        assert_eq!(app.state, AppState::Quiz);

        handle_input(&mut app, KeyCode::Char('k'), now);
        assert_eq!(app.selected_option(), 2);
        handle_input(&mut app, KeyCode::Enter, now);
        assert!(app.last_answer().is_some_and(|a| a.is_correct));

        handle_input(&mut app, KeyCode::Enter, now);
        assert_eq!(app.session().state(), SessionState::Presenting(1));

        handle_input(&mut app, KeyCode::Char('2'), now);
        assert_eq!(app.session().state(), SessionState::Answered(1));
        app.tick(now);
        assert_eq!(app.state, AppState::Result);
        assert_eq!(app.summary().map(|s| s.percentage), Some(50));

        handle_input(&mut app, KeyCode::Char('r'), now);
        assert_eq!(app.state, AppState::Quiz);
        assert_eq!(app.session().score().answered(), 0);

        assert!(handle_input(&mut app, KeyCode::Char('q'), now));
    }

    #[test]
    fn test_digit_outside_options_is_reported() {
        let mut app = app();
        let now = Instant::now();
        app.start_quiz();

        handle_input(&mut app, KeyCode::Char('9'), now);
        assert_eq!(app.session().state(), SessionState::Presenting(0));
        assert!(app.error_message().is_some());
    }
}
