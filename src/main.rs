use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use flashcard_quiz::{DEFAULT_QUESTIONS_PATH, Quiz, QuizOptions, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    /// Pause after an answer before the next question can be shown
    #[arg(long, value_name = "MS", default_value_t = 3500)]
    advance_delay_ms: u64,

    /// Write logs to this file (RUST_LOG sets the level)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();
    logging::init_tracing(args.log_file.as_deref());

    let options = QuizOptions {
        advance_delay: Duration::from_millis(args.advance_delay_ms),
    };

    let quiz = match Quiz::from_json(&args.questions, options) {
        Ok(quiz) => quiz,
        Err(e) => {
            tracing::error!(error = %e, "startup failed");
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = quiz.run() {
        tracing::error!(error = %e, "quiz aborted");
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
