use std::io::Write;
use std::sync::Arc;

use flashcard_quiz::{
    Grade, LoadError, QuizError, QuizSession, RawQuestion, SessionState, load_question_set,
    load_questions_from_json,
};
use tempfile::NamedTempFile;

fn write_questions(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn two_question_scenario() {
    let mut session = QuizSession::new(vec![
        RawQuestion::new("Q0", ["a", "b"], 1),
        RawQuestion::new("Q1", ["a", "b"], 0),
    ])
    .unwrap();

    assert!(session.submit_answer(1).unwrap().is_correct);
    session.advance().unwrap();

    let result = session.submit_answer(1).unwrap();
    assert!(!result.is_correct);
    assert_eq!(result.correct_index, 0);
    session.advance().unwrap();

    assert_eq!(session.state(), SessionState::Finished);
    let summary = session.summary().unwrap();
    assert_eq!(summary.correct_count, 1);
    assert_eq!(summary.incorrect_count, 1);
    assert_eq!(summary.total_count, 2);
    assert_eq!(summary.percentage, 50);
    assert_eq!(summary.message.as_str(), "needs practice");
}

#[test]
fn all_correct_out_of_five() {
    let raw: Vec<_> = (0..5)
        .map(|i| RawQuestion::new(format!("Q{i}"), ["a", "b", "c", "d"], i % 4))
        .collect();
    let mut session = QuizSession::new(raw).unwrap();

    for i in 0..5 {
        session.submit_answer(i % 4).unwrap();
        session.advance().unwrap();
    }

    let summary = session.summary().unwrap();
    assert_eq!(summary.percentage, 100);
    assert_eq!(summary.message, Grade::Excellent);

    session.reset();
    assert_eq!(session.state(), SessionState::Presenting(0));
    assert_eq!(session.score().correct(), 0);
    assert_eq!(session.score().incorrect(), 0);
    assert!(matches!(
        session.summary(),
        Err(QuizError::InvalidState { .. })
    ));
}

#[test]
fn loads_session_from_file() {
    let file = write_questions(
        r#"[
            {"text": "Largest planet?", "options": ["Mars", "Jupiter"], "correctIndex": 1},
            {"texto": "2 + 3?", "opciones": ["5", "6", "7"], "opcionCorrecta": 0}
        ]"#,
    );

    let questions = Arc::new(load_question_set(file.path()).unwrap());
    assert_eq!(questions.len(), 2);

    let mut session = QuizSession::with_question_set(questions);
    assert_eq!(session.current_question().unwrap().text(), "Largest planet?");
    session.submit_answer(1).unwrap();
    session.advance().unwrap();
    assert_eq!(session.current_question().unwrap().correct_option(), "5");
}

#[test]
fn file_errors_are_distinguished() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(
        load_questions_from_json(&missing),
        Err(QuizError::SourceUnavailable(LoadError::Read { .. }))
    ));

    let broken = write_questions("[{\"text\": ");
    assert!(matches!(
        load_questions_from_json(broken.path()),
        Err(QuizError::SourceUnavailable(LoadError::Parse { .. }))
    ));

    let empty = write_questions("[]");
    assert!(matches!(
        load_question_set(empty.path()),
        Err(QuizError::EmptySet)
    ));

    let out_of_range = write_questions(r#"[{"text": "Q", "options": ["a", "b"], "correctIndex": 2}]"#);
    assert!(matches!(
        load_question_set(out_of_range.path()),
        Err(QuizError::MalformedQuestion { index: 0, .. })
    ));
}

#[test]
fn bundled_questions_are_valid() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/questions.json");
    let questions = load_question_set(path).unwrap();
    assert_eq!(questions.len(), 5);
}
