mod loader;

pub use loader::{
    DEFAULT_QUESTIONS_PATH, LoadError, load_question_set, load_questions_from_json,
    load_questions_from_str,
};
