mod question;
mod question_set;
mod score;
mod state;

pub use question::{MIN_OPTIONS, Question, RawQuestion};
pub use question_set::QuestionSet;
pub use score::ScoreTracker;
pub use state::{AnswerResult, AppState, SessionState};
