pub mod config;
pub mod trivia;

pub use config::TriviaConfig;
pub use trivia::{FetchError, Question, QuestionBatch, TriviaClient};
