pub mod client;
pub mod error;
pub mod model;

#[cfg(test)]
mod test_server;

pub use client::TriviaClient;
pub use error::FetchError;
pub use model::{Question, QuestionBatch};
