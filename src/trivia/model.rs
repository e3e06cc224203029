use serde::{Deserialize, Serialize};

/// Top-level object returned by the questions endpoint.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionBatch {
    pub questions: Vec<Question>,
}

impl QuestionBatch {
    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// A single trivia item. Text fields are kept exactly as the server sent them,
/// HTML entities included.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub category: String,
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}
