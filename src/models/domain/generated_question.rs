use serde::{Deserialize, Serialize};

/// One validated quiz question as produced by the generator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl GeneratedQuestion {
    pub fn new(question_text: &str, options: &[&str], correct_answer: &str) -> Self {
        GeneratedQuestion {
            question_text: question_text.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_answer: correct_answer.to_string(),
        }
    }

    /// Exact, case-sensitive comparison against the correct answer.
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }
}
