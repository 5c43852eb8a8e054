use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Graded result of one pass through a generated quiz.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub correct: u32,
    pub total: u32,
    pub percentage: u8,
    pub question_answers: Vec<QuizAttemptQuestion>,
    pub submitted_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttemptQuestion {
    pub index: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitted_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[cfg(test)]
impl QuizAttempt {
    pub(crate) fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_attempt(correct: u32, total: u32) -> QuizAttempt {
        QuizAttempt {
            correct,
            total,
            percentage: 0,
            question_answers: vec![QuizAttemptQuestion {
                index: 0,
                submitted_answer: None,
                correct_answer: "True".to_string(),
                is_correct: false,
            }],
            submitted_at: Utc::now(),
        }
    }

    #[test]
    fn unanswered_question_omits_submitted_answer() {
        let attempt = make_attempt(0, 1);
        let json = serde_json::to_value(&attempt).unwrap();

        let answer = &json["questionAnswers"][0];
        assert!(answer.get("submittedAnswer").is_none());
        assert_eq!(answer["correctAnswer"], "True");
        assert_eq!(answer["isCorrect"], false);
    }

    #[test]
    fn perfect_attempt_requires_questions() {
        assert!(make_attempt(3, 3).is_perfect());
        assert!(!make_attempt(2, 3).is_perfect());
        assert!(!make_attempt(0, 0).is_perfect());
    }
}
