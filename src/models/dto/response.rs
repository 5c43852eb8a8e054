use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::domain::GeneratedQuestion;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizResponseDto {
    pub questions: Vec<GeneratedQuestion>,
    pub question_count: usize,
    pub requested_count: u32,
    pub generated_at: DateTime<Utc>,
}

impl GenerateQuizResponseDto {
    pub fn new(questions: Vec<GeneratedQuestion>, requested_count: u32) -> Self {
        GenerateQuizResponseDto {
            question_count: questions.len(),
            questions,
            requested_count,
            generated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_counts_questions() {
        let questions = vec![
            GeneratedQuestion::new("Q1", &["True", "False"], "True"),
            GeneratedQuestion::new("Q2", &["True", "False"], "False"),
        ];

        let dto = GenerateQuizResponseDto::new(questions, 3);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["questionCount"], 2);
        assert_eq!(json["requestedCount"], 3);
        assert!(json.get("generatedAt").is_some());
    }
}
