use crate::models::domain::GeneratedQuestion;

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// `count` well-formed true/false questions, alternating answers.
    pub fn true_false_questions(count: usize) -> Vec<GeneratedQuestion> {
        (0..count)
            .map(|i| {
                let answer = if i % 2 == 0 { "True" } else { "False" };
                GeneratedQuestion::new(
                    &format!("Statement number {} about the study material.", i + 1),
                    &["True", "False"],
                    answer,
                )
            })
            .collect()
    }

    /// `count` well-formed four-option questions with the answer rotating
    /// through every position.
    pub fn multiple_choice_questions(count: usize) -> Vec<GeneratedQuestion> {
        (0..count)
            .map(|i| {
                let options: Vec<String> = (0..4).map(|o| format!("Option {}-{}", i + 1, o + 1)).collect();
                let option_refs: Vec<&str> = options.iter().map(String::as_str).collect();
                GeneratedQuestion::new(
                    &format!("Which option is correct for question {}?", i + 1),
                    &option_refs,
                    option_refs[i % 4],
                )
            })
            .collect()
    }

    /// Serializes questions in the format the generation service is asked for.
    pub fn questions_json(questions: &[GeneratedQuestion]) -> String {
        serde_json::to_string_pretty(questions).expect("questions should serialize")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_fixtures_true_false_questions() {
        let questions = true_false_questions(3);
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].correct_answer, "True");
        assert_eq!(questions[1].correct_answer, "False");
    }

    #[test]
    fn test_fixtures_multiple_choice_questions() {
        let questions = multiple_choice_questions(5);
        assert_eq!(questions.len(), 5);
        assert!(questions
            .iter()
            .all(|q| q.options.len() == 4 && q.options.contains(&q.correct_answer)));
        assert_eq!(questions[4].correct_answer, questions[4].options[0]);
    }

    #[test]
    fn test_fixtures_questions_json_uses_wire_keys() {
        let json = questions_json(&true_false_questions(1));
        assert!(json.contains("\"questionText\""));
        assert!(json.contains("\"correctAnswer\""));
    }
}
