use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::models::domain::{GeneratedQuestion, GenerationParameters, QuestionType};

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("content must not be blank".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequestDto {
    #[validate(custom(function = "validate_not_blank"))]
    pub content: String,

    #[serde(flatten)]
    #[validate(nested)]
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GradeAttemptRequestDto {
    pub question_type: QuestionType,

    #[validate(length(min = 1, max = 50, message = "a quiz has between 1 and 50 questions"))]
    pub questions: Vec<GeneratedQuestion>,

    #[serde(default)]
    pub answers: Vec<Option<String>>,
}
