use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    FillBlank,
}

impl QuestionType {
    /// Number of options every question of this type must carry, when fixed.
    pub fn arity(&self) -> Option<usize> {
        match self {
            QuestionType::MultipleChoice => Some(4),
            QuestionType::TrueFalse => Some(2),
            QuestionType::FillBlank => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalse => "true-false",
            QuestionType::FillBlank => "fill-blank",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcademicLevel {
    Elementary,
    Middle,
    High,
    University,
}

impl AcademicLevel {
    /// Audience phrase used in prompts.
    pub fn audience(&self) -> &'static str {
        match self {
            AcademicLevel::Elementary => "elementary school",
            AcademicLevel::Middle => "middle school",
            AcademicLevel::High => "high school",
            AcademicLevel::University => "university",
        }
    }
}

impl fmt::Display for AcademicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AcademicLevel::Elementary => write!(f, "elementary"),
            AcademicLevel::Middle => write!(f, "middle"),
            AcademicLevel::High => write!(f, "high"),
            AcademicLevel::University => write!(f, "university"),
        }
    }
}

/// Shape of a quiz to generate. Enum fields are closed by deserialization;
/// the count range is checked with `validate()` before generation starts.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParameters {
    pub question_type: QuestionType,
    pub difficulty: Difficulty,
    pub academic_level: AcademicLevel,
    #[validate(range(min = 1, max = 50, message = "questionCount must be between 1 and 50"))]
    pub question_count: u32,
}

impl GenerationParameters {
    pub fn new(
        question_type: QuestionType,
        difficulty: Difficulty,
        academic_level: AcademicLevel,
        question_count: u32,
    ) -> Self {
        Self {
            question_type,
            difficulty,
            academic_level,
            question_count,
        }
    }
}
