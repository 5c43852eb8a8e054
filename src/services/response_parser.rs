use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::errors::GenerationError;
use crate::models::domain::{GeneratedQuestion, QuestionType};

static CODE_FENCE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"```(?i:json)?\s*").expect("CODE_FENCE_REGEX is a valid regex pattern")
});

// Start of the first array whose first element is an object.
static JSON_ARRAY_START_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\s*\{").expect("JSON_ARRAY_START_REGEX is a valid regex pattern")
});

const QUESTION_TEXT_KEYS: [&str; 4] = ["questionText", "question", "question_text", "text"];
const CORRECT_ANSWER_KEYS: [&str; 3] = ["correctAnswer", "correct_answer", "answer"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseStage {
    Direct,
    Extracted,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Parsed { value: Value, stage: ParseStage },
    ParseFailed(String),
}

impl ParseOutcome {
    pub(crate) fn into_result(self) -> Result<Value, GenerationError> {
        match self {
            ParseOutcome::Parsed { value, .. } => Ok(value),
            ParseOutcome::ParseFailed(reason) => Err(GenerationError::Parse(reason)),
        }
    }
}

pub fn strip_code_fences(raw: &str) -> String {
    CODE_FENCE_REGEX.replace_all(raw, "").trim().to_string()
}

/// Two-stage parse of a completion: the whole cleaned text first, then the
/// first array-of-objects substring. Only JSON arrays count as parsed.
pub fn parse_questions(raw: &str) -> ParseOutcome {
    let cleaned = strip_code_fences(raw);
    if cleaned.is_empty() {
        return ParseOutcome::ParseFailed("response was empty".to_string());
    }

    if let Ok(value @ Value::Array(_)) = serde_json::from_str::<Value>(&cleaned) {
        return ParseOutcome::Parsed {
            value,
            stage: ParseStage::Direct,
        };
    }

    let Some(start) = JSON_ARRAY_START_REGEX.find(&cleaned) else {
        return ParseOutcome::ParseFailed("no JSON array found in response".to_string());
    };

    // Reads exactly one value from the match, ignoring whatever follows it.
    let first_value = serde_json::Deserializer::from_str(&cleaned[start.start()..])
        .into_iter::<Value>()
        .next();

    match first_value {
        Some(Ok(value @ Value::Array(_))) => ParseOutcome::Parsed {
            value,
            stage: ParseStage::Extracted,
        },
        Some(Ok(_)) => ParseOutcome::ParseFailed("extracted JSON is not an array".to_string()),
        Some(Err(err)) => {
            ParseOutcome::ParseFailed(format!("extracted JSON array is malformed: {}", err))
        }
        None => ParseOutcome::ParseFailed("no JSON array found in response".to_string()),
    }
}

/// All-or-nothing structural validation. The first offending question fails
/// the whole batch.
pub fn validate_questions(
    value: &Value,
    question_type: QuestionType,
) -> Result<Vec<GeneratedQuestion>, GenerationError> {
    let items = value.as_array().ok_or_else(|| {
        GenerationError::Parse("response is not an array of questions".to_string())
    })?;

    if items.is_empty() {
        return Err(invalid(0, "questions", "no questions were returned"));
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| validate_question(index, item, question_type))
        .collect()
}

fn validate_question(
    index: usize,
    item: &Value,
    question_type: QuestionType,
) -> Result<GeneratedQuestion, GenerationError> {
    let object = item
        .as_object()
        .ok_or_else(|| invalid(index, "question", "expected a JSON object"))?;

    let question_text = first_string(object, &QUESTION_TEXT_KEYS)
        .ok_or_else(|| invalid(index, "questionText", "missing or empty"))?;

    let raw_options = object
        .get("options")
        .and_then(Value::as_array)
        .ok_or_else(|| invalid(index, "options", "missing or not an array"))?;

    if raw_options.is_empty() {
        return Err(invalid(index, "options", "must not be empty"));
    }

    let options = raw_options
        .iter()
        .enumerate()
        .map(|(position, option)| {
            option.as_str().map(str::to_string).ok_or_else(|| {
                invalid(index, "options", format!("option {} is not a string", position))
            })
        })
        .collect::<Result<Vec<String>, GenerationError>>()?;

    if let Some(arity) = question_type.arity() {
        if options.len() != arity {
            return Err(invalid(
                index,
                "options",
                format!(
                    "expected {} options for {} questions, found {}",
                    arity,
                    question_type,
                    options.len()
                ),
            ));
        }
    }

    let correct_answer = first_string(object, &CORRECT_ANSWER_KEYS)
        .ok_or_else(|| invalid(index, "correctAnswer", "missing or not a string"))?;

    match options.iter().filter(|option| *option == correct_answer).count() {
        0 => {
            return Err(invalid(
                index,
                "correctAnswer",
                format!("\"{}\" is not one of the options", correct_answer),
            ))
        }
        1 => {}
        _ => {
            return Err(invalid(
                index,
                "correctAnswer",
                format!("\"{}\" appears more than once among the options", correct_answer),
            ))
        }
    }

    Ok(GeneratedQuestion {
        question_text: question_text.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}

/// First synonym key holding a non-blank string.
fn first_string<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a str> {
    keys.iter().find_map(|key| {
        object
            .get(*key)
            .and_then(Value::as_str)
            .filter(|value| !value.trim().is_empty())
    })
}

fn invalid(index: usize, field: &'static str, reason: impl Into<String>) -> GenerationError {
    GenerationError::Validation {
        index,
        field,
        reason: reason.into(),
    }
}
