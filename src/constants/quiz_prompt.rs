use crate::models::domain::{GenerationParameters, QuestionType};

pub const QUIZ_GENERATOR_PROMPT: &str = "You are a quiz generation agent that turns study material into quiz questions for students. Your output is parsed by a program, so its format is part of the task.

## CORE OBJECTIVES

1. Write questions that are answerable from the supplied content alone
2. Match the requested difficulty and the reading level of the stated audience
3. Cover distinct facts or concepts; do not ask the same thing twice
4. Make every incorrect option plausible but unambiguously wrong

## OUTPUT FORMAT SPECIFICATIONS

You MUST return a single JSON array and nothing else. No prose, no markdown, no code fences, no wrapping object.

Each element of the array is an object with exactly these fields:
- questionText: string (the question shown to the student, never empty)
- options: array of strings (the answer choices shown to the student)
- correctAnswer: string (copied character for character from one entry of options)

The correctAnswer must appear exactly once in options.";

const MULTIPLE_CHOICE_RULES: &str = "## QUESTION TYPE: multiple-choice

- Provide exactly 4 options for every question.
- Exactly one option is correct; the other three are wrong.
- Vary the position of the correct option across questions.
- Do not use \"All of the above\" or \"None of the above\".";

const TRUE_FALSE_RULES: &str = "## QUESTION TYPE: true-false

- Write every question as a statement that is either true or false.
- Provide exactly 2 options: \"True\" and \"False\", in that order.
- correctAnswer is either \"True\" or \"False\".";

const FILL_BLANK_RULES: &str = "## QUESTION TYPE: fill-blank

- Write every question as a sentence with the missing term replaced by \"_____\".
- Put the correct answer as the first entry of options. You may add up to three plausible distractors after it.
- correctAnswer repeats the first option exactly.";

const MULTIPLE_CHOICE_EXAMPLE: &str = r#"[
  {
    "questionText": "Which organelle produces most of a cell's ATP?",
    "options": ["Ribosome", "Mitochondrion", "Golgi apparatus", "Lysosome"],
    "correctAnswer": "Mitochondrion"
  }
]"#;

const TRUE_FALSE_EXAMPLE: &str = r#"[
  {
    "questionText": "Water boils at 100 degrees Celsius at sea level.",
    "options": ["True", "False"],
    "correctAnswer": "True"
  }
]"#;

const FILL_BLANK_EXAMPLE: &str = r#"[
  {
    "questionText": "The process by which plants convert light into chemical energy is called _____.",
    "options": ["photosynthesis", "respiration", "transpiration"],
    "correctAnswer": "photosynthesis"
  }
]"#;

fn type_rules(question_type: QuestionType) -> (&'static str, &'static str) {
    match question_type {
        QuestionType::MultipleChoice => (MULTIPLE_CHOICE_RULES, MULTIPLE_CHOICE_EXAMPLE),
        QuestionType::TrueFalse => (TRUE_FALSE_RULES, TRUE_FALSE_EXAMPLE),
        QuestionType::FillBlank => (FILL_BLANK_RULES, FILL_BLANK_EXAMPLE),
    }
}

/// System instruction fixing the output contract for one question type.
pub fn build_system_prompt(question_type: QuestionType) -> String {
    let (rules, example) = type_rules(question_type);

    format!(
        "{QUIZ_GENERATOR_PROMPT}\n\n{rules}\n\n## EXAMPLE OUTPUT\n\nA response containing one question looks exactly like this:\n\n{example}"
    )
}

/// Task instruction carrying the requested shape and the full source content.
pub fn build_task_prompt(content: &str, params: &GenerationParameters) -> String {
    format!(
        "Generate {count} {question_type} questions of {difficulty} difficulty for {audience} students about the following content.\n\nReturn exactly {count} questions as a JSON array.\n\n### CONTENT\n\n{content}",
        count = params.question_count,
        question_type = params.question_type,
        difficulty = params.difficulty,
        audience = params.academic_level.audience(),
    )
}
