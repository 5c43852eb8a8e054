use chrono::Utc;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_attempt::{QuizAttempt, QuizAttemptQuestion};
use crate::models::domain::{GeneratedQuestion, QuestionType};

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade a quiz attempt. `answers` is aligned by index with `questions`;
    /// missing trailing answers count as unanswered.
    pub fn grade_attempt(
        question_type: QuestionType,
        questions: &[GeneratedQuestion],
        answers: &[Option<String>],
    ) -> AppResult<QuizAttempt> {
        if answers.len() > questions.len() {
            return Err(AppError::ValidationError(format!(
                "{} answers submitted for a quiz with {} questions",
                answers.len(),
                questions.len()
            )));
        }

        let question_answers: Vec<QuizAttemptQuestion> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let submitted_answer = answers.get(index).cloned().flatten();
                let is_correct = submitted_answer
                    .as_deref()
                    .is_some_and(|answer| Self::grade_question(question_type, question, answer));

                QuizAttemptQuestion {
                    index,
                    submitted_answer,
                    correct_answer: question.correct_answer.clone(),
                    is_correct,
                }
            })
            .collect();

        let correct = question_answers.iter().filter(|q| q.is_correct).count() as u32;
        let total = questions.len() as u32;

        Ok(QuizAttempt {
            correct,
            total,
            percentage: Self::percentage(correct, total),
            question_answers,
            submitted_at: Utc::now(),
        })
    }

    fn grade_question(question_type: QuestionType, question: &GeneratedQuestion, answer: &str) -> bool {
        match question_type {
            // Typed answers tolerate stray whitespace, nothing else
            QuestionType::FillBlank => question.correct_answer.trim() == answer.trim(),
            QuestionType::MultipleChoice | QuestionType::TrueFalse => question.is_correct(answer),
        }
    }

    /// Whole-number percentage, rounded half up.
    fn percentage(correct: u32, total: u32) -> u8 {
        if total == 0 {
            return 0;
        }
        ((correct * 100 + total / 2) / total) as u8
    }
}
