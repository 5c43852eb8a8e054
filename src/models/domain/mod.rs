pub mod generated_question;
pub mod generation_parameters;
pub mod quiz_attempt;
pub use generated_question::GeneratedQuestion;
pub use generation_parameters::{AcademicLevel, Difficulty, GenerationParameters, QuestionType};
pub use quiz_attempt::QuizAttempt;
