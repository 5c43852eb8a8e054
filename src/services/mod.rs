pub mod model_service;
pub mod question_generator;
pub mod quiz_attempt_service;
pub mod response_parser;

pub use model_service::{CompletionRequest, CompletionService, OpenAiCompletionService};
pub use question_generator::QuestionGenerator;
