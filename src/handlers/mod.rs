pub mod quiz_handler;

use actix_web::web;

use crate::errors::AppError;

pub use quiz_handler::{generate_quiz, grade_attempt, health_check};

/// Registers every route plus a JSON extractor config that reports body
/// errors in the same shape as other validation failures.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
    )
    .service(health_check)
    .service(generate_quiz)
    .service(grade_attempt);
}
