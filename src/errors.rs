use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Failure of a single question generation call. Every variant is terminal:
/// no partial question set is ever returned alongside one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Generation service failed: {0}")]
    Upstream(String),

    #[error("Could not parse generated questions: {0}")]
    Parse(String),

    #[error("Generated question {index} has an invalid {field}: {reason}")]
    Validation {
        index: usize,
        field: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Quiz generation failed: {0}")]
    GenerationFailed(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::UpstreamError(_) => "UPSTREAM_ERROR",
            AppError::GenerationFailed(_) => "GENERATION_FAILED",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    pub kind: &'static str,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_) => StatusCode::BAD_GATEWAY,
            AppError::GenerationFailed(_) => StatusCode::BAD_GATEWAY,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
            kind: self.error_code(),
        })
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::Upstream(_) => AppError::UpstreamError(err.to_string()),
            GenerationError::Parse(_) | GenerationError::Validation { .. } => {
                AppError::GenerationFailed(err.to_string())
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(
            AppError::ValidationError("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::UpstreamError("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::GenerationFailed("test".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            AppError::InternalError("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_messages() {
        let err = AppError::ValidationError("questionCount".into());
        assert_eq!(err.to_string(), "Validation error: questionCount");
    }

    #[test]
    fn test_validation_error_names_index_and_field() {
        let err = GenerationError::Validation {
            index: 2,
            field: "correctAnswer",
            reason: "\"Paris\" is not one of the options".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Generated question 2 has an invalid correctAnswer: \"Paris\" is not one of the options"
        );
    }

    #[test]
    fn test_generation_errors_map_to_app_errors() {
        let upstream: AppError = GenerationError::Upstream("429 Too Many Requests".into()).into();
        assert_eq!(upstream.error_code(), "UPSTREAM_ERROR");

        let parse: AppError = GenerationError::Parse("no JSON array found".into()).into();
        assert_eq!(parse.error_code(), "GENERATION_FAILED");

        let validation: AppError = GenerationError::Validation {
            index: 0,
            field: "options",
            reason: "must not be empty".into(),
        }
        .into();
        assert_eq!(validation.error_code(), "GENERATION_FAILED");
        assert!(validation.to_string().contains("question 0"));
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let response = AppError::ValidationError("content must not be blank".into()).error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 400);
        assert_eq!(json["kind"], "VALIDATION_ERROR");
        assert_eq!(json["error"], "Validation error: content must not be blank");
    }
}
