use actix_web::{get, post, web, HttpRequest, HttpResponse};
use validator::Validate;

use crate::{
    app_state::AppState,
    errors::AppError,
    middleware::get_request_id,
    models::dto::{
        request::{GenerateQuizRequestDto, GradeAttemptRequestDto},
        response::{GenerateQuizResponseDto, HealthResponse},
    },
    services::quiz_attempt_service::QuizAttemptService,
};

#[post("/api/quiz/generate")]
async fn generate_quiz(
    req: HttpRequest,
    state: web::Data<AppState>,
    request: web::Json<GenerateQuizRequestDto>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let content_chars = request.content.chars().count();
    if content_chars > state.config.max_content_chars {
        return Err(AppError::ValidationError(format!(
            "content is {} characters long, the limit is {}",
            content_chars, state.config.max_content_chars
        )));
    }

    let request_id = get_request_id(&req).unwrap_or_default();
    log::info!("[{}] Quiz generation requested", request_id);

    let questions = state
        .question_generator
        .generate(&request.content, &request.parameters)
        .await
        .map_err(|err| {
            log::warn!("[{}] Quiz generation failed: {}", request_id, err);
            AppError::from(err)
        })?;

    Ok(HttpResponse::Ok().json(GenerateQuizResponseDto::new(
        questions,
        request.parameters.question_count,
    )))
}

#[post("/api/quiz/grade")]
async fn grade_attempt(request: web::Json<GradeAttemptRequestDto>) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let attempt = QuizAttemptService::grade_attempt(
        request.question_type,
        &request.questions,
        &request.answers,
    )?;
    Ok(HttpResponse::Ok().json(attempt))
}

#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}
