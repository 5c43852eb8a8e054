use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::{
    config::Config,
    constants::quiz_prompt::{build_system_prompt, build_task_prompt},
    errors::GenerationError,
    models::domain::{GeneratedQuestion, GenerationParameters},
    services::{
        model_service::{CompletionRequest, CompletionService},
        response_parser::{parse_questions, validate_questions, ParseOutcome},
    },
};

/// Turns study content into a validated question set with a single call to
/// the completion service. No retries and no placeholder fallback.
pub struct QuestionGenerator {
    completion_service: Arc<dyn CompletionService>,
    temperature: f64,
    timeout: Duration,
}

impl QuestionGenerator {
    pub fn new(
        completion_service: Arc<dyn CompletionService>,
        temperature: f64,
        timeout: Duration,
    ) -> Self {
        Self {
            completion_service,
            temperature,
            timeout,
        }
    }

    pub fn from_config(completion_service: Arc<dyn CompletionService>, config: &Config) -> Self {
        Self::new(
            completion_service,
            config.generation_temperature,
            config.generation_timeout(),
        )
    }

    /// `params` must already have passed caller-side validation.
    pub async fn generate(
        &self,
        content: &str,
        params: &GenerationParameters,
    ) -> Result<Vec<GeneratedQuestion>, GenerationError> {
        let request = CompletionRequest {
            system_prompt: build_system_prompt(params.question_type),
            user_prompt: build_task_prompt(content, params),
            temperature: self.temperature,
        };

        log::info!(
            "Generating {} {} questions ({} difficulty, {} level) from {} characters of content",
            params.question_count,
            params.question_type,
            params.difficulty,
            params.academic_level,
            content.chars().count()
        );
        let started = Instant::now();

        let raw = match tokio::time::timeout(self.timeout, self.completion_service.complete(request))
            .await
        {
            Ok(Ok(raw)) => raw,
            Ok(Err(err)) => {
                log::error!("Generation service call failed: {}", err);
                return Err(err);
            }
            Err(_) => {
                log::error!(
                    "Generation service did not respond within {}s",
                    self.timeout.as_secs()
                );
                return Err(GenerationError::Upstream(format!(
                    "generation service did not respond within {}s",
                    self.timeout.as_secs()
                )));
            }
        };

        let outcome = parse_questions(&raw);
        if let ParseOutcome::Parsed { stage, .. } = &outcome {
            log::debug!("Parsed generation response at stage {:?}", stage);
        }
        let value = outcome.into_result().map_err(|err| {
            log::warn!("Failed to parse generation response: {}", err);
            err
        })?;

        let questions = validate_questions(&value, params.question_type).map_err(|err| {
            log::warn!("Rejected generated questions: {}", err);
            err
        })?;

        if questions.len() != params.question_count as usize {
            log::warn!(
                "Generation service returned {} questions, {} were requested",
                questions.len(),
                params.question_count
            );
        }

        log::info!(
            "Generated {} questions in {}ms",
            questions.len(),
            started.elapsed().as_millis()
        );

        Ok(questions)
    }
}
