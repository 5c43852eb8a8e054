use async_openai::{config::OpenAIConfig, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::{json, Value};

#[cfg(test)]
use mockall::automock;

use crate::{config::Config, errors::GenerationError};

/// One chat completion: a system instruction, a user instruction and the
/// sampling temperature.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f64,
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Returns the raw text of the first completion choice.
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError>;
}

#[derive(Debug, Deserialize)]
struct ChatCompletionBody {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

pub struct OpenAiCompletionService {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiCompletionService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(config.openai_api_base.as_str());

        Self {
            client: Client::with_config(openai_config),
            model: config.openai_model.clone(),
        }
    }

    fn request_body(&self, request: &CompletionRequest) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": request.system_prompt },
                { "role": "user", "content": request.user_prompt }
            ],
            "temperature": request.temperature
        })
    }
}

/// Text of the first choice. A choice without content yields an empty string
/// so that the parser reports it; only a missing choice is an upstream fault.
fn first_completion_text(body: ChatCompletionBody) -> Result<String, GenerationError> {
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content.unwrap_or_default())
        .ok_or_else(|| GenerationError::Upstream("completion contained no choices".to_string()))
}

#[async_trait]
impl CompletionService for OpenAiCompletionService {
    async fn complete(&self, request: CompletionRequest) -> Result<String, GenerationError> {
        let body = self.request_body(&request);

        log::debug!("Sending chat completion request to model {}", self.model);

        let response: ChatCompletionBody = self
            .client
            .chat()
            .create_byot(body)
            .await
            .map_err(|e| GenerationError::Upstream(e.to_string()))?;

        first_completion_text(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(temperature: f64) -> CompletionRequest {
        CompletionRequest {
            system_prompt: "system".to_string(),
            user_prompt: "user".to_string(),
            temperature,
        }
    }

    #[test]
    fn test_request_body_uses_configured_model() {
        let mut config = Config::test_config();
        config.openai_model = "gpt-4o-mini".to_string();

        let body = OpenAiCompletionService::new(&config).request_body(&request(0.7));

        assert_eq!(body["model"], "gpt-4o-mini");
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "user");
    }

    #[test]
    fn test_request_body_carries_exact_temperature() {
        let service = OpenAiCompletionService::new(&Config::test_config());

        let body = service.request_body(&request(0.7));

        assert_eq!(body["temperature"].as_f64(), Some(0.7));
        assert_eq!(body["temperature"].to_string(), "0.7");
    }

    #[test]
    fn test_missing_content_is_handed_on_as_empty_text() {
        let body: ChatCompletionBody = serde_json::from_value(json!({
            "choices": [
                { "message": { "role": "assistant", "content": null } }
            ]
        }))
        .unwrap();

        assert_eq!(first_completion_text(body), Ok(String::new()));
    }

    #[test]
    fn test_no_choices_is_an_upstream_error() {
        let body: ChatCompletionBody = serde_json::from_value(json!({ "choices": [] })).unwrap();

        assert!(matches!(
            first_completion_text(body),
            Err(GenerationError::Upstream(_))
        ));
    }

    #[test]
    fn test_completion_body_tolerates_extra_fields() {
        let body: ChatCompletionBody = serde_json::from_value(json!({
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "choices": [
                { "index": 0, "message": { "role": "assistant", "content": "[]" }, "finish_reason": "stop" }
            ],
            "usage": { "prompt_tokens": 10, "completion_tokens": 1, "total_tokens": 11 }
        }))
        .unwrap();

        assert_eq!(body.choices[0].message.content.as_deref(), Some("[]"));
    }

    #[actix_web::test]
    async fn test_mock_service_returns_scripted_completion() {
        let mut mock = MockCompletionService::new();
        mock.expect_complete()
            .withf(|request| request.temperature == 0.7)
            .times(1)
            .returning(|_| Ok("[]".to_string()));

        let completion = mock.complete(request(0.7)).await;

        assert_eq!(completion, Ok("[]".to_string()));
    }
}
