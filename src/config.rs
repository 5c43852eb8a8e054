use std::env;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::errors::{AppError, AppResult};

const DEFAULT_OPENAI_API_BASE: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TEMPERATURE: f64 = 0.7;
const DEFAULT_GENERATION_TIMEOUT_SECONDS: u64 = 120;
const DEFAULT_MAX_CONTENT_CHARS: usize = 100_000;

#[derive(Clone, Debug)]
pub struct Config {
    pub web_server_host: String,
    pub web_server_port: u16,
    pub openai_api_key: SecretString,
    pub openai_api_base: String,
    pub openai_model: String,
    pub generation_temperature: f64,
    pub generation_timeout_seconds: u64,
    pub max_content_chars: usize,
    pub cors_allowed_origin: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY").unwrap_or_default(),
            ),
            openai_api_base: env::var("OPENAI_API_BASE")
                .unwrap_or_else(|_| DEFAULT_OPENAI_API_BASE.to_string()),
            openai_model: env::var("OPENAI_MODEL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.to_string()),
            generation_temperature: env::var("GENERATION_TEMPERATURE")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or(DEFAULT_TEMPERATURE),
            generation_timeout_seconds: env::var("GENERATION_TIMEOUT_SECONDS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_GENERATION_TIMEOUT_SECONDS),
            max_content_chars: env::var("MAX_CONTENT_CHARS")
                .ok()
                .and_then(|c| c.parse().ok())
                .unwrap_or(DEFAULT_MAX_CONTENT_CHARS),
            cors_allowed_origin: env::var("CORS_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
        }
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_seconds)
    }

    /// Rejects configuration the server cannot generate quizzes with.
    pub fn validate(&self) -> AppResult<()> {
        let api_key = self.openai_api_key.expose_secret();

        if api_key.trim().is_empty() {
            return Err(AppError::InternalError(
                "OPENAI_API_KEY is not set. Set it to a valid API key for the generation service."
                    .to_string(),
            ));
        }

        if !(0.0..=2.0).contains(&self.generation_temperature) {
            return Err(AppError::InternalError(format!(
                "GENERATION_TEMPERATURE must be between 0.0 and 2.0, got {}",
                self.generation_temperature
            )));
        }

        if self.generation_timeout_seconds == 0 {
            return Err(AppError::InternalError(
                "GENERATION_TIMEOUT_SECONDS must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            openai_api_key: SecretString::from("test-openai-key".to_string()),
            openai_api_base: DEFAULT_OPENAI_API_BASE.to_string(),
            openai_model: DEFAULT_OPENAI_MODEL.to_string(),
            generation_temperature: DEFAULT_TEMPERATURE,
            generation_timeout_seconds: 5,
            max_content_chars: 2_000,
            cors_allowed_origin: "http://localhost:5173".to_string(),
        }
    }
}
