use std::sync::Arc;

use crate::{
    config::Config,
    services::{
        model_service::{CompletionService, OpenAiCompletionService},
        question_generator::QuestionGenerator,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub question_generator: Arc<QuestionGenerator>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let completion_service = Arc::new(OpenAiCompletionService::new(&config));
        Self::with_completion_service(config, completion_service)
    }

    /// Builds state around any completion service, e.g. a fake in tests.
    pub fn with_completion_service(
        config: Config,
        completion_service: Arc<dyn CompletionService>,
    ) -> Self {
        let question_generator =
            Arc::new(QuestionGenerator::from_config(completion_service, &config));

        Self {
            question_generator,
            config: Arc::new(config),
        }
    }
}
