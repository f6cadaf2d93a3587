use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tracing::debug;

use crate::application::{AskQuestionUseCase, RecordFeedbackUseCase, TextGenerator};
use crate::connector::adapter::{
    HfInferenceClient, MockGenerator, DEFAULT_BASE_URL, DEFAULT_MODEL, DEFAULT_TIMEOUT_SECS,
};
use crate::domain::{DomainError, GenerationParams};

pub struct ContainerConfig {
    pub model: String,
    /// HuggingFace API token. Read from `HF_TOKEN`; required unless the
    /// mock generator is selected.
    pub token: Option<String>,
    pub base_url: String,
    pub max_new_tokens: u32,
    pub timeout_secs: u64,
    /// Answer from a canned in-memory generator instead of the real API.
    /// Lets the server run offline (demos, tests) without a token.
    pub mock_generator: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            token: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            max_new_tokens: GenerationParams::default().max_new_tokens(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            mock_generator: false,
        }
    }
}

impl ContainerConfig {
    /// Defaults overlaid with the `HF_TOKEN`, `HF_MODEL_NAME` and
    /// `HF_BASE_URL` environment variables.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(token) = std::env::var("HF_TOKEN") {
            config.token = Some(token);
        }
        if let Ok(model) = std::env::var("HF_MODEL_NAME") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("HF_BASE_URL") {
            config.base_url = base_url;
        }
        config
    }
}

/// Wires adapters into use cases once at startup; handlers receive it as
/// shared state and pull fresh use cases per request.
pub struct Container {
    generator: Arc<dyn TextGenerator>,
    config: ContainerConfig,
}

impl Container {
    pub fn new(config: ContainerConfig) -> Result<Self> {
        let generator: Arc<dyn TextGenerator> = if config.mock_generator {
            debug!("Using mock text generator");
            Arc::new(MockGenerator::new())
        } else {
            let token = config
                .token
                .clone()
                .ok_or_else(|| DomainError::config("HF_TOKEN environment variable is not set"))?;
            let client = HfInferenceClient::new(
                token,
                &config.model,
                &config.base_url,
                Duration::from_secs(config.timeout_secs),
            );
            debug!("Using HuggingFace inference at {}", client.url());
            Arc::new(client)
        };

        Ok(Self { generator, config })
    }

    /// Build around a caller-supplied generator. Used by tests to observe
    /// or script backend behavior.
    pub fn with_generator(config: ContainerConfig, generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator, config }
    }

    pub fn ask_use_case(&self) -> AskQuestionUseCase {
        AskQuestionUseCase::new(self.generator.clone()).with_params(
            GenerationParams::default().with_max_new_tokens(self.config.max_new_tokens),
        )
    }

    pub fn feedback_use_case(&self) -> RecordFeedbackUseCase {
        RecordFeedbackUseCase::new()
    }

    /// Model identifier reported by the health endpoint.
    pub fn model_name(&self) -> &str {
        self.generator.model_name()
    }
}
