use async_trait::async_trait;

use crate::domain::{DomainError, GenerationParams};

/// An interface for sending a rendered prompt to a text-generation backend
/// and receiving the generated text.
///
/// Implementors encapsulate transport, serialization, and vendor-specific
/// API details. Consumers (e.g. [`crate::application::AskQuestionUseCase`])
/// remain decoupled from any particular provider or HTTP client library,
/// and tests can substitute an in-process fake.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Send `prompt` with the given decoding parameters and return the
    /// generated text. A single attempt, no retries.
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, DomainError>;

    /// Identifier of the backing model, reported by the health endpoint.
    fn model_name(&self) -> &str;
}
