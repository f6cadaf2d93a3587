use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::TextGenerator;
use crate::domain::{DomainError, GenerationParams};

/// One recorded `generate` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub prompt: String,
    pub params: GenerationParams,
}

/// In-memory [`TextGenerator`] for tests and offline runs.
///
/// Returns a canned reply (or a forced failure) and records every call so
/// tests can assert on the exact prompt and decoding parameters that reached
/// the backend.
pub struct MockGenerator {
    reply: String,
    fail: bool,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockGenerator {
    pub fn new() -> Self {
        Self::with_reply("Respuesta de prueba.")
    }

    /// A mock that answers every prompt with `reply`.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            fail: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A mock whose `generate` always fails.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    /// Number of `generate` calls received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("mock call log poisoned").len()
    }

    /// The most recent recorded call, if any.
    pub fn last_call(&self) -> Option<RecordedCall> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .last()
            .cloned()
    }
}

impl Default for MockGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, DomainError> {
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push(RecordedCall {
                prompt: prompt.to_string(),
                params: *params,
            });

        if self.fail {
            return Err(DomainError::inference("mock generator failure"));
        }
        Ok(self.reply.clone())
    }

    fn model_name(&self) -> &str {
        "mock-generator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_canned_reply_and_records_call() {
        let generator = MockGenerator::with_reply("hola");

        let reply = generator
            .generate("prompt text", &GenerationParams::default())
            .await
            .expect("mock should succeed");

        assert_eq!(reply, "hola");
        assert_eq!(generator.call_count(), 1);
        let call = generator.last_call().expect("call should be recorded");
        assert_eq!(call.prompt, "prompt text");
        assert_eq!(call.params, GenerationParams::default());
    }

    #[tokio::test]
    async fn failing_mock_records_call_before_erroring() {
        let generator = MockGenerator::failing();

        let err = generator
            .generate("p", &GenerationParams::default())
            .await
            .unwrap_err();

        assert!(err.is_inference_error());
        assert_eq!(generator.call_count(), 1);
    }
}
