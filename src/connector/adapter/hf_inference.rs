use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::warn;

use crate::application::TextGenerator;
use crate::domain::{DomainError, GenerationParams};

/// Default target: the HuggingFace serverless Inference API.
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";
const MODELS_PATH: &str = "/models/";
/// Default model matches the deployed assistant.
pub const DEFAULT_MODEL: &str = "microsoft/Phi-4-mini-flash-reasoning";
/// Explicit per-request timeout. The original deployment relied on
/// client-library defaults; here the bound is always set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Text-generation request payload.
#[derive(serde::Serialize)]
struct ApiRequest<'a> {
    inputs: &'a str,
    parameters: ApiParameters,
}

#[derive(serde::Serialize)]
struct ApiParameters {
    max_new_tokens: u32,
    temperature: f32,
    do_sample: bool,
    /// Ask the API for the completion only, without echoing the prompt.
    return_full_text: bool,
}

/// Minimal subset of the text-generation response we care about.
#[derive(Deserialize)]
struct ApiGeneration {
    generated_text: String,
}

/// Error body the API returns alongside non-2xx statuses (and sometimes
/// with 200 while a model is loading).
#[derive(Deserialize)]
struct ApiErrorBody {
    error: String,
}

/// HTTP client for the HuggingFace text-generation Inference API.
///
/// Implements [`TextGenerator`] so the façade stays decoupled from transport
/// and serialization details.
///
/// **API token**: required; the serverless API rejects anonymous calls.
/// **Base URL**: defaults to `https://api-inference.huggingface.co` and can
/// point at any compatible endpoint (a dedicated inference endpoint, a local
/// TGI server).
pub struct HfInferenceClient {
    client: reqwest::Client,
    token: String,
    model: String,
    /// Full endpoint URL (base + MODELS_PATH + model).
    url: String,
}

impl HfInferenceClient {
    pub fn new(
        token: impl Into<String>,
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let base: String = base_url.into();
        let model: String = model.into();
        let url = format!("{}{}{}", base.trim_end_matches('/'), MODELS_PATH, model);
        Self {
            client: reqwest::Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
            token: token.into(),
            model,
            url,
        }
    }

    /// Full endpoint URL this client posts to (for startup logging).
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Parse the raw response body into the generated text.
    ///
    /// The API answers with a one-element array (`[{"generated_text": …}]`)
    /// for single inputs; some deployments return a bare object. An `error`
    /// body is surfaced as an inference error with the provider's message.
    fn parse_generated(body: &str) -> Result<String, DomainError> {
        if let Ok(generations) = serde_json::from_str::<Vec<ApiGeneration>>(body) {
            return generations
                .into_iter()
                .next()
                .map(|g| g.generated_text)
                .ok_or_else(|| DomainError::inference("API returned an empty generation list"));
        }
        if let Ok(generation) = serde_json::from_str::<ApiGeneration>(body) {
            return Ok(generation.generated_text);
        }
        if let Ok(err) = serde_json::from_str::<ApiErrorBody>(body) {
            return Err(DomainError::inference(err.error));
        }
        Err(DomainError::inference(format!(
            "unrecognized API response: {}",
            body
        )))
    }
}

#[async_trait]
impl TextGenerator for HfInferenceClient {
    async fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, DomainError> {
        let request = ApiRequest {
            inputs: prompt,
            parameters: ApiParameters {
                max_new_tokens: params.max_new_tokens(),
                temperature: params.temperature(),
                do_sample: params.do_sample(),
                return_full_text: false,
            },
        };

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.token)
            .json(&request)
            .send()
            .await
            .map_err(|e| DomainError::inference(format!("request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!("HfInferenceClient: API returned {status}: {body}");
            let message = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|e| e.error)
                .unwrap_or_else(|_| format!("API returned {status}"));
            return Err(DomainError::inference(message));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::inference(format!("failed to read response: {e}")))?;

        Self::parse_generated(&body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_generated_extracts_array_form() {
        let body = r#"[{"generated_text": "Un proxy inverso reenvía tráfico."}]"#;
        let text = HfInferenceClient::parse_generated(body).unwrap();
        assert_eq!(text, "Un proxy inverso reenvía tráfico.");
    }

    #[test]
    fn parse_generated_extracts_object_form() {
        let body = r#"{"generated_text": "Hola."}"#;
        let text = HfInferenceClient::parse_generated(body).unwrap();
        assert_eq!(text, "Hola.");
    }

    #[test]
    fn parse_generated_surfaces_provider_error() {
        let body = r#"{"error": "Model is currently loading"}"#;
        let err = HfInferenceClient::parse_generated(body).unwrap_err();
        assert!(err.is_inference_error());
        assert!(err.to_string().contains("Model is currently loading"));
    }

    #[test]
    fn parse_generated_rejects_empty_list() {
        let err = HfInferenceClient::parse_generated("[]").unwrap_err();
        assert!(err.is_inference_error());
    }

    #[test]
    fn parse_generated_rejects_garbage() {
        let err = HfInferenceClient::parse_generated("not json").unwrap_err();
        assert!(err.is_inference_error());
    }

    #[test]
    fn url_joins_base_and_model() {
        let client = HfInferenceClient::new(
            "tok",
            "some-org/some-model",
            "https://api-inference.huggingface.co/",
            Duration::from_secs(5),
        );
        assert_eq!(
            client.url(),
            "https://api-inference.huggingface.co/models/some-org/some-model"
        );
        assert_eq!(client.model_name(), "some-org/some-model");
    }
}
