use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Inference error: {0}")]
    InferenceError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DomainError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub fn inference(msg: impl Into<String>) -> Self {
        Self::InferenceError(msg.into())
    }

    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError(_))
    }

    pub fn is_inference_error(&self) -> bool {
        matches!(self, Self::InferenceError(_))
    }
}
