pub mod application;
pub mod connector;
pub mod domain;

pub use application::{AskQuestionUseCase, RecordFeedbackUseCase, TextGenerator, FEEDBACK_ACK};

pub use connector::{Container, ContainerConfig, HfInferenceClient, MockGenerator};

pub use domain::{
    Answer, DomainError, Feedback, GenerationParams, PromptTemplate, Question, DEFAULT_PERSONA,
    FALLBACK_ANSWER,
};
