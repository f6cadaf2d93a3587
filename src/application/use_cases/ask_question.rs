use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error, info};
use uuid::Uuid;

use crate::application::TextGenerator;
use crate::domain::{Answer, GenerationParams, PromptTemplate, Question};

/// Longest question slice written to the log.
const QUESTION_PREVIEW_CHARS: usize = 120;
/// Longest answer slice written to the log.
const ANSWER_PREVIEW_CHARS: usize = 100;

/// The inference façade: renders the fixed prompt around a question, makes
/// exactly one generation call, and maps any failure to the fixed fallback
/// answer.
///
/// `execute` is infallible: provider errors never cross this
/// boundary. They are logged server-side and the caller receives
/// [`Answer::fallback`]. No retries, no backoff, no circuit breaking.
pub struct AskQuestionUseCase {
    generator: Arc<dyn TextGenerator>,
    template: PromptTemplate,
    params: GenerationParams,
}

impl AskQuestionUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            generator,
            template: PromptTemplate::default(),
            params: GenerationParams::default(),
        }
    }

    pub fn with_template(mut self, template: PromptTemplate) -> Self {
        self.template = template;
        self
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub async fn execute(&self, question: &Question) -> Answer {
        let request_id = Uuid::new_v4();
        let start_time = Instant::now();

        info!(
            request_id = %request_id,
            "Question received: {}",
            question.preview(QUESTION_PREVIEW_CHARS)
        );

        let prompt = self.template.render(question);

        match self.generator.generate(&prompt, &self.params).await {
            Ok(text) => {
                let answer = Answer::new(text);
                info!(
                    request_id = %request_id,
                    "Answer generated in {:.2}s: {}",
                    start_time.elapsed().as_secs_f64(),
                    answer.preview(ANSWER_PREVIEW_CHARS)
                );
                answer
            }
            Err(e) => {
                error!(request_id = %request_id, "Generation failed: {}", e);
                debug!(request_id = %request_id, "Returning fallback answer");
                Answer::fallback()
            }
        }
    }
}
