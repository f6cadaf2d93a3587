use serde::{Deserialize, Serialize};

use super::Question;

/// Persona and instruction block placed inside the `<<SYS>>` section of
/// every prompt.
pub const DEFAULT_PERSONA: &str = "\
Eres Daniel Rada, experto en infraestructura cloud y ciberseguridad con 10+ años de experiencia.
Responde de forma concisa y profesional en el mismo idioma de la pregunta.
Si no sabes algo, di \"No tengo información sobre eso en mi experiencia\".";

/// Renders a question into the fixed Llama-instruct prompt.
///
/// The shape is deterministic: persona inside `[INST] <<SYS>> … <</SYS>>`,
/// then the question after a literal `Pregunta:` label. The submitted
/// question is embedded verbatim, with no escaping or trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptTemplate {
    persona: String,
}

impl PromptTemplate {
    pub fn new(persona: impl Into<String>) -> Self {
        Self {
            persona: persona.into(),
        }
    }

    pub fn persona(&self) -> &str {
        &self.persona
    }

    pub fn render(&self, question: &Question) -> String {
        format!(
            "\n[INST] <<SYS>>\n{}\n<</SYS>>\n\nPregunta: {}\n[/INST]\n",
            self.persona,
            question.text()
        )
    }
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::new(DEFAULT_PERSONA)
    }
}

/// Fixed decoding parameters for the generation call.
///
/// Deployment variants differ only in `max_new_tokens` (300 for the
/// serverless deployment, 512 for the full API); temperature and sampling
/// are fixed across variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationParams {
    max_new_tokens: u32,
    temperature: f32,
    do_sample: bool,
}

impl GenerationParams {
    pub fn with_max_new_tokens(mut self, max_new_tokens: u32) -> Self {
        self.max_new_tokens = max_new_tokens;
        self
    }

    pub fn max_new_tokens(&self) -> u32 {
        self.max_new_tokens
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn do_sample(&self) -> bool {
        self.do_sample
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 300,
            temperature: 0.3,
            do_sample: true,
        }
    }
}
