use serde::{Deserialize, Serialize};

/// Fixed user-facing reply used whenever the inference call fails.
///
/// The assistant answers in the language of the question, but failures are
/// reported in the persona's own language, matching the chat page copy.
pub const FALLBACK_ANSWER: &str = "Lo siento, ocurrió un error al procesar tu pregunta";

/// A free-text question submitted by the caller.
///
/// The text is treated as opaque: no validation beyond what the caller
/// already did. An empty question is forwarded to the provider as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    text: String,
}

impl Question {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Truncated copy for log lines; questions can be arbitrarily long.
    pub fn preview(&self, max_chars: usize) -> String {
        preview_chars(&self.text, max_chars)
    }
}

/// The assistant's reply: either provider-generated text or the fixed
/// fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    text: String,
}

impl Answer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The answer returned when the inference call failed.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_ANSWER.to_string(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_fallback(&self) -> bool {
        self.text == FALLBACK_ANSWER
    }

    pub fn preview(&self, max_chars: usize) -> String {
        preview_chars(&self.text, max_chars)
    }
}

/// Char-boundary-safe truncation with an ellipsis marker.
fn preview_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push('…');
    out
}
