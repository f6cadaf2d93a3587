use serde::{Deserialize, Serialize};

/// A correction submitted by a user about a previous answer.
///
/// Feedback is acknowledged and logged; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    question: String,
    response: String,
    correct_response: String,
}

impl Feedback {
    pub fn new(
        question: impl Into<String>,
        response: impl Into<String>,
        correct_response: impl Into<String>,
    ) -> Self {
        Self {
            question: question.into(),
            response: response.into(),
            correct_response: correct_response.into(),
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn response(&self) -> &str {
        &self.response
    }

    pub fn correct_response(&self) -> &str {
        &self.correct_response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_carries_all_fields() {
        let fb = Feedback::new("¿Qué es DNS?", "una base de datos", "un sistema de nombres");

        assert_eq!(fb.question(), "¿Qué es DNS?");
        assert_eq!(fb.response(), "una base de datos");
        assert_eq!(fb.correct_response(), "un sistema de nombres");
    }
}
