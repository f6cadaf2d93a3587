use tracing::info;

use crate::domain::Feedback;

/// Acknowledgement string returned to the caller.
pub const FEEDBACK_ACK: &str = "feedback received";

/// Logs a user correction and acknowledges it.
///
/// Persistence of feedback is out of scope; the log entry is the only
/// record.
pub struct RecordFeedbackUseCase;

impl RecordFeedbackUseCase {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, feedback: &Feedback) -> &'static str {
        info!(
            "Feedback received for question: {} (correction: {})",
            feedback.question(),
            feedback.correct_response()
        );
        FEEDBACK_ACK
    }
}

impl Default for RecordFeedbackUseCase {
    fn default() -> Self {
        Self::new()
    }
}
