mod ask_question;
mod record_feedback;

pub use ask_question::*;
pub use record_feedback::*;
