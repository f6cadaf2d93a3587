pub mod ask_controller;
pub mod feedback_controller;
pub mod health_controller;
pub mod page_controller;

pub use ask_controller::{ask, AskRequest, AskResponse};
pub use feedback_controller::{record_feedback, FeedbackRequest, FeedbackResponse};
pub use health_controller::{health, HealthResponse};
pub use page_controller::chat_page;
