use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::Container;
use crate::domain::Feedback;

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub question: String,
    pub response: String,
    pub correct_response: String,
}

#[derive(Debug, Serialize)]
pub struct FeedbackResponse {
    pub status: String,
}

/// `POST /feedback`
///
/// Records a user correction in the logs and acknowledges it.
pub async fn record_feedback(
    State(container): State<Arc<Container>>,
    Json(request): Json<FeedbackRequest>,
) -> Json<FeedbackResponse> {
    let feedback = Feedback::new(request.question, request.response, request.correct_response);
    let status = container.feedback_use_case().execute(&feedback);

    Json(FeedbackResponse {
        status: status.to_string(),
    })
}
