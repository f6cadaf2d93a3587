use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::connector::api::Container;
use crate::domain::Question;

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

/// `POST /api/ask`
///
/// Always answers 200: backend failures surface as the fallback text in the
/// body, never as an HTTP error. Clients render `answer` unconditionally.
pub async fn ask(
    State(container): State<Arc<Container>>,
    Json(request): Json<AskRequest>,
) -> Json<AskResponse> {
    let question = Question::new(request.question);
    let answer = container.ask_use_case().execute(&question).await;

    Json(AskResponse {
        answer: answer.text().to_string(),
    })
}
