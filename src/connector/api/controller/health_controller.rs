use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::connector::api::Container;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

/// `GET /health`
///
/// Liveness probe. Reports the model the service is configured to query
/// without calling the inference API.
pub async fn health(State(container): State<Arc<Container>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: container.model_name().to_string(),
    })
}
