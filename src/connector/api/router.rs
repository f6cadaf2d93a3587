use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use super::container::Container;
use super::controller;
use crate::domain::DomainError;

/// Assemble the HTTP router over a shared [`Container`].
///
/// Layers are applied before the state so the finished router is
/// self-contained; tests drive it directly with `tower::ServiceExt`.
pub fn build(container: Arc<Container>) -> Router {
    Router::new()
        .route("/", get(controller::chat_page))
        .route("/health", get(controller::health))
        .route("/api/ask", post(controller::ask))
        .route("/feedback", post(controller::record_feedback))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(container)
}

/// Browser clients may be served from anywhere, so cross-origin requests
/// are allowed unconditionally.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Bind `addr` and serve until ctrl-c.
pub async fn serve(container: Arc<Container>, addr: &str) -> Result<(), DomainError> {
    let model = container.model_name().to_string();
    let router = build(container);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(
        "Serving model {} on http://{}",
        model,
        listener.local_addr()?
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("Shutdown signal received, stopping server");
}
