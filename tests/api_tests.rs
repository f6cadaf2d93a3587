//! Integration tests for the HTTP API.
//!
//! These tests drive the axum router directly with tower's `oneshot`,
//! without binding a socket.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::util::ServiceExt;

use askdaniel::connector::api::router;
use askdaniel::{Container, ContainerConfig, MockGenerator, FALLBACK_ANSWER, FEEDBACK_ACK};

/// Build a router around a shared mock generator.
fn test_router(generator: Arc<MockGenerator>) -> Router {
    let container = Container::with_generator(ContainerConfig::default(), generator);
    router::build(Arc::new(container))
}

fn json_post(uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("Body should be JSON")
}

#[tokio::test]
async fn test_ask_returns_generated_answer() {
    let generator = Arc::new(MockGenerator::with_reply("La nube es infraestructura remota."));
    let app = test_router(generator.clone());

    let response = app
        .oneshot(json_post(
            "/api/ask",
            serde_json::json!({"question": "¿Qué es la nube?"}),
        ))
        .await
        .expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["answer"], "La nube es infraestructura remota.");

    let call = generator.last_call().expect("Generator should be called");
    assert!(call.prompt.contains("Pregunta: ¿Qué es la nube?"));
    assert!(call.prompt.contains("<<SYS>>"));
}

#[tokio::test]
async fn test_ask_failure_still_returns_200_with_fallback() {
    let generator = Arc::new(MockGenerator::failing());
    let app = test_router(generator.clone());

    let response = app
        .oneshot(json_post(
            "/api/ask",
            serde_json::json!({"question": "hola"}),
        ))
        .await
        .expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["answer"], FALLBACK_ANSWER);
    assert_eq!(generator.call_count(), 1);
}

#[tokio::test]
async fn test_malformed_ask_body_is_a_client_error() {
    let app = test_router(Arc::new(MockGenerator::new()));

    let request = Request::builder()
        .method("POST")
        .uri("/api/ask")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{\"pregunta\": \"sin campo question\"}"))
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to call router");
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health_reports_status_and_model() {
    let app = test_router(Arc::new(MockGenerator::new()));

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"], "mock-generator");
}

#[tokio::test]
async fn test_feedback_is_acknowledged() {
    let app = test_router(Arc::new(MockGenerator::new()));

    let response = app
        .oneshot(json_post(
            "/feedback",
            serde_json::json!({
                "question": "¿Qué es DNS?",
                "response": "una base de datos",
                "correct_response": "un sistema de resolución de nombres"
            }),
        ))
        .await
        .expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], FEEDBACK_ACK);
}

#[tokio::test]
async fn test_root_serves_the_chat_page() {
    let app = test_router(Arc::new(MockGenerator::new()));

    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("Failed to build request");

    let response = app.oneshot(request).await.expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .expect("Page should have a content type")
        .to_str()
        .expect("Content type should be ascii");
    assert!(content_type.starts_with("text/html"));

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();
    let page = String::from_utf8(bytes.to_vec()).expect("Page should be UTF-8");
    assert!(page.contains("/api/ask"));
}

#[tokio::test]
async fn test_cross_origin_requests_are_allowed() {
    let app = test_router(Arc::new(MockGenerator::new()));

    let mut request = json_post("/api/ask", serde_json::json!({"question": "hola"}));
    request
        .headers_mut()
        .insert(header::ORIGIN, "https://example.com".parse().expect("origin"));

    let response = app.oneshot(request).await.expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let allow_origin = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .expect("CORS header should be present");
    assert_eq!(allow_origin, "*");
}

#[tokio::test]
async fn test_empty_question_is_forwarded_not_rejected() {
    let generator = Arc::new(MockGenerator::with_reply("ok"));
    let app = test_router(generator.clone());

    let response = app
        .oneshot(json_post("/api/ask", serde_json::json!({"question": ""})))
        .await
        .expect("Failed to call router");

    assert_eq!(response.status(), StatusCode::OK);
    let call = generator.last_call().expect("Generator should be called");
    assert!(call.prompt.contains("Pregunta: \n"));
}
