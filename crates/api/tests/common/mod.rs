#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use cib_api::config::ServerConfig;
use cib_api::router::build_app_router;
use cib_api::state::AppState;
use cib_assistant::{AssistantConfig, GeminiClient};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::PgPool;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..Default::default()
    }
}

/// Build the full application router, with the chat relay disabled.
pub fn build_test_app(pool: PgPool) -> Router {
    build_app(pool, None)
}

/// Build the application with a chat client made from `assistant`.
pub fn build_test_app_with_chat(pool: PgPool, assistant: AssistantConfig) -> Router {
    let client = GeminiClient::new(&assistant).expect("test assistant config needs an API key");
    build_app(pool, Some(Arc::new(client)))
}

fn build_app(pool: PgPool, chat: Option<Arc<GeminiClient>>) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
        chat,
    };
    build_app_router(state).expect("test router should build")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// POST a raw body labelled as JSON, for malformed payloads.
pub async fn post_raw_json(app: Router, uri: &str, body: &'static str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

async fn send_json(app: Router, method: Method, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A complete, valid create payload.
pub fn project_payload(pid: i64, name: &str) -> Value {
    json!({
        "pid": pid,
        "projectName": name,
        "ministryDept": "Ministry of Infrastructure",
        "leadProgrammeManager": "Alice Johnson",
        "programmeManager": "Bob Smith",
        "type": "NEW",
        "fundAvailable": "YES",
        "contractValue": "$1,000,000",
        "description": "Renovation of the plaza.",
        "status": "Planning",
        "startDate": "2025-01-15",
        "completionDate": null,
        "isDraft": false
    })
}

/// Create a project through the API and return its JSON.
pub async fn create_project(pool: &PgPool, payload: Value) -> Value {
    let response = post_json(build_test_app(pool.clone()), "/api/projects", payload).await;
    assert_eq!(response.status(), 201);
    body_json(response).await
}
