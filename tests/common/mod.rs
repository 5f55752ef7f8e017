use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use movie_catalog::app::create_app;
use movie_catalog::config::settings::AppConfig;
use movie_catalog::infrastructure::store::MemoryStore;
use movie_catalog::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

pub fn app() -> Router {
    create_app(AppState::new(
        AppConfig::default(),
        Arc::new(MemoryStore::new()),
    ))
}

/// Sends one request and returns the status with the decoded JSON body
/// (`Value::Null` for empty bodies, a string for non-JSON bodies).
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    send_raw(app, method, uri, body.map(|value| value.to_string())).await
}

pub async fn send_raw(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<String>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
