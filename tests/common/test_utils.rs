use super::mocks::MockTextGenerator;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use whisperer::{
    config::Config,
    relay::PromptRelay,
    server::{self, AppState, WHISPERER_PATH},
};

pub const TEST_TOKEN: &str = "hf_test_token_do_not_leak";

/// Create a test configuration pointing at `base_url`
pub fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.upstream.base_url = base_url.to_string();
    config.upstream.api_token = TEST_TOKEN.to_string();
    config
}

/// Router backed by the real Hugging Face client
pub fn create_app(config: &Config) -> Router {
    let relay = PromptRelay::from_config(config).unwrap();
    server::router(AppState {
        relay: Arc::new(relay),
    })
}

/// Router backed by a mock generator
pub fn create_mock_app(generator: Arc<MockTextGenerator>, config: &Config) -> Router {
    let relay = PromptRelay::new(generator, &config.upstream, &config.relay).unwrap();
    server::router(AppState {
        relay: Arc::new(relay),
    })
}

/// Send a request to the whisperer route and decode the JSON reply
pub async fn send(app: Router, method: &str, body: Option<String>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(WHISPERER_PATH);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    (status, json)
}

/// POST a prompt to the whisperer route
pub async fn post_prompt(app: Router, prompt: &str) -> (StatusCode, Value) {
    let body = serde_json::json!({ "prompt": prompt }).to_string();
    send(app, "POST", Some(body)).await
}

/// Address nothing is listening on
pub fn unreachable_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
