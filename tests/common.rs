use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use figment::providers::{Format, Yaml};
use figment::Figment;
use serde_json::Value;

use taskotron::auth::Auth;
use taskotron::config::{Config, ConfigV1};
use taskotron::routes::create_router;
use taskotron::state::AppState;
use taskotron::store::create_store;

pub const TEST_API_KEY: &str = "test-api-key";

const TEST_CONFIG: &str = r#"
version: "1.0.0"
logging:
  level: "debug"
  format: "json"
auth:
  api_key: "test-api-key"
  token_secret: "test-signing-secret"
store:
  type: memory
bind_address: 127.0.0.1:8081
"#;

pub fn load_test_config() -> ConfigV1 {
    let config: Config = Figment::new()
        .merge(Yaml::string(TEST_CONFIG))
        .extract()
        .expect("Failed to parse test config YAML");

    match config {
        Config::ConfigV1(cfg) => cfg,
    }
}

pub async fn build_app(config: ConfigV1) -> (Router, Arc<ConfigV1>) {
    let config = Arc::new(config);
    let store = create_store(&config.store).await;
    let auth = Arc::new(Auth::new(config.auth.clone()));

    let state = AppState {
        config: config.clone(),
        auth,
        store,
    };

    (create_router(state), config)
}

/// A request with no body and no authentication headers.
pub fn request(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .body(Body::empty())
        .expect("failed to build request")
}

/// A request authenticated with the static API key.
pub fn request_with_api_key(method: Method, path: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("x-api-key", TEST_API_KEY)
        .body(Body::empty())
        .expect("failed to build request")
}

/// A request authenticated with a bearer token.
pub fn request_with_bearer(method: Method, path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Authorization", format!("Bearer {}", token))
        .body(Body::empty())
        .expect("failed to build request")
}

/// A JSON-body request authenticated with the static API key.
pub fn json_request_with_api_key(method: Method, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("x-api-key", TEST_API_KEY)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// A JSON-body request with no authentication headers.
pub fn json_request(method: Method, path: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

/// Reads a response body as JSON.
pub async fn response_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body should be JSON")
}
