//! HTTP route definitions and handlers.
//!
//! This module organizes all HTTP endpoints into logical groups:
//! task management, login, and health checks.

mod health_routes;
mod login_routes;
mod task_routes;

use axum::http::{header, HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Creates the application router with all configured routes.
///
/// The route groups are served at the root and, when a deployment
/// prefix is configured, under that prefix as well, so requests
/// arriving through a path-rewriting front end resolve identically.
/// Paths outside the route table fall back to a JSON 404.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(task_routes::routes())
        .merge(login_routes::routes())
        .merge(health_routes::routes());

    let app = match state.config.route_prefix.as_deref() {
        Some(prefix) if !prefix.is_empty() => {
            Router::new().merge(api.clone()).nest(prefix, api)
        }
        _ => api,
    };

    app.fallback(endpoint_not_found)
        .layer(cors_layer())
        .with_state(state)
}

/// Permissive CORS for browser clients. OPTIONS preflights are answered
/// here, at the transport boundary, before routing.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-api-key"),
        ])
}

/// JSON 404 for paths outside the route table.
async fn endpoint_not_found() -> HTTPError {
    HTTPError::new(StatusCode::NOT_FOUND, "Endpoint not found", None::<&str>)
}

/// JSON 405 for known routes hit with an unsupported method.
pub(crate) async fn method_not_allowed() -> HTTPError {
    HTTPError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        None::<&str>,
    )
}
