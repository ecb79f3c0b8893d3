//! Login endpoint handlers.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use serde::Serialize;
use serde_json::Value;
use tracing::error;

use crate::auth::token::{encode_token, Claims};
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;
use crate::utils::validate::required_non_empty;

/// Registers the login route, with the trailing-slash alias.
pub fn routes() -> Router<AppState> {
    let login_route = post(login).fallback(super::method_not_allowed);
    Router::new()
        .route("/login", login_route.clone())
        .route("/login/", login_route)
}

#[derive(Serialize)]
struct LoginResponse {
    success: bool,
    token: String,
}

/// Demo login: any non-empty username/password pair is exchanged for a
/// verified bearer token. There is no user store and no credential
/// check beyond presence.
async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoginResponse>, HTTPError> {
    let body: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    if !required_non_empty(&body, "username").is_valid()
        || !required_non_empty(&body, "password").is_valid()
    {
        return Err(HTTPError::new(
            StatusCode::BAD_REQUEST,
            "Bad request",
            Some("Username and password required"),
        ));
    }

    let claims = Claims::issued(true);
    let token = encode_token(&claims, &state.config.auth.token_secret).map_err(|e| {
        error!("Failed to encode login token: {}", e);
        HTTPError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            None::<&str>,
        )
    })?;

    Ok(Json(LoginResponse {
        success: true,
        token,
    }))
}
