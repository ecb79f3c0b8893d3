//! Request authentication.
//!
//! A request is authorized either by presenting the static API key in the
//! `x-api-key` header, or by presenting a bearer token whose decoded
//! payload carries `verified: true`. Authentication is a pure function of
//! the request headers and the static configuration.

pub mod token;

use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, StatusCode};
use http::request::Parts;
use tracing::{debug, warn};

use crate::config::AuthConfig;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

use token::decode_token;

/// How a request proved itself. Kept for logging; never surfaced to the
/// caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credential {
    ApiKey,
    BearerToken,
}

/// Holds the static secrets requests are checked against.
pub struct Auth {
    config: AuthConfig,
}

impl Auth {
    pub fn new(config: AuthConfig) -> Self {
        Auth { config }
    }

    /// Authenticates a request from its headers.
    ///
    /// The API key check wins outright when it matches; otherwise the
    /// `Authorization` header must parse as `Bearer <token>` (scheme
    /// case-insensitive) with a token that decodes to a verified payload.
    /// Absent or malformed headers simply yield `None`.
    pub fn authenticate(&self, headers: &HeaderMap) -> Option<Credential> {
        if let Some(key) = headers.get("x-api-key").and_then(|v| v.to_str().ok()) {
            if key == self.config.api_key {
                debug!("Request authenticated with the static API key");
                return Some(Credential::ApiKey);
            }
        }

        let auth_header = headers
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("");

        let mut parts = auth_header.split_whitespace();
        let (scheme, credentials) = match (parts.next(), parts.next(), parts.next()) {
            (Some(scheme), Some(credentials), None) => (scheme, credentials),
            _ => return None,
        };

        if !scheme.eq_ignore_ascii_case("bearer") {
            debug!("Unsupported authorization scheme: '{}'", scheme);
            return None;
        }

        match decode_token(credentials) {
            Ok(claims) if claims.verified => {
                debug!("Request authenticated with a verified bearer token");
                Some(Credential::BearerToken)
            }
            Ok(_) => {
                debug!("Bearer token decoded but its payload is not verified");
                None
            }
            Err(e) => {
                warn!("Failed to decode bearer token: {}", e);
                None
            }
        }
    }
}

/// The canonical rejection for requests that fail authentication.
pub fn unauthorized() -> HTTPError {
    HTTPError::new(
        StatusCode::UNAUTHORIZED,
        "Unauthorized",
        Some("Valid token or API key required"),
    )
}

/// Extractor implementation: handlers that take a `Credential` argument
/// require authentication, and unauthenticated requests are rejected with
/// the canonical 401 body.
impl FromRequestParts<AppState> for Credential {
    type Rejection = HTTPError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Credential, HTTPError> {
        match state.auth.authenticate(&parts.headers) {
            Some(credential) => Ok(credential),
            None => Err(unauthorized()),
        }
    }
}
