use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

/// A general purpose HTTP error type that can be converted into an
/// `IntoResponse`.
///
/// The `error` field is the short taxonomy label ("Unauthorized",
/// "Bad request", ...); `message` optionally carries the human-readable
/// detail. Bodies render as `{"error": ...}` or
/// `{"error": ..., "message": ...}`.
pub struct HTTPError {
    status: StatusCode,
    error: String,
    message: Option<String>,
}

impl HTTPError {
    /// Creates a new HTTP error with the given status code, error label,
    /// and optional detail message.
    pub fn new(
        status: StatusCode,
        error: impl Into<String>,
        message: Option<impl Into<String>>,
    ) -> Self {
        HTTPError {
            status,
            error: error.into(),
            message: message.map(Into::into),
        }
    }
}

/// Converts our `HTTPError` into an HTTP response.
impl IntoResponse for HTTPError {
    fn into_response(self) -> Response {
        let body = match self.message {
            Some(message) => json!({ "error": self.error, "message": message }),
            None => json!({ "error": self.error }),
        };
        (self.status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test that an error without a detail message renders only the
    /// error label.
    #[test]
    fn test_error_without_message() {
        let response =
            HTTPError::new(StatusCode::NOT_FOUND, "Endpoint not found", None::<&str>)
                .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response
                .headers()
                .get("content-type")
                .and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    /// Test that the detail message is carried when present.
    #[test]
    fn test_error_with_message() {
        let response = HTTPError::new(
            StatusCode::UNAUTHORIZED,
            "Unauthorized",
            Some("Valid token or API key required"),
        )
        .into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
