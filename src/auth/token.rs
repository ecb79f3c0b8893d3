//! Encoding and decoding of the bearer credential.
//!
//! Tokens have the usual three-segment `header.payload.signature` shape.
//! Encoding produces a properly signed HS256 JWT. Decoding, however, only
//! unpacks the payload segment: the signature is never recomputed and the
//! header is never read. That asymmetry reproduces the contract this
//! service is specified against, where possession of a payload with
//! `verified: true` is what grants access.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use chrono::Utc;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The payload carried by a bearer token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Claims {
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub iat: i64,
}

impl Claims {
    /// Claims stamped with the current issue time.
    pub fn issued(verified: bool) -> Self {
        Claims {
            verified,
            iat: Utc::now().timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum TokenError {
    /// The token does not split into three non-empty segments, or its
    /// payload segment is not base64-encoded JSON.
    #[error("malformed token")]
    Malformed,

    #[error("failed to encode token: {0}")]
    Encode(#[from] jsonwebtoken::errors::Error),
}

/// Encode claims into a signed token using the process-wide secret.
///
/// The header is the standard `{"alg": "HS256", "typ": "JWT"}` and the
/// signature is an HMAC-SHA256 over the two encoded segments.
pub fn encode_token(claims: &Claims, secret: &str) -> Result<String, TokenError> {
    let key = EncodingKey::from_secret(secret.as_bytes());
    Ok(encode(&Header::default(), claims, &key)?)
}

/// Decode the payload of a token without verifying its signature.
///
/// The only structural requirements are three non-empty dot-separated
/// segments and a middle segment that base64url-decodes to JSON. The
/// caller decides what the decoded claims are worth.
pub fn decode_token(token: &str) -> Result<Claims, TokenError> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 || segments.iter().any(|s| s.is_empty()) {
        return Err(TokenError::Malformed);
    }

    let payload = URL_SAFE_NO_PAD
        .decode(segments[1])
        .map_err(|_| TokenError::Malformed)?;

    serde_json::from_slice(&payload).map_err(|_| TokenError::Malformed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    /// Test that decoding an encoded token yields the original claims.
    #[test]
    fn test_encode_decode_round_trip() {
        let claims = Claims::issued(true);
        let token = encode_token(&claims, SECRET).expect("encoding should succeed");
        let decoded = decode_token(&token).expect("decoding should succeed");
        assert_eq!(decoded, claims);
    }

    /// Test that encoded tokens have the three-segment JWT shape.
    #[test]
    fn test_encoded_token_has_three_segments() {
        let token = encode_token(&Claims::issued(true), SECRET).expect("encoding should succeed");
        let segments: Vec<&str> = token.split('.').collect();
        assert_eq!(segments.len(), 3);
        assert!(segments.iter().all(|s| !s.is_empty()));
    }

    /// Test that a tampered signature still decodes: the signature
    /// segment is not verified.
    #[test]
    fn test_decode_ignores_signature() {
        let token = encode_token(&Claims::issued(true), SECRET).expect("encoding should succeed");
        let mut segments: Vec<&str> = token.split('.').collect();
        segments[2] = "bm90LWEtcmVhbC1zaWduYXR1cmU";
        let forged = segments.join(".");

        let decoded = decode_token(&forged).expect("decoding should succeed");
        assert!(decoded.verified);
    }

    /// Test that the header segment is never inspected: any non-empty
    /// string passes, even one that is not base64 at all.
    #[test]
    fn test_decode_ignores_header() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"verified": true, "iat": 0}"#);
        let forged = format!("!!garbage!!.{payload}.sig");

        let decoded = decode_token(&forged).expect("decoding should succeed");
        assert!(decoded.verified);
        assert_eq!(decoded.iat, 0);
    }

    /// Test that structurally broken tokens are rejected as malformed.
    #[test]
    fn test_decode_rejects_malformed_tokens() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"verified": true}"#);
        let cases = [
            "".to_string(),
            "only-one-segment".to_string(),
            format!("a.{payload}"),
            format!("a.{payload}.b.c"),
            format!(".{payload}.b"),
            format!("a.{payload}."),
            "a..b".to_string(),
            "a.%%%not-base64%%%.b".to_string(),
            format!("a.{}.b", URL_SAFE_NO_PAD.encode("not json")),
        ];

        for token in cases {
            assert!(
                matches!(decode_token(&token), Err(TokenError::Malformed)),
                "token {:?} should be malformed",
                token
            );
        }
    }

    /// Test that a payload without a `verified` field decodes with the
    /// flag defaulted to false.
    #[test]
    fn test_decode_defaults_missing_verified() {
        let payload = URL_SAFE_NO_PAD.encode(r#"{"iat": 42}"#);
        let token = format!("h.{payload}.s");

        let decoded = decode_token(&token).expect("decoding should succeed");
        assert!(!decoded.verified);
        assert_eq!(decoded.iat, 42);
    }
}
