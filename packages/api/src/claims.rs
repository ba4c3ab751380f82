//! # Bearer token claims
//!
//! The client never verifies a token's signature; it only peeks at the payload
//! to learn when the token expires, so it can stop sending a credential the
//! backend will reject anyway. The backend remains the only authority on
//! validity.
//!
//! [`decode_claims`] returns a typed result. The "treat any failure as logged
//! out" policy lives in [`is_token_expired`], which maps every error and a
//! missing `exp` to `true`.

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClaimsError {
    #[error("token does not have three segments")]
    Malformed,
    #[error("payload is not valid base64url")]
    Encoding,
    #[error("payload is not a JSON object: {0}")]
    Json(String),
}

/// The subset of registered and custom claims the client looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub iat: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Split a JWT and decode its payload segment.
pub fn decode_claims(token: &str) -> Result<TokenClaims, ClaimsError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload), Some(_signature), None) = (
        segments.next(),
        segments.next(),
        segments.next(),
        segments.next(),
    ) else {
        return Err(ClaimsError::Malformed);
    };
    if payload.is_empty() {
        return Err(ClaimsError::Malformed);
    }

    // Some issuers pad their segments; the no-pad engine rejects '='.
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| ClaimsError::Encoding)?;

    serde_json::from_slice(&bytes).map_err(|e| ClaimsError::Json(e.to_string()))
}

/// Whether `token` must be treated as expired at unix time `now`.
pub fn is_token_expired(token: &str, now: i64) -> bool {
    match decode_claims(token) {
        Ok(TokenClaims { exp: Some(exp), .. }) => exp <= now,
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("Treating undecodable token as expired: {}", e);
            true
        }
    }
}

#[cfg(test)]
pub(crate) fn make_token(payload: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let body = URL_SAFE_NO_PAD.encode(payload);
    format!("{header}.{body}.signature")
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: i64 = 1_700_000_000;

    #[test]
    fn test_decode_claims() {
        let token = make_token(r#"{"sub":"a@b.com","exp":1700000600,"iat":1700000000,"role":"ADMIN"}"#);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.sub.as_deref(), Some("a@b.com"));
        assert_eq!(claims.exp, Some(1_700_000_600));
        assert_eq!(claims.role.as_deref(), Some("ADMIN"));
    }

    #[test]
    fn test_future_exp_is_not_expired() {
        let token = make_token(&format!(r#"{{"exp":{}}}"#, NOW + 60));
        assert!(!is_token_expired(&token, NOW));
    }

    #[test]
    fn test_past_or_equal_exp_is_expired() {
        assert!(is_token_expired(&make_token(&format!(r#"{{"exp":{}}}"#, NOW - 1)), NOW));
        assert!(is_token_expired(&make_token(&format!(r#"{{"exp":{NOW}}}"#)), NOW));
    }

    #[test]
    fn test_missing_exp_is_expired() {
        let token = make_token(r#"{"sub":"a@b.com"}"#);
        assert!(decode_claims(&token).unwrap().exp.is_none());
        assert!(is_token_expired(&token, NOW));
    }

    #[test]
    fn test_undecodable_tokens_are_expired() {
        for token in ["", "opaque", "a.b", "a.!!!.c", "a..c", "a.b.c.d"] {
            assert!(is_token_expired(token, NOW), "{token:?} should be expired");
        }
        let not_json = format!("h.{}.s", URL_SAFE_NO_PAD.encode("not json"));
        assert!(matches!(decode_claims(&not_json), Err(ClaimsError::Json(_))));
        assert!(is_token_expired(&not_json, NOW));
    }

    #[test]
    fn test_padded_payload_is_accepted() {
        let header = URL_SAFE_NO_PAD.encode("{}");
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"exp":99999999999}"#);
        let token = format!("{header}.{payload}.sig");
        assert!(!is_token_expired(&token, NOW));
    }
}
