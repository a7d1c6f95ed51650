//! Decode-only JWT freshness checks.
//!
//! The gate never verifies signatures. It splits the compact form, base64-
//! decodes the payload segment and reads the `exp` claim; the core API is
//! the party that verifies the signature on every authenticated call. Any
//! decode failure is treated as a stale token, never as a server error.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::auth::errors::AuthError;
use crate::auth::models::Claims;

/// Decodes the claims segment of a compact JWT without verifying anything.
pub fn decode_claims(token: &str) -> Result<Claims, AuthError> {
    let mut segments = token.split('.');
    let (Some(_header), Some(payload)) = (segments.next(), segments.next()) else {
        return Err(AuthError::Malformed("not a compact JWT".to_string()));
    };

    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| AuthError::Malformed(format!("payload is not base64url: {err}")))?;

    serde_json::from_slice(&bytes)
        .map_err(|err| AuthError::Malformed(format!("payload is not a claims object: {err}")))
}

/// A token is fresh when its payload decodes and `exp` (Unix seconds) is
/// strictly in the future. Missing `exp` and undecodable tokens are stale.
pub fn is_token_fresh(token: &str, now_secs: u64) -> bool {
    match decode_claims(token) {
        Ok(claims) => claims.exp.is_some_and(|exp| exp > now_secs),
        Err(_) => false,
    }
}

#[cfg(test)]
pub(crate) mod test_tokens {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    /// Builds an unsigned JWT carrying the given JSON payload. The gate
    /// never checks the signature, so a fixed fake one is fine.
    pub fn jwt_with_payload(payload: &serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(serde_json::to_vec(payload).unwrap());
        format!("{header}.{body}.fakesig")
    }

    pub fn jwt_with_exp(exp: u64) -> String {
        jwt_with_payload(&serde_json::json!({ "sub": "42", "exp": exp }))
    }
}

#[cfg(test)]
mod tests {
    use super::test_tokens::{jwt_with_exp, jwt_with_payload};
    use super::*;

    #[test]
    fn future_exp_is_fresh() {
        let token = jwt_with_exp(2_000_000_000);
        assert!(is_token_fresh(&token, 1_000_000_000));
    }

    #[test]
    fn past_exp_is_stale() {
        let token = jwt_with_exp(1_000_000_000);
        assert!(!is_token_fresh(&token, 1_000_000_001));
    }

    #[test]
    fn exp_equal_to_now_is_stale() {
        let token = jwt_with_exp(1_000_000_000);
        assert!(!is_token_fresh(&token, 1_000_000_000));
    }

    #[test]
    fn missing_exp_claim_is_stale() {
        let token = jwt_with_payload(&serde_json::json!({ "sub": "42" }));
        assert!(!is_token_fresh(&token, 0));
    }

    #[test]
    fn garbage_token_is_stale_not_an_error() {
        assert!(!is_token_fresh("not-a-jwt", 0));
        assert!(!is_token_fresh("", 0));
        assert!(!is_token_fresh("a.%%%.c", 0));
    }

    #[test]
    fn decode_surfaces_other_claims_silently() {
        let token = jwt_with_payload(&serde_json::json!({
            "sub": "42",
            "role": "admin",
            "exp": 99
        }));
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.exp, Some(99));
    }

    #[test]
    fn malformed_payload_is_a_typed_error() {
        let err = decode_claims("header-only").unwrap_err();
        assert!(matches!(err, AuthError::Malformed(_)));
    }
}
