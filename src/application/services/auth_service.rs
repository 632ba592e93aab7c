//! Bearer token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashSet;

use crate::error::AppError;

/// Claims decoded from a verified token.
///
/// The gate is a capability check; no handler requires these, but they are
/// attached to the request for handlers that want them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub iat: Option<u64>,
    #[serde(default)]
    pub exp: Option<u64>,
}

/// Verifies HMAC-signed JWTs against the shared secret.
///
/// Accepts HS256, HS384 and HS512. `exp` and `nbf` are optional, but when
/// present they are enforced with no clock leeway.
pub struct AuthService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl AuthService {
    /// Creates a new authentication service.
    ///
    /// `secret` must match the value the token issuer signs with.
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.leeway = 0;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Verifies a raw token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unauthorized`] if the token is malformed, expired,
    /// signed with another secret or uses a non-HMAC algorithm. The reason is
    /// logged but not returned to the caller.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejected bearer token");
                AppError::unauthorized(
                    "Unauthorized",
                    json!({ "reason": "Invalid or expired token" }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};

    const SECRET: &str = "test-signing-secret";

    fn now() -> u64 {
        chrono::Utc::now().timestamp() as u64
    }

    fn sign(claims: &Claims, secret: &str, alg: Algorithm) -> String {
        encode(
            &Header::new(alg),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims(exp: Option<u64>) -> Claims {
        Claims {
            sub: Some("operator".to_string()),
            iat: Some(now()),
            exp,
        }
    }

    #[test]
    fn test_verify_valid_token() {
        let service = AuthService::new(SECRET);
        let token = sign(&claims(Some(now() + 3600)), SECRET, Algorithm::HS256);

        let decoded = service.verify(&token).unwrap();

        assert_eq!(decoded.sub.as_deref(), Some("operator"));
    }

    #[test]
    fn test_verify_token_without_exp() {
        let service = AuthService::new(SECRET);
        let token = sign(&claims(None), SECRET, Algorithm::HS256);

        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_verify_other_hmac_algorithms() {
        let service = AuthService::new(SECRET);

        for alg in [Algorithm::HS384, Algorithm::HS512] {
            let token = sign(&claims(None), SECRET, alg);
            assert!(service.verify(&token).is_ok(), "{alg:?}");
        }
    }

    #[test]
    fn test_reject_wrong_secret() {
        let service = AuthService::new(SECRET);
        let token = sign(&claims(None), "another-secret", Algorithm::HS256);

        let result = service.verify(&token);

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_reject_expired_token() {
        let service = AuthService::new(SECRET);
        let token = sign(&claims(Some(now() - 3600)), SECRET, Algorithm::HS256);

        let result = service.verify(&token);

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_reject_just_expired_token() {
        let service = AuthService::new(SECRET);
        let token = sign(&claims(Some(now() - 5)), SECRET, Algorithm::HS256);

        assert!(service.verify(&token).is_err());
    }

    #[test]
    fn test_reject_token_not_yet_valid() {
        let service = AuthService::new(SECRET);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "operator", "nbf": now() + 86400 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        let result = service.verify(&token);

        assert!(matches!(result.unwrap_err(), AppError::Unauthorized { .. }));
    }

    #[test]
    fn test_accept_token_already_valid() {
        let service = AuthService::new(SECRET);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "sub": "operator", "nbf": now() - 60 }),
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .unwrap();

        assert!(service.verify(&token).is_ok());
    }

    #[test]
    fn test_reject_malformed_token() {
        let service = AuthService::new(SECRET);

        for token in ["", "not-a-jwt", "a.b.c"] {
            assert!(service.verify(token).is_err(), "{token}");
        }
    }
}
