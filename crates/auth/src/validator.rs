//! Bearer token verification.

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use thiserror::Error;

use crate::claims::{AuthClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error)]
pub enum TokenError {
    /// Signature mismatch, malformed token, or undecodable claims.
    #[error("token rejected: {0}")]
    Decode(String),

    /// Decoded fine, but the claims themselves are unacceptable.
    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Verifies a bearer token and yields its claims.
///
/// Implementations own signature verification; time-window checks are shared
/// via [`validate_claims`] so they stay deterministic and testable.
pub trait JwtValidator: Send + Sync {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenError>;
}

/// HS256 (shared secret) validator.
pub struct Hs256JwtValidator {
    decoding: DecodingKey,
}

impl Hs256JwtValidator {
    pub fn new(secret: Vec<u8>) -> Self {
        Self {
            decoding: DecodingKey::from_secret(&secret),
        }
    }
}

impl JwtValidator for Hs256JwtValidator {
    fn validate(&self, token: &str, now: DateTime<Utc>) -> Result<AuthClaims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by validate_claims against the caller's clock,
        // so time never enters through two doors.
        validation.validate_exp = false;
        validation.required_spec_claims = Default::default();

        let decoded = jsonwebtoken::decode::<AuthClaims>(token, &self.decoding, &validation)
            .map_err(|e| TokenError::Decode(e.to_string()))?;

        validate_claims(&decoded.claims, now)?;
        Ok(decoded.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use jsonwebtoken::{EncodingKey, Header};

    fn mint(secret: &str, claims: &AuthClaims) -> String {
        jsonwebtoken::encode(
            &Header::new(Algorithm::HS256),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .expect("failed to encode token")
    }

    fn claims_for(sub: &str, now: DateTime<Utc>) -> AuthClaims {
        AuthClaims {
            sub: sub.to_string(),
            issued_at: now - Duration::minutes(1),
            expires_at: now + Duration::minutes(10),
        }
    }

    #[test]
    fn valid_token_round_trips_claims() {
        let now = Utc::now();
        let claims = claims_for("ann.k", now);
        let token = mint("test-secret", &claims);

        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());
        let decoded = validator.validate(&token, now).unwrap();
        assert_eq!(decoded.sub, "ann.k");
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let now = Utc::now();
        let token = mint("test-secret", &claims_for("ann.k", now));

        let validator = Hs256JwtValidator::new(b"other-secret".to_vec());
        assert!(matches!(
            validator.validate(&token, now),
            Err(TokenError::Decode(_))
        ));
    }

    #[test]
    fn expired_token_is_rejected() {
        let now = Utc::now();
        let claims = AuthClaims {
            sub: "ann.k".to_string(),
            issued_at: now - Duration::minutes(20),
            expires_at: now - Duration::minutes(10),
        };
        let token = mint("test-secret", &claims);

        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(
            validator.validate(&token, now),
            Err(TokenError::Claims(TokenValidationError::Expired))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let validator = Hs256JwtValidator::new(b"test-secret".to_vec());
        assert!(matches!(
            validator.validate("not-a-token", Utc::now()),
            Err(TokenError::Decode(_))
        ));
    }
}
