//! Session token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use campushub_core::config::auth::AuthConfig;
use campushub_core::error::AppError;

use super::claims::Claims;

/// Validates session tokens.
///
/// Every verification failure — bad signature, malformed payload,
/// expired token — collapses into the same authentication error so
/// callers cannot distinguish why a token was rejected. The specific
/// cause is only visible in debug logs.
#[derive(Clone)]
pub struct TokenDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a session token string.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "Session token verification failed");
                AppError::authentication("Invalid or expired session token")
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenEncoder;
    use campushub_entity::principal::PrincipalRole;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_within_ttl() {
        let cfg = config("test-secret");
        let encoder = TokenEncoder::new(&cfg);
        let decoder = TokenDecoder::new(&cfg);

        let id = Uuid::new_v4();
        let (token, expires_at) = encoder.issue(id, PrincipalRole::Faculty).unwrap();
        assert!(expires_at > Utc::now());

        let claims = decoder.verify(&token).unwrap();
        assert_eq!(claims.sub, id);
        assert_eq!(claims.role, PrincipalRole::Faculty);
        assert!(!claims.is_expired());
    }

    #[test]
    fn test_expired_token_rejected() {
        let cfg = config("test-secret");
        let decoder = TokenDecoder::new(&cfg);

        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: PrincipalRole::Student,
            iat: now - 600,
            exp: now - 300,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = decoder.verify(&token).unwrap_err();
        assert_eq!(err.kind, campushub_core::error::ErrorKind::Authentication);
    }

    #[test]
    fn test_wrong_key_rejected() {
        let encoder = TokenEncoder::new(&config("secret-a"));
        let decoder = TokenDecoder::new(&config("secret-b"));

        let (token, _) = encoder.issue(Uuid::new_v4(), PrincipalRole::Student).unwrap();
        assert!(decoder.verify(&token).is_err());
    }

    #[test]
    fn test_malformed_token_rejected() {
        let decoder = TokenDecoder::new(&config("test-secret"));
        assert!(decoder.verify("not-a-jwt").is_err());
        assert!(decoder.verify("").is_err());
    }
}
