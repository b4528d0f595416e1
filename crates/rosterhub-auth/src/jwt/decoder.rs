//! JWT token validation.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use rosterhub_core::config::auth::AuthConfig;
use rosterhub_core::error::AppError;

use super::claims::{AccessClaims, RefreshClaims};

/// Validates JWT token signatures and expiry.
///
/// Signature validity only proves a token was once issued; callers must
/// still confirm the embedded ID against the session registry before
/// trusting it.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret for access token verification.
    access_key: DecodingKey,
    /// HMAC secret for refresh token verification.
    refresh_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5; // 5 seconds leeway for clock skew

        Self {
            access_key: DecodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: DecodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, AppError> {
        let token_data = decode::<AccessClaims>(token, &self.access_key, &self.validation)
            .map_err(map_decode_error)?;
        Ok(token_data.claims)
    }

    /// Decodes and validates a refresh token string.
    pub fn decode_refresh_token(&self, token: &str) -> Result<RefreshClaims, AppError> {
        let token_data = decode::<RefreshClaims>(token, &self.refresh_key, &self.validation)
            .map_err(map_decode_error)?;
        Ok(token_data.claims)
    }
}

fn map_decode_error(e: jsonwebtoken::errors::Error) -> AppError {
    match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
            AppError::authentication("Token has expired")
        }
        jsonwebtoken::errors::ErrorKind::InvalidToken => {
            AppError::authentication("Invalid token format")
        }
        jsonwebtoken::errors::ErrorKind::InvalidSignature => {
            AppError::authentication("Invalid token signature")
        }
        _ => {
            // Library detail stays in the server logs, not in the 401 body.
            tracing::debug!(error = %e, "token validation failed");
            AppError::authentication("Invalid token")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::JwtEncoder;
    use chrono::Utc;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use uuid::Uuid;

    fn test_config() -> AuthConfig {
        AuthConfig {
            access_token_secret: "access-secret-for-tests".to_string(),
            refresh_token_secret: "refresh-secret-for-tests".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_hours: 24,
            password_min_length: 8,
        }
    }

    #[test]
    fn test_decode_roundtrip() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let detail = encoder.create_token_pair("user@example.com").unwrap();

        let access = decoder.decode_access_token(&detail.access_token).unwrap();
        assert_eq!(access.sub, "user@example.com");
        assert_eq!(access.access_id, detail.access_id);
        assert!(access.authorized);

        let refresh = decoder.decode_refresh_token(&detail.refresh_token).unwrap();
        assert_eq!(refresh.sub, "user@example.com");
        assert_eq!(refresh.refresh_id, detail.refresh_id);
    }

    #[test]
    fn test_token_classes_do_not_cross_validate() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let detail = encoder.create_token_pair("user@example.com").unwrap();

        // Each class is signed with its own secret, so presenting one
        // where the other is expected fails the signature check.
        assert!(decoder.decode_access_token(&detail.refresh_token).is_err());
        assert!(decoder.decode_refresh_token(&detail.access_token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "user@example.com".to_string(),
            access_id: Uuid::new_v4(),
            authorized: true,
            iat: now - 1000,
            exp: now - 120, // well past the 5s leeway
        };
        let key = EncodingKey::from_secret(config.access_token_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).unwrap();

        let err = decoder.decode_access_token(&token).unwrap_err();
        assert!(err.message.contains("expired"));
    }

    #[test]
    fn test_tampered_token_rejected() {
        let config = test_config();
        let encoder = JwtEncoder::new(&config);
        let decoder = JwtDecoder::new(&config);

        let detail = encoder.create_token_pair("user@example.com").unwrap();
        let mut tampered = detail.access_token.clone();
        tampered.pop();
        tampered.push('x');

        assert!(decoder.decode_access_token(&tampered).is_err());
    }

    #[test]
    fn test_unclassified_failure_gets_generic_message() {
        #[derive(serde::Serialize)]
        struct BareClaims {
            sub: String,
        }

        let config = test_config();
        let decoder = JwtDecoder::new(&config);

        // Missing `exp` is rejected by claim validation, which falls through
        // to the catch-all arm. The response message must not carry the
        // library's diagnostic text.
        let key = EncodingKey::from_secret(config.access_token_secret.as_bytes());
        let token = encode(
            &Header::default(),
            &BareClaims {
                sub: "user@example.com".to_string(),
            },
            &key,
        )
        .unwrap();

        let err = decoder.decode_access_token(&token).unwrap_err();
        assert_eq!(err.message, "Invalid token");
    }

    #[test]
    fn test_garbage_token_rejected() {
        let decoder = JwtDecoder::new(&test_config());
        assert!(decoder.decode_access_token("not-a-jwt").is_err());
    }
}
