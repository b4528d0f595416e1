//! JWT token pair creation with per-class signing secrets.

use chrono::{DateTime, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use uuid::Uuid;

use rosterhub_core::config::auth::AuthConfig;
use rosterhub_core::error::AppError;

use super::claims::{AccessClaims, RefreshClaims};

/// Creates signed JWT access and refresh tokens.
///
/// Access and refresh tokens are signed with separate secrets so neither
/// class of token can be replayed as the other.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret for access token signing.
    access_key: EncodingKey,
    /// HMAC secret for refresh token signing.
    refresh_key: EncodingKey,
    /// Access token TTL in minutes.
    access_ttl_minutes: i64,
    /// Refresh token TTL in hours.
    refresh_ttl_hours: i64,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("access_ttl_minutes", &self.access_ttl_minutes)
            .field("refresh_ttl_hours", &self.refresh_ttl_hours)
            .finish()
    }
}

/// Result of a successful token pair generation.
///
/// The IDs are fresh per issuance (a refresh produces a pair unrelated to
/// the pair it replaces) and double as the session registry keys.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TokenDetail {
    /// Short-lived access token.
    pub access_token: String,
    /// Long-lived refresh token.
    pub refresh_token: String,
    /// Registry key embedded in the access token.
    pub access_id: Uuid,
    /// Registry key embedded in the refresh token.
    pub refresh_id: Uuid,
    /// Access token expiration timestamp.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration timestamp.
    pub refresh_expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            access_key: EncodingKey::from_secret(config.access_token_secret.as_bytes()),
            refresh_key: EncodingKey::from_secret(config.refresh_token_secret.as_bytes()),
            access_ttl_minutes: config.access_ttl_minutes as i64,
            refresh_ttl_hours: config.refresh_ttl_hours as i64,
        }
    }

    /// Generates a new access + refresh token pair for the given account email.
    pub fn create_token_pair(&self, email: &str) -> Result<TokenDetail, AppError> {
        let now = Utc::now();
        let access_expires_at = now + chrono::Duration::minutes(self.access_ttl_minutes);
        let refresh_expires_at = now + chrono::Duration::hours(self.refresh_ttl_hours);

        let access_id = Uuid::new_v4();
        let refresh_id = Uuid::new_v4();

        let access_claims = AccessClaims {
            sub: email.to_string(),
            access_id,
            authorized: true,
            iat: now.timestamp(),
            exp: access_expires_at.timestamp(),
        };

        let refresh_claims = RefreshClaims {
            sub: email.to_string(),
            refresh_id,
            iat: now.timestamp(),
            exp: refresh_expires_at.timestamp(),
        };

        let access_token = encode(&Header::default(), &access_claims, &self.access_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        let refresh_token = encode(&Header::default(), &refresh_claims, &self.refresh_key)
            .map_err(|e| AppError::internal(format!("Failed to encode refresh token: {e}")))?;

        Ok(TokenDetail {
            access_token,
            refresh_token,
            access_id,
            refresh_id,
            access_expires_at,
            refresh_expires_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_pair_has_fresh_ids() {
        let encoder = JwtEncoder::new(&test_config());
        let first = encoder.create_token_pair("a@example.com").unwrap();
        let second = encoder.create_token_pair("a@example.com").unwrap();

        assert_ne!(first.access_id, second.access_id);
        assert_ne!(first.refresh_id, second.refresh_id);
        assert_ne!(first.access_token, second.access_token);
    }

    #[test]
    fn test_ttls_come_from_config() {
        let encoder = JwtEncoder::new(&test_config());
        let detail = encoder.create_token_pair("a@example.com").unwrap();

        let access_ttl = (detail.access_expires_at - Utc::now()).num_seconds();
        let refresh_ttl = (detail.refresh_expires_at - Utc::now()).num_seconds();

        assert!((895..=900).contains(&access_ttl));
        assert!((86395..=86400).contains(&refresh_ttl));
    }
}
