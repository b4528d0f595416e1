//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Authentication and token configuration.
///
/// The two signing secrets are deliberately distinct: a refresh token can
/// never validate against the access secret or vice versa. Both are
/// required; the process refuses to start without them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for access token signing (HMAC-SHA256).
    pub access_token_secret: String,
    /// Secret key for refresh token signing (HMAC-SHA256).
    pub refresh_token_secret: String,
    /// Access token TTL in minutes.
    #[serde(default = "default_access_ttl")]
    pub access_ttl_minutes: u64,
    /// Refresh token TTL in hours.
    #[serde(default = "default_refresh_ttl")]
    pub refresh_ttl_hours: u64,
    /// Minimum password length.
    #[serde(default = "default_password_min")]
    pub password_min_length: usize,
}

impl AuthConfig {
    /// Validates that required secret material is present and usable.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.access_token_secret.is_empty() {
            return Err(AppError::configuration("auth.access_token_secret is required"));
        }
        if self.refresh_token_secret.is_empty() {
            return Err(AppError::configuration("auth.refresh_token_secret is required"));
        }
        if self.access_token_secret == self.refresh_token_secret {
            return Err(AppError::configuration(
                "auth.access_token_secret and auth.refresh_token_secret must differ",
            ));
        }
        Ok(())
    }
}

fn default_access_ttl() -> u64 {
    15
}

fn default_refresh_ttl() -> u64 {
    24
}

fn default_password_min() -> usize {
    8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(access: &str, refresh: &str) -> AuthConfig {
        AuthConfig {
            access_token_secret: access.to_string(),
            refresh_token_secret: refresh.to_string(),
            access_ttl_minutes: default_access_ttl(),
            refresh_ttl_hours: default_refresh_ttl(),
            password_min_length: default_password_min(),
        }
    }

    #[test]
    fn test_rejects_missing_secret() {
        assert!(config("", "r").validate().is_err());
        assert!(config("a", "").validate().is_err());
    }

    #[test]
    fn test_rejects_shared_secret() {
        assert!(config("same", "same").validate().is_err());
        assert!(config("a", "b").validate().is_ok());
    }
}
