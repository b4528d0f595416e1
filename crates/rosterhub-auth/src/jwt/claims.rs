//! Typed JWT claims for access and refresh tokens.
//!
//! Access and refresh tokens carry different claim sets and are signed with
//! different secrets, so a refresh token can never be presented where an
//! access token is expected (the signature check alone rules it out).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Claims embedded in every access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject: the account's email address.
    pub sub: String,
    /// Server-side session registry key for this access token.
    pub access_id: Uuid,
    /// Always true for tokens issued by a successful login.
    pub authorized: bool,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

/// Claims embedded in every refresh token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject: the account's email address.
    pub sub: String,
    /// Server-side session registry key for this refresh token.
    pub refresh_id: Uuid,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl AccessClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        remaining_seconds(self.exp)
    }
}

impl RefreshClaims {
    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }

    /// Returns the remaining TTL in seconds (0 if expired).
    pub fn remaining_ttl_seconds(&self) -> u64 {
        remaining_seconds(self.exp)
    }
}

fn remaining_seconds(exp: i64) -> u64 {
    let remaining = exp - Utc::now().timestamp();
    if remaining > 0 { remaining as u64 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_ttl() {
        let now = Utc::now().timestamp();
        let claims = AccessClaims {
            sub: "user@example.com".to_string(),
            access_id: Uuid::new_v4(),
            authorized: true,
            iat: now,
            exp: now + 900,
        };
        let ttl = claims.remaining_ttl_seconds();
        assert!(ttl > 890 && ttl <= 900);
    }

    #[test]
    fn test_remaining_ttl_expired_is_zero() {
        let now = Utc::now().timestamp();
        let claims = RefreshClaims {
            sub: "user@example.com".to_string(),
            refresh_id: Uuid::new_v4(),
            iat: now - 200,
            exp: now - 100,
        };
        assert_eq!(claims.remaining_ttl_seconds(), 0);
    }
}
