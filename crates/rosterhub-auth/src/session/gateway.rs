//! Auth gateway: login, logout, and refresh flows.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use rosterhub_core::error::AppError;
use rosterhub_core::result::AppResult;

use crate::credentials::CredentialStore;
use crate::jwt::{AccessClaims, JwtDecoder, JwtEncoder, TokenDetail};
use crate::password::PasswordHasher;
use crate::session::SessionRegistry;

/// One message for both unknown email and wrong password, so a caller
/// cannot probe which emails have accounts.
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Orchestrates the credential and token flows.
///
/// A token is honored only when its signature validates AND its embedded
/// ID is still present in the session registry. Logout and refresh work by
/// removing registry entries, which takes effect immediately.
#[derive(Clone)]
pub struct AuthGateway {
    /// Token pair creation.
    encoder: Arc<JwtEncoder>,
    /// Token signature validation.
    decoder: Arc<JwtDecoder>,
    /// Server-side session tracking.
    registry: Arc<SessionRegistry>,
    /// Account lookup for login.
    credentials: Arc<dyn CredentialStore>,
    /// Password verification.
    hasher: Arc<PasswordHasher>,
}

impl std::fmt::Debug for AuthGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthGateway")
            .field("encoder", &self.encoder)
            .finish()
    }
}

impl AuthGateway {
    /// Creates a new gateway with all required dependencies.
    pub fn new(
        encoder: Arc<JwtEncoder>,
        decoder: Arc<JwtDecoder>,
        registry: Arc<SessionRegistry>,
        credentials: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
    ) -> Self {
        Self {
            encoder,
            decoder,
            registry,
            credentials,
            hasher,
        }
    }

    /// Authenticates credentials and issues a registered token pair.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<TokenDetail> {
        let Some(account) = self.credentials.find_by_email(email).await? else {
            warn!(email, "Login attempt for unknown email");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        };

        // verify_password distinguishes a mismatch from a backend failure;
        // only the former maps to the credential error.
        if !self
            .hasher
            .verify_password(password, &account.password_hash)?
        {
            warn!(email, "Login attempt with wrong password");
            return Err(AppError::authentication(INVALID_CREDENTIALS));
        }

        let detail = self.encoder.create_token_pair(&account.email)?;
        self.registry.register_pair(&detail, &account.email).await?;

        info!(email = %account.email, "Login succeeded");
        Ok(detail)
    }

    /// Validates an access token: signature, expiry, and registry presence.
    ///
    /// Returns the claims when the token is live; any failure is an
    /// authentication error.
    pub async fn authenticate(&self, access_token: &str) -> AppResult<AccessClaims> {
        let claims = self.decoder.decode_access_token(access_token)?;

        match self.registry.lookup_subject(claims.access_id).await? {
            Some(subject) if subject == claims.sub => Ok(claims),
            Some(_) => {
                warn!(access_id = %claims.access_id, "Registry subject mismatch");
                Err(AppError::authentication("Token has been revoked"))
            }
            None => Err(AppError::authentication("Token has been revoked")),
        }
    }

    /// Terminates the session behind an access token.
    ///
    /// Revoking an already revoked token is rejected rather than treated
    /// as a no-op, so a replayed logout surfaces as unauthorized.
    pub async fn logout(&self, access_id: Uuid) -> AppResult<()> {
        let deleted = self.registry.revoke(access_id).await?;
        if deleted == 0 {
            return Err(AppError::authentication("Session already terminated"));
        }
        info!(access_id = %access_id, "Logout succeeded");
        Ok(())
    }

    /// Exchanges a live refresh token for a brand-new registered pair.
    ///
    /// The refresh token is single-use: its registry entry is deleted
    /// before the new pair is issued, and the delete count decides who
    /// wins a concurrent exchange of the same token. The access token of
    /// the old pair is untouched and keeps working until it expires.
    pub async fn refresh(&self, refresh_token: &str) -> AppResult<TokenDetail> {
        let claims = self.decoder.decode_refresh_token(refresh_token)?;

        let deleted = self.registry.revoke(claims.refresh_id).await?;
        if deleted == 0 {
            warn!(refresh_id = %claims.refresh_id, "Replayed or revoked refresh token");
            return Err(AppError::authentication("Refresh token is no longer valid"));
        }

        let detail = self.encoder.create_token_pair(&claims.sub)?;
        self.registry.register_pair(&detail, &claims.sub).await?;

        info!(email = %claims.sub, "Token pair refreshed");
        Ok(detail)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::Utc;
    use rosterhub_cache::memory::MemoryCacheProvider;
    use rosterhub_cache::provider::CacheManager;
    use rosterhub_core::config::auth::AuthConfig;
    use rosterhub_core::config::cache::MemoryCacheConfig;
    use rosterhub_entity::account::Account;

    /// In-memory credential store seeded with fixed accounts.
    #[derive(Debug)]
    struct FixedAccounts {
        accounts: Vec<Account>,
    }

    #[async_trait]
    impl CredentialStore for FixedAccounts {
        async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
            Ok(self
                .accounts
                .iter()
                .find(|a| a.email.eq_ignore_ascii_case(email))
                .cloned())
        }
    }

    const TEST_EMAIL: &str = "alice@example.com";
    const TEST_PASSWORD: &str = "a-strong-password";

    fn make_gateway() -> AuthGateway {
        let config = AuthConfig {
            access_token_secret: "access-secret-for-tests".to_string(),
            refresh_token_secret: "refresh-secret-for-tests".to_string(),
            access_ttl_minutes: 15,
            refresh_ttl_hours: 24,
            password_min_length: 8,
        };

        let hasher = PasswordHasher::new();
        let account = Account {
            id: Uuid::new_v4(),
            name: "Alice".to_string(),
            email: TEST_EMAIL.to_string(),
            password_hash: hasher.hash_password(TEST_PASSWORD).unwrap(),
            role: "user".to_string(),
            created_at: Utc::now(),
            updated_at: None,
        };

        let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 1000 }, 60);
        let cache = Arc::new(CacheManager::from_provider(Arc::new(provider)));

        AuthGateway::new(
            Arc::new(JwtEncoder::new(&config)),
            Arc::new(JwtDecoder::new(&config)),
            Arc::new(SessionRegistry::new(cache)),
            Arc::new(FixedAccounts {
                accounts: vec![account],
            }),
            Arc::new(hasher),
        )
    }

    #[tokio::test]
    async fn test_login_issues_live_tokens() {
        let gateway = make_gateway();
        let detail = gateway.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

        let claims = gateway.authenticate(&detail.access_token).await.unwrap();
        assert_eq!(claims.sub, TEST_EMAIL);
        assert_eq!(claims.access_id, detail.access_id);
    }

    #[tokio::test]
    async fn test_unknown_email_and_wrong_password_are_indistinguishable() {
        let gateway = make_gateway();

        let unknown = gateway
            .login("nobody@example.com", TEST_PASSWORD)
            .await
            .unwrap_err();
        let wrong = gateway.login(TEST_EMAIL, "wrong-password").await.unwrap_err();

        assert_eq!(unknown.kind, wrong.kind);
        assert_eq!(unknown.message, wrong.message);
    }

    #[tokio::test]
    async fn test_logout_revokes_immediately() {
        let gateway = make_gateway();
        let detail = gateway.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

        gateway.logout(detail.access_id).await.unwrap();

        // Signature still validates but the registry entry is gone.
        let err = gateway.authenticate(&detail.access_token).await.unwrap_err();
        assert!(err.message.contains("revoked"));

        // A second logout of the same session is unauthorized, not a no-op.
        assert!(gateway.logout(detail.access_id).await.is_err());
    }

    #[tokio::test]
    async fn test_refresh_rotates_and_rejects_replay() {
        let gateway = make_gateway();
        let original = gateway.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

        let rotated = gateway.refresh(&original.refresh_token).await.unwrap();
        assert_ne!(rotated.refresh_id, original.refresh_id);
        assert_ne!(rotated.access_id, original.access_id);

        // The new pair is live.
        gateway.authenticate(&rotated.access_token).await.unwrap();

        // The consumed refresh token cannot be exchanged again.
        assert!(gateway.refresh(&original.refresh_token).await.is_err());

        // The original access token was not revoked by the refresh.
        gateway.authenticate(&original.access_token).await.unwrap();
    }

    #[tokio::test]
    async fn test_concurrent_refresh_has_exactly_one_winner() {
        let gateway = Arc::new(make_gateway());
        let detail = gateway.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let g = Arc::clone(&gateway);
            let token = detail.refresh_token.clone();
            handles.push(tokio::spawn(async move { g.refresh(&token).await }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }
        assert_eq!(successes, 1);
    }

    #[tokio::test]
    async fn test_access_token_is_not_a_refresh_token() {
        let gateway = make_gateway();
        let detail = gateway.login(TEST_EMAIL, TEST_PASSWORD).await.unwrap();

        assert!(gateway.refresh(&detail.access_token).await.is_err());
    }

    #[tokio::test]
    async fn test_login_is_case_insensitive_on_email() {
        let gateway = make_gateway();
        let detail = gateway
            .login("ALICE@example.com", TEST_PASSWORD)
            .await
            .unwrap();

        // The token subject is the stored email, not the typed one.
        let claims = gateway.authenticate(&detail.access_token).await.unwrap();
        assert_eq!(claims.sub, TEST_EMAIL);
    }
}
