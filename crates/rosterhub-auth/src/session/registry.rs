//! Session registry backed by the cache layer.
//!
//! Every issued token is recorded under its embedded ID with a TTL equal
//! to the token's remaining validity, so registry entries die at the same
//! moment the signature would stop validating anyway. A token whose entry
//! is gone is revoked even if its signature still checks out.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;
use uuid::Uuid;

use rosterhub_cache::keys;
use rosterhub_cache::provider::CacheManager;
use rosterhub_core::result::AppResult;
use rosterhub_core::traits::cache::CacheProvider;

use crate::jwt::TokenDetail;

/// Tracks live token IDs and the subject they were issued to.
#[derive(Debug, Clone)]
pub struct SessionRegistry {
    /// Cache backend holding the registry entries.
    cache: Arc<CacheManager>,
}

impl SessionRegistry {
    /// Creates a new registry over the given cache.
    pub fn new(cache: Arc<CacheManager>) -> Self {
        Self { cache }
    }

    /// Records both tokens of a freshly issued pair.
    ///
    /// Each entry maps the token's ID to the subject email and expires
    /// with the token itself.
    pub async fn register_pair(&self, detail: &TokenDetail, email: &str) -> AppResult<()> {
        let now = chrono::Utc::now();

        let access_ttl = (detail.access_expires_at - now)
            .to_std()
            .unwrap_or(Duration::from_secs(1));
        let refresh_ttl = (detail.refresh_expires_at - now)
            .to_std()
            .unwrap_or(Duration::from_secs(1));

        self.cache
            .set(&keys::session_token(detail.access_id), email, access_ttl)
            .await?;
        self.cache
            .set(&keys::session_token(detail.refresh_id), email, refresh_ttl)
            .await?;

        debug!(
            access_id = %detail.access_id,
            refresh_id = %detail.refresh_id,
            "Registered token pair"
        );
        Ok(())
    }

    /// Looks up the subject a token ID was issued to.
    /// Returns `None` if the entry was revoked or has expired.
    pub async fn lookup_subject(&self, token_id: Uuid) -> AppResult<Option<String>> {
        self.cache.get(&keys::session_token(token_id)).await
    }

    /// Revokes a token ID and reports how many entries were removed.
    ///
    /// The count is the contended signal: under concurrent revocation of
    /// the same ID exactly one caller observes 1, everyone else 0.
    pub async fn revoke(&self, token_id: Uuid) -> AppResult<u64> {
        let deleted = self.cache.delete(&keys::session_token(token_id)).await?;
        debug!(token_id = %token_id, deleted, "Revoked session entry");
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rosterhub_cache::memory::MemoryCacheProvider;
    use rosterhub_core::config::cache::MemoryCacheConfig;

    fn make_registry() -> SessionRegistry {
        let provider = MemoryCacheProvider::new(&MemoryCacheConfig { max_capacity: 1000 }, 60);
        SessionRegistry::new(Arc::new(CacheManager::from_provider(Arc::new(provider))))
    }

    fn make_detail() -> TokenDetail {
        let now = Utc::now();
        TokenDetail {
            access_token: "access".to_string(),
            refresh_token: "refresh".to_string(),
            access_id: Uuid::new_v4(),
            refresh_id: Uuid::new_v4(),
            access_expires_at: now + chrono::Duration::minutes(15),
            refresh_expires_at: now + chrono::Duration::hours(24),
        }
    }

    #[tokio::test]
    async fn test_register_and_lookup() {
        let registry = make_registry();
        let detail = make_detail();
        registry.register_pair(&detail, "a@example.com").await.unwrap();

        let subject = registry.lookup_subject(detail.access_id).await.unwrap();
        assert_eq!(subject, Some("a@example.com".to_string()));
        let subject = registry.lookup_subject(detail.refresh_id).await.unwrap();
        assert_eq!(subject, Some("a@example.com".to_string()));
    }

    #[tokio::test]
    async fn test_revoke_counts() {
        let registry = make_registry();
        let detail = make_detail();
        registry.register_pair(&detail, "a@example.com").await.unwrap();

        assert_eq!(registry.revoke(detail.access_id).await.unwrap(), 1);
        assert_eq!(registry.revoke(detail.access_id).await.unwrap(), 0);
        assert_eq!(registry.lookup_subject(detail.access_id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_unknown_id_lookup_is_none() {
        let registry = make_registry();
        assert_eq!(registry.lookup_subject(Uuid::new_v4()).await.unwrap(), None);
    }
}
