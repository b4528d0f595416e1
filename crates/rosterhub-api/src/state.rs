//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use rosterhub_auth::jwt::decoder::JwtDecoder;
use rosterhub_auth::jwt::encoder::JwtEncoder;
use rosterhub_auth::password::hasher::PasswordHasher;
use rosterhub_auth::session::gateway::AuthGateway;
use rosterhub_auth::session::registry::SessionRegistry;
use rosterhub_cache::provider::CacheManager;
use rosterhub_core::config::AppConfig;
use rosterhub_database::repositories::account::AccountRepository;
use rosterhub_database::repositories::role::RoleRepository;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
/// The token encoder, decoder, and session registry live inside the
/// auth gateway; handlers never touch them directly.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Cache manager (Redis or in-memory)
    pub cache: Arc<CacheManager>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Login/logout/refresh flows
    pub auth_gateway: Arc<AuthGateway>,
    /// Account repository
    pub account_repo: Arc<AccountRepository>,
    /// Role repository
    pub role_repo: Arc<RoleRepository>,
}

impl AppState {
    /// Wire up the full dependency graph from the three roots:
    /// configuration, database pool, and cache.
    pub fn build(config: Arc<AppConfig>, db_pool: PgPool, cache: Arc<CacheManager>) -> Self {
        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let session_registry = Arc::new(SessionRegistry::new(Arc::clone(&cache)));

        let account_repo = Arc::new(AccountRepository::new(db_pool.clone()));
        let role_repo = Arc::new(RoleRepository::new(db_pool.clone()));

        let auth_gateway = Arc::new(AuthGateway::new(
            jwt_encoder,
            jwt_decoder,
            session_registry,
            Arc::clone(&account_repo) as Arc<dyn rosterhub_auth::CredentialStore>,
            Arc::clone(&password_hasher),
        ));

        Self {
            config,
            db_pool,
            cache,
            password_hasher,
            auth_gateway,
            account_repo,
            role_repo,
        }
    }
}
