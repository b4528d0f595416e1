//! Account credential lookup seam.
//!
//! The auth gateway only needs to resolve an email to a stored account;
//! this trait keeps it independent of the database crate and lets tests
//! substitute an in-memory store.

use async_trait::async_trait;

use rosterhub_core::result::AppResult;
use rosterhub_entity::account::Account;

/// Resolves login credentials to stored accounts.
#[async_trait]
pub trait CredentialStore: Send + Sync + 'static {
    /// Looks up an account by email (case-insensitive).
    /// Returns `None` when no account with that email exists.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>>;
}
