//! Account entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A registered account in the Rosterhub system.
///
/// The identifier is a v4 UUID assigned once at creation and never derived
/// from the record's own fields, so it survives later updates.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Account {
    /// Unique account identifier.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Email address (unique, case-insensitive).
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Role tag assigned to the account.
    pub role: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAccount {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Assigned role tag.
    pub role: String,
}

/// Data for partially updating an existing account.
///
/// `None` fields are left untouched; a new plaintext password is hashed
/// by the caller before it reaches the repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccount {
    /// The account ID to update.
    pub id: Uuid,
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New pre-hashed password.
    pub password_hash: Option<String>,
}
