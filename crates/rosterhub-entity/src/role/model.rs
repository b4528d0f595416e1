//! Role entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::tag::RoleTag;

/// A named role definition.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Role {
    /// Unique role identifier.
    pub id: Uuid,
    /// Human-readable role name.
    pub name: String,
    /// Role class.
    pub tag: RoleTag,
    /// Free-form description.
    pub description: String,
    /// When the role was created.
    pub created_at: DateTime<Utc>,
    /// When the role was last updated.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Data required to create a new role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRole {
    /// Human-readable role name.
    pub name: String,
    /// Role class.
    pub tag: RoleTag,
    /// Free-form description.
    pub description: String,
}

/// Data for partially updating an existing role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRole {
    /// The role ID to update.
    pub id: Uuid,
    /// New role name.
    pub name: Option<String>,
    /// New role class.
    pub tag: Option<RoleTag>,
    /// New description.
    pub description: Option<String>,
}
