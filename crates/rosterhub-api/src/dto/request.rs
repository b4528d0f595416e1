//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use rosterhub_core::types::pagination::{PageRequest, SortOrder};
use rosterhub_entity::role::RoleTag;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Account email.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create account request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Display name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Plaintext password; hashed before storage.
    pub password: String,
    /// Role tag, defaults to `user` when omitted.
    pub role: Option<RoleTag>,
}

/// Partial account update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    /// The account to update.
    pub id: Uuid,
    /// New display name.
    pub name: Option<String>,
    /// New email address.
    pub email: Option<String>,
    /// New plaintext password; hashed before storage.
    pub password: Option<String>,
}

/// Create role request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRoleRequest {
    /// Role name.
    #[validate(length(min = 1, max = 255, message = "Name is required"))]
    pub name: String,
    /// Role class.
    pub tag: RoleTag,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
}

/// Partial role update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoleRequest {
    /// The role to update.
    pub id: Uuid,
    /// New role name.
    pub name: Option<String>,
    /// New role class.
    pub tag: Option<RoleTag>,
    /// New description.
    pub description: Option<String>,
}

/// Pagination and sorting body for `get_all` endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListRequest {
    /// Page number (1-based).
    #[serde(default = "default_page")]
    pub page: u64,
    /// Items per page.
    #[serde(default = "default_size")]
    pub size: u64,
    /// Sort direction.
    #[serde(default)]
    pub order: SortOrder,
    /// Sort field.
    #[serde(default = "default_order_by")]
    pub order_by: String,
}

impl ListRequest {
    /// Converts to a clamped `PageRequest`.
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            size: default_size(),
            order: SortOrder::default(),
            order_by: default_order_by(),
        }
    }
}

/// `?id=` query parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct IdQuery {
    /// Target record id.
    pub id: Uuid,
}

/// `?email=` query parameter.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailQuery {
    /// Target account email.
    pub email: String,
}

fn default_page() -> u64 {
    1
}

fn default_size() -> u64 {
    25
}

fn default_order_by() -> String {
    "created_at".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_request_defaults() {
        let req: ListRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.size, 25);
        assert_eq!(req.order, SortOrder::Desc);
        assert_eq!(req.order_by, "created_at");
    }

    #[test]
    fn test_list_request_clamps_size() {
        let req: ListRequest = serde_json::from_str(r#"{"page": 0, "size": 9999}"#).unwrap();
        let page = req.page_request();
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 100);
    }
}
