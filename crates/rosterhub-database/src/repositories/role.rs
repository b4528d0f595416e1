//! Role repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_core::types::pagination::{PageRequest, PageResponse, SortOrder};
use rosterhub_entity::role::{CreateRole, Role, UpdateRole};

/// Repository for role CRUD and query operations.
#[derive(Debug, Clone)]
pub struct RoleRepository {
    pool: PgPool,
}

/// Map a caller-supplied sort field to a real column.
fn sort_column(order_by: &str) -> AppResult<&'static str> {
    match order_by {
        "name" => Ok("name"),
        "tag" => Ok("tag"),
        "created_at" => Ok("created_at"),
        other => Err(AppError::validation(format!(
            "Cannot sort roles by '{other}'"
        ))),
    }
}

impl RoleRepository {
    /// Create a new role repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a role by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Role>> {
        sqlx::query_as::<_, Role>("SELECT * FROM roles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find role by id", e)
            })
    }

    /// List all roles with pagination and sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        order_by: &str,
        order: SortOrder,
    ) -> AppResult<PageResponse<Role>> {
        let column = sort_column(order_by)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM roles")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count roles", e))?;

        let roles = sqlx::query_as::<_, Role>(&format!(
            "SELECT * FROM roles ORDER BY {column} {} LIMIT $1 OFFSET $2",
            order.as_sql()
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list roles", e))?;

        Ok(PageResponse::new(
            roles,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new role. The id is assigned by the database.
    pub async fn create(&self, data: &CreateRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "INSERT INTO roles (name, tag, description) \
             VALUES ($1, $2, $3) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.tag)
        .bind(&data.description)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("roles_name_key") => {
                AppError::conflict(format!("Role '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create role", e),
        })
    }

    /// Partially update a role. `None` fields keep their current value.
    pub async fn update(&self, data: &UpdateRole) -> AppResult<Role> {
        sqlx::query_as::<_, Role>(
            "UPDATE roles SET name = COALESCE($2, name), \
                              tag = COALESCE($3, tag), \
                              description = COALESCE($4, description), \
                              updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.tag)
        .bind(&data.description)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("roles_name_key") => {
                AppError::conflict("Role name already exists".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update role", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Role {} not found", data.id)))
    }

    /// Delete a role by id.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM roles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete role", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Role {id} not found")));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column("tag").unwrap(), "tag");
        assert!(sort_column("description; --").is_err());
    }
}
