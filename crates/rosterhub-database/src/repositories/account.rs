//! Account repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rosterhub_auth::credentials::CredentialStore;
use rosterhub_core::error::{AppError, ErrorKind};
use rosterhub_core::result::AppResult;
use rosterhub_core::types::pagination::{PageRequest, PageResponse, SortOrder};
use rosterhub_entity::account::{Account, CreateAccount, UpdateAccount};

/// Repository for account CRUD and query operations.
#[derive(Debug, Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

/// Map a caller-supplied sort field to a real column.
///
/// Sort fields are interpolated into the query, never bound, so anything
/// outside this whitelist is rejected up front.
fn sort_column(order_by: &str) -> AppResult<&'static str> {
    match order_by {
        "name" => Ok("name"),
        "email" => Ok("email"),
        "role" => Ok("role"),
        "created_at" => Ok("created_at"),
        other => Err(AppError::validation(format!(
            "Cannot sort accounts by '{other}'"
        ))),
    }
}

impl AccountRepository {
    /// Create a new account repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an account by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by id", e)
            })
    }

    /// Find an account by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM accounts WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find account by email", e)
            })
    }

    /// List all accounts with pagination and sorting.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        order_by: &str,
        order: SortOrder,
    ) -> AppResult<PageResponse<Account>> {
        let column = sort_column(order_by)?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count accounts", e)
            })?;

        let accounts = sqlx::query_as::<_, Account>(&format!(
            "SELECT * FROM accounts ORDER BY {column} {} LIMIT $1 OFFSET $2",
            order.as_sql()
        ))
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list accounts", e))?;

        Ok(PageResponse::new(
            accounts,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new account. The id is assigned by the database.
    pub async fn create(&self, data: &CreateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "INSERT INTO accounts (name, email, password_hash, role) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .bind(&data.role)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::conflict(format!("Email '{}' is already registered", data.email))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create account", e),
        })
    }

    /// Partially update an account. `None` fields keep their current value.
    pub async fn update(&self, data: &UpdateAccount) -> AppResult<Account> {
        sqlx::query_as::<_, Account>(
            "UPDATE accounts SET name = COALESCE($2, name), \
                                 email = COALESCE($3, email), \
                                 password_hash = COALESCE($4, password_hash), \
                                 updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(data.id)
        .bind(&data.name)
        .bind(&data.email)
        .bind(&data.password_hash)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("accounts_email_key") =>
            {
                AppError::conflict("Email is already registered".to_string())
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update account", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Account {} not found", data.id)))
    }

    /// Delete an account by id.
    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete account", e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Account {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl CredentialStore for AccountRepository {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        AccountRepository::find_by_email(self, email).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_column_whitelist() {
        assert_eq!(sort_column("email").unwrap(), "email");
        assert_eq!(sort_column("created_at").unwrap(), "created_at");
        assert!(sort_column("password_hash").is_err());
        assert!(sort_column("; DROP TABLE accounts").is_err());
    }
}
