//! User repository.

use anyhow::{Context, Result};
use async_trait::async_trait;
use innovation_models::{NewUser, User, UserFilterParams, UserRole};
use sqlx::{FromRow, PgPool};
use tracing::instrument;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: String,
    role: Option<String>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            name: row.name,
            role: row.role.map(UserRole::from),
        }
    }
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// List users whose fields match every given pattern (case-insensitive).
    /// A user without a role never matches a role pattern.
    async fn list_users(&self, filter: &UserFilterParams) -> Result<Vec<User>>;

    /// Get a user by email
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert a user unless the email is already registered.
    /// Returns `None` when the email was taken.
    async fn create_user(&self, user: NewUser) -> Result<Option<User>>;

    /// Set the role of the user with `email`. Returns the number of matched users.
    async fn update_role(&self, email: &str, role: &UserRole) -> Result<u64>;

    /// Delete by identifier. Returns the number of deleted users.
    async fn delete_user(&self, id: Uuid) -> Result<u64>;

    /// Count total users
    async fn count_users(&self) -> Result<u64>;
}

#[derive(Debug, Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self), name = "db_list_users")]
    async fn list_users(&self, filter: &UserFilterParams) -> Result<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, email, name, role
            FROM users
            WHERE ($1::text IS NULL OR email ~* $1)
              AND ($2::text IS NULL OR name ~* $2)
              AND ($3::text IS NULL OR role ~* $3)
            ORDER BY created_at, id
            "#,
        )
        .bind(filter.email.as_deref())
        .bind(filter.name.as_deref())
        .bind(filter.role.as_deref())
        .fetch_all(&self.pool)
        .await
        .context("Failed to fetch users")?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self), name = "db_find_user_by_email")]
    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, email, name, role FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .context("Failed to fetch user by email")?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self, user), fields(user_email = %user.email), name = "db_create_user")]
    async fn create_user(&self, user: NewUser) -> Result<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, email, name, role)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (email) DO NOTHING
            RETURNING id, email, name, role
            "#,
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(user.role.as_ref().map(UserRole::as_str))
        .fetch_optional(&self.pool)
        .await
        .context("Failed to insert user")?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self), name = "db_update_user_role")]
    async fn update_role(&self, email: &str, role: &UserRole) -> Result<u64> {
        let result = sqlx::query("UPDATE users SET role = $1 WHERE email = $2")
            .bind(role.as_str())
            .bind(email)
            .execute(&self.pool)
            .await
            .context("Failed to update user role")?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), name = "db_delete_user")]
    async fn delete_user(&self, id: Uuid) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .context("Failed to delete user")?;

        Ok(result.rows_affected())
    }

    #[instrument(skip(self), name = "db_count_users")]
    async fn count_users(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count users")?;

        Ok(count as u64)
    }
}
