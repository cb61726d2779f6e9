//! Repository for the `users` table.

use sqlx::PgPool;

use civicdesk_core::types::DbId;

use crate::models::user::{CreateUser, UserResponse};

/// Response column list shared across queries. The password hash is only
/// selected where a query genuinely needs it.
const COLUMNS: &str = "user_id, name, email, phone, role, created_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row without the hash.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<UserResponse, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (name, email, phone, role, password_hash)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.role)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<UserResponse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE user_id = $1");
        sqlx::query_as::<_, UserResponse>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Look up the id of the user holding an email, if any (case-sensitive).
    pub async fn find_id_by_email(
        pool: &PgPool,
        email: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("SELECT user_id FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Whether a user row with the given id exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List all users in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<UserResponse>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY user_id");
        sqlx::query_as::<_, UserResponse>(&query)
            .fetch_all(pool)
            .await
    }

    /// Delete a user by id. Succeeds whether or not the row existed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
