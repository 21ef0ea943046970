//! Users repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{StorageError, StorageResult},
    models::user::{CreateUser, UserResponse},
};

#[derive(Clone)]
pub struct UsersRepository {
    pool: Pool<Postgres>,
}

impl UsersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get user by ID
    pub async fn get_by_id(&self, id: i32) -> StorageResult<UserResponse> {
        sqlx::query_as::<_, UserResponse>(
            "SELECT user_id, name, email FROM users WHERE user_id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| StorageError::query("Failed to query user", e))?
        .ok_or(StorageError::NotFound { entity: "User", id })
    }

    /// Create a new user
    pub async fn create(&self, user: &CreateUser) -> StorageResult<UserResponse> {
        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (name, email, password_hash)
            VALUES ($1, $2, $3)
            RETURNING user_id
            "#,
        )
        .bind(&user.name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                StorageError::Conflict(format!("Email {} is already registered", user.email))
            }
            e => StorageError::query("Failed to insert user", e),
        })?;

        Ok(UserResponse {
            user_id,
            name: user.name.clone(),
            email: user.email.clone(),
        })
    }
}
