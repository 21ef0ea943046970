//! Storage port and its implementations

pub mod loans;
pub mod memory;
pub mod users;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::{StorageError, StorageResult},
    models::{CreateUser, LoanRow, UserResponse},
};

pub use memory::InMemoryStorage;

/// Everything the services need from a storage backend
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Storage: Send + Sync {
    /// Check that the backend is reachable
    async fn ping(&self) -> StorageResult<()>;

    /// Rows of the user's orders still "On Loan", ordered by order id then item id
    async fn active_loan_rows(&self, user_id: i32) -> StorageResult<Vec<LoanRow>>;

    /// Insert a user and return its public view
    async fn create_user(&self, user: &CreateUser) -> StorageResult<UserResponse>;

    /// Fetch a user, failing with `StorageError::NotFound` when absent
    async fn get_user_by_id(&self, user_id: i32) -> StorageResult<UserResponse>;
}

/// PostgreSQL storage holding the connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub loans: loans::LoansRepository,
    pub users: users::UsersRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            loans: loans::LoansRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl Storage for Repository {
    async fn ping(&self) -> StorageResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StorageError::query("Database ping failed", e))?;
        Ok(())
    }

    async fn active_loan_rows(&self, user_id: i32) -> StorageResult<Vec<LoanRow>> {
        self.loans.active_loan_rows(user_id).await
    }

    async fn create_user(&self, user: &CreateUser) -> StorageResult<UserResponse> {
        self.users.create(user).await
    }

    async fn get_user_by_id(&self, user_id: i32) -> StorageResult<UserResponse> {
        self.users.get_by_id(user_id).await
    }
}
