//! User management service

use std::sync::Arc;
use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::user::{CreateUser, UserResponse},
    repository::Storage,
};

#[derive(Clone)]
pub struct UsersService {
    storage: Arc<dyn Storage>,
}

impl UsersService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Validate and register a new user
    pub async fn create_user(&self, user: CreateUser) -> AppResult<UserResponse> {
        user.validate().map_err(|e| AppError::Validation(e.to_string()))?;

        let created = self.storage.create_user(&user).await?;

        tracing::info!(user_id = created.user_id, "User created");
        Ok(created)
    }

    /// Get a user by ID, failing with a not-found storage error when absent
    pub async fn get_user(&self, user_id: i32) -> AppResult<UserResponse> {
        Ok(self.storage.get_user_by_id(user_id).await?)
    }
}
