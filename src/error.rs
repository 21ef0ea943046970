//! Error types for the lending server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes exposed in error bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    DbFailure = 3,
    NoSuchUser = 4,
    Duplicate = 8,
    BadValue = 18,
}

/// Failures raised by a storage backend
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{context}: {source}")]
    Query {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Wrap a driver error with a short description of the failed operation.
    pub fn query(context: &'static str, source: sqlx::Error) -> Self {
        Self::Query { context, source }
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl AppError {
    fn parts(&self) -> (StatusCode, ErrorCode, String) {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone()),
            AppError::Storage(StorageError::NotFound { entity, id }) => (
                StatusCode::NOT_FOUND,
                ErrorCode::NoSuchUser,
                format!("{} with id {} not found", entity, id),
            ),
            AppError::Storage(StorageError::Conflict(msg)) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_storage_not_found_maps_to_404() {
        let err = AppError::from(StorageError::NotFound { entity: "User", id: 7 });
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(code, ErrorCode::NoSuchUser);
        assert_eq!(message, "User with id 7 not found");
    }

    #[test]
    fn test_query_failure_hides_driver_details() {
        let source = sqlx::Error::Io(io::Error::from(io::ErrorKind::ConnectionRefused));
        let err = AppError::from(StorageError::query("Failed to query active loans", source));
        let (status, code, message) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, ErrorCode::DbFailure);
        assert_eq!(message, "Database error");
    }

    #[test]
    fn test_bad_request_maps_to_400() {
        let response = AppError::BadRequest("Invalid user ID format".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
