//! Error handling - uniform status-code mapping for all handlers.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use cinelog_shared::ErrorResponse;
use std::fmt;

use cinelog_core::error::{DomainError, RepoError};
use cinelog_core::ports::{AuthError, StorageError};

/// Application-level error type that converts to `{message}` responses.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    /// Duplicate email. Reported as 400, matching the signup contract.
    Conflict(String),
    /// Login failure; one message regardless of the underlying cause.
    InvalidCredentials,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            AppError::InvalidCredentials => write!(f, "Invalid credentials"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Conflict(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::NotFound(detail) => ErrorResponse::new(detail),
            AppError::BadRequest(detail) => ErrorResponse::new(detail),
            AppError::Conflict(detail) => ErrorResponse::new(detail),
            AppError::InvalidCredentials => ErrorResponse::new("Invalid credentials"),
            AppError::Internal(detail) => {
                // Log internal errors; the body only carries a diagnostic tail
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::new("Server error").with_error(detail)
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { entity } => AppError::NotFound(format!("{} not found", entity)),
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Duplicate(msg) => AppError::Conflict(msg),
            DomainError::InvalidCredentials => AppError::InvalidCredentials,
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound => AppError::NotFound("Resource not found".to_string()),
            RepoError::Constraint(msg) => AppError::Conflict(msg),
            RepoError::Connection(msg) => {
                tracing::error!("Database connection error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
            RepoError::Query(msg) => {
                tracing::error!("Database query error: {}", msg);
                AppError::Internal("Database error".to_string())
            }
        }
    }
}

impl From<StorageError> for AppError {
    fn from(err: StorageError) -> Self {
        tracing::error!("Storage error: {}", err);
        AppError::Internal(err.to_string())
    }
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        // Handlers only hit this path for hashing/minting failures;
        // token verification errors surface through the Identity extractor.
        AppError::Internal(err.to_string())
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
