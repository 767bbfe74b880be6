/// Error types for Board Service
///
/// This module defines all error types that can occur in board-service.
/// Errors are converted to appropriate HTTP responses for API clients.

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::fmt;

/// Result type for board-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Request payload or path parameter failed validation
    ValidationError(String),

    /// Resource not found
    NotFound(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            // Clients match on the bare detail object for 404s.
            AppError::NotFound(msg) => {
                HttpResponse::build(status).json(serde_json::json!({ "detail": msg }))
            }
            AppError::ValidationError(msg) => {
                HttpResponse::build(status).json(serde_json::json!({
                    "error": msg,
                    "status": status.as_u16(),
                }))
            }
        }
    }
}
