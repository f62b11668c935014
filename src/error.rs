use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;

/// JSON error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limit exceeded, try again in {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("Service not configured: {0}")]
    NotConfigured(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::NotConfigured(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // Upstream detail goes into `details` so `error` stays a stable,
        // user-presentable message.
        let (error, details) = match self {
            AppError::NotFound(msg) => (msg.clone(), None),
            AppError::Validation(msg) => (msg.clone(), None),
            AppError::RateLimited { .. } => ("Too many requests".to_string(), None),
            AppError::NotConfigured(msg) => (format!("Not configured: {}", msg), None),
            AppError::Database(e) => ("Database operation failed".to_string(), Some(e.to_string())),
            AppError::Internal(msg) => ("Internal server error".to_string(), Some(msg.clone())),
        };

        let mut builder = HttpResponse::build(self.status_code());
        if let AppError::RateLimited { retry_after } = self {
            builder.insert_header(("Retry-After", retry_after.to_string()));
        }

        builder.json(ErrorResponse { error, details })
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
