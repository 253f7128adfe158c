use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Email already exists")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid API Key")]
    InvalidApiKey,

    #[error("Question cannot be empty")]
    EmptyQuestion,

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("Password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, detail) = match &self {
            ApiError::DuplicateEmail => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::InvalidCredentials | ApiError::InvalidApiKey => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            ApiError::EmptyQuestion => (StatusCode::BAD_REQUEST, self.to_string()),
            ApiError::Database(e) => {
                error!(error = %e, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
            ApiError::PasswordHash(e) => {
                error!(error = %e, "password hashing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred.".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Standardized error response body: `{"detail": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
