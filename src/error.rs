use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure kinds the core can raise. Exactly one kind per failure; the HTTP
/// translation lives in `IntoResponse` below.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed required input.
    #[error("{0}")]
    Validation(String),
    /// Missing, malformed, unknown or stale credentials.
    #[error("{0}")]
    Unauthorized(String),
    /// Entity absent or soft-deleted.
    #[error("{0}")]
    NotFound(String),
    /// Uniqueness violation (email).
    #[error("{0}")]
    Conflict(String),
    /// Unexpected persistence or hashing failure.
    #[error("{0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Internal(msg) => {
                // The only kind that gets logged here; the detail stays out of
                // the response body.
                tracing::error!(error = %msg, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound("Not found".into()),
            sqlx::Error::Database(db_err)
                if db_err.constraint().is_some_and(|c| c.contains("email")) =>
            {
                ApiError::Conflict("Email already registered".into())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}
