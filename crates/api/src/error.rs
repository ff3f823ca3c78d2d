use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use microgram_core::error::CoreError;
use microgram_db::error::RepoError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce the single-key
/// `{"error": "..."}` JSON envelope on every failure path.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `microgram_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Core(core) => AppError::Core(core),
            RepoError::Database(db) => AppError::Database(db),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                // Message kept verbatim for compatibility with existing
                // clients; the log line carries the key that missed.
                CoreError::NotFound { entity, key } => {
                    tracing::debug!(entity = %entity, key = %key, "Lookup missed");
                    (StatusCode::NOT_FOUND, "User not found".to_string())
                }
                CoreError::NotImplemented(what) => (
                    StatusCode::NOT_IMPLEMENTED,
                    format!("Not implemented: {what}"),
                ),
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
        };

        let body = json!({ "error": message });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// Driver error text never reaches clients: constraint violations and
/// connectivity failures are logged and answered with a sanitized 500.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
        sqlx::Error::Database(db_err) => {
            // PostgreSQL unique constraint violation: error code 23505.
            if db_err.code().as_deref() == Some("23505") {
                tracing::warn!(
                    constraint = db_err.constraint().unwrap_or("unknown"),
                    "Unique constraint violation"
                );
            } else {
                tracing::error!(error = %db_err, "Database error");
            }
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal error occurred".to_string(),
            )
        }
    }
}
