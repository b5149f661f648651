use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use deptstore_core::error::CoreError;
use deptstore_db::DbError;
use serde_json::json;

/// Prefix on `detail` for errors raised by server-side database logic.
///
/// Clients match on this prefix.
pub const DB_ERROR_PREFIX: &str = "Oracle error: ";

/// Application-level error type for HTTP handlers.
///
/// Every variant renders as `{ "detail": ... }`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input that could not be decoded, rejected before any database work.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A classified database failure.
    #[error(transparent)]
    Db(#[from] DbError),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Db(DbError::from(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Core(CoreError::Validation(rejection.body_text()))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, msg.clone())
            }
            AppError::Db(DbError::Application {
                code,
                sqlstate,
                message,
            }) => {
                tracing::warn!(?code, %sqlstate, %message, "Database raised an application error");
                (StatusCode::BAD_REQUEST, format!("{DB_ERROR_PREFIX}{message}"))
            }
            AppError::Db(DbError::Connection(err)) => {
                tracing::error!(error = %err, "Database connection error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            AppError::Db(DbError::Other(err)) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}
