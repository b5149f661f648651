//! Handler that checks server-raised errors reach the client intact.

use axum::extract::State;
use axum::Json;
use deptstore_db::repositories::DiagnosticsRepo;
use deptstore_db::DbError;

use crate::error::AppResult;
use crate::response::{ExceptionReport, NO_ERROR_UNEXPECTED};
use crate::state::AppState;

/// POST /test/exception
///
/// Calls `throw_test_error`. Catching its application error is the success
/// path; a call that returns normally is reported as an anomaly. Connection
/// and unclassified failures still propagate as errors.
pub async fn test_exception(State(state): State<AppState>) -> AppResult<Json<ExceptionReport>> {
    let mut conn = state.db.connect().await?;
    let outcome = DiagnosticsRepo::throw_test_error(&mut conn)
        .await
        .map_err(DbError::from);
    state.db.release(conn).await;

    match outcome {
        Ok(()) => {
            tracing::warn!("throw_test_error returned without raising");
            Ok(Json(ExceptionReport::Unexpected {
                message: NO_ERROR_UNEXPECTED,
            }))
        }
        Err(DbError::Application { code, message, .. }) => {
            tracing::info!(?code, %message, "Caught application error from throw_test_error");
            Ok(Json(ExceptionReport::Handled {
                handled: true,
                oracle_code: code,
                oracle_message: message,
            }))
        }
        Err(other) => Err(other.into()),
    }
}
