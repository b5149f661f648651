//! Classification of sqlx failures into the three outcomes handlers care about.

use sqlx::error::DatabaseError;
use sqlx::postgres::PgDatabaseError;

/// SQLSTATE of an explicit `RAISE EXCEPTION` (and `raise_application_error`).
///
/// The rest of class `P0` (`no_data_found`, `too_many_rows`,
/// `assert_failure`) are PL/pgSQL runtime failures, not deliberate raises.
const RAISE_EXCEPTION_SQLSTATE: &str = "P0001";

/// A database failure, classified by origin.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The database could not be reached, or the session was lost.
    #[error("{0}")]
    Connection(#[source] sqlx::Error),

    /// Server-side logic raised an error on purpose.
    ///
    /// `code` is the numeric application code that `raise_application_error`
    /// stores in the error DETAIL, when present.
    #[error("{message}")]
    Application {
        code: Option<i32>,
        sqlstate: String,
        message: String,
    },

    /// Anything else.
    #[error("{0}")]
    Other(#[source] sqlx::Error),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => classify_database_error(db_err),
            sqlx::Error::Io(_) | sqlx::Error::Tls(_) => DbError::Connection(err),
            other => DbError::Other(other),
        }
    }
}

fn classify_database_error(db_err: Box<dyn DatabaseError>) -> DbError {
    let sqlstate = db_err.code().map(|c| c.into_owned());

    match sqlstate {
        Some(sqlstate) if sqlstate == RAISE_EXCEPTION_SQLSTATE => {
            let code = db_err
                .try_downcast_ref::<PgDatabaseError>()
                .and_then(PgDatabaseError::detail)
                .and_then(parse_application_code);

            DbError::Application {
                code,
                sqlstate,
                message: db_err.message().to_string(),
            }
        }
        _ => DbError::Other(sqlx::Error::Database(db_err)),
    }
}

fn parse_application_code(detail: &str) -> Option<i32> {
    detail.trim().parse().ok()
}
