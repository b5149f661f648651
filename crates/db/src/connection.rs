//! Per-call database sessions.
//!
//! There is no pool: every call to [`ConnectionProvider::connect`] opens a
//! fresh session and the caller owns it. Dropping the connection closes the
//! socket, so a session never outlives the scope that opened it even when a
//! query fails or the task panics. [`ConnectionProvider::release`] is the
//! graceful path that also tells the server goodbye.

use std::fmt;
use std::sync::Arc;

use sqlx::postgres::PgConnectOptions;
use sqlx::{Connection, PgConnection};

use crate::config::{ConfigError, DbConfig};
use crate::error::DbError;

/// Opens database sessions from immutable connect options.
///
/// Cheap to clone; the options are shared behind an `Arc`.
#[derive(Clone)]
pub struct ConnectionProvider {
    options: Arc<PgConnectOptions>,
}

impl fmt::Debug for ConnectionProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionProvider")
            .field("host", &self.options.get_host())
            .field("port", &self.options.get_port())
            .field("database", &self.options.get_database())
            .field("user", &self.options.get_username())
            .finish()
    }
}

impl ConnectionProvider {
    pub fn new(options: PgConnectOptions) -> Self {
        Self {
            options: Arc::new(options),
        }
    }

    pub fn from_config(config: &DbConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.connect_options()?))
    }

    /// Open a new session.
    ///
    /// Every failure here (unreachable host, rejected credentials, unknown
    /// database) is reported as [`DbError::Connection`].
    pub async fn connect(&self) -> Result<PgConnection, DbError> {
        PgConnection::connect_with(&self.options)
            .await
            .map_err(|e| {
                tracing::warn!(
                    error = %e,
                    host = %self.options.get_host(),
                    "Failed to open database session"
                );
                DbError::Connection(e)
            })
    }

    /// Close a session gracefully. Failures are logged and otherwise ignored.
    pub async fn release(&self, conn: PgConnection) {
        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "Database session did not close cleanly");
        }
    }
}
