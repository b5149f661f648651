pub mod config;
pub mod connection;
pub mod error;
pub mod models;
pub mod repositories;

pub use config::{ConfigError, DbConfig};
pub use connection::ConnectionProvider;
pub use error::DbError;

/// Open a session and run `SELECT 1` to confirm the database is reachable.
pub async fn health_check(provider: &ConnectionProvider) -> Result<(), DbError> {
    let mut conn = provider.connect().await?;
    let result = sqlx::query("SELECT 1").execute(&mut conn).await;
    provider.release(conn).await;
    result?;
    Ok(())
}
