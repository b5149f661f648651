//! Procedures that exist to exercise server-side error handling.

use sqlx::PgConnection;

pub struct DiagnosticsRepo;

impl DiagnosticsRepo {
    /// Call `throw_test_error()`, which always raises an application error.
    pub async fn throw_test_error(conn: &mut PgConnection) -> Result<(), sqlx::Error> {
        sqlx::query("CALL throw_test_error()").execute(conn).await?;
        Ok(())
    }
}
