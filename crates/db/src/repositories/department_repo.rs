//! Repository for the `departments` table and the `update_dept_info` procedure.

use deptstore_core::types::DbId;
use sqlx::{Connection, PgConnection};

use crate::models::department::Department;

const COLUMNS: &str = "dept_id, name, info";

pub struct DepartmentRepo;

impl DepartmentRepo {
    /// Find a department by ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        dept_id: DbId,
    ) -> Result<Option<Department>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM departments WHERE dept_id = $1");
        sqlx::query_as::<_, Department>(&query)
            .bind(dept_id)
            .fetch_optional(conn)
            .await
    }

    /// Run `update_dept_info(dept_id)` in its own transaction and commit.
    ///
    /// An unknown ID is not an error; the procedure simply updates nothing.
    pub async fn update_info(conn: &mut PgConnection, dept_id: DbId) -> Result<(), sqlx::Error> {
        let mut tx = conn.begin().await?;
        sqlx::query("CALL update_dept_info($1)")
            .bind(dept_id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await
    }
}
