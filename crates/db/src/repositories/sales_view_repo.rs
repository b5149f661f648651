//! Read-only join across `departments`, `goods` and `sales`.

use sqlx::PgConnection;

use crate::models::dept_goods_sale::DeptGoodsSaleRow;

/// Default number of joined rows returned by the listing.
pub const DEFAULT_LIMIT: i64 = 50;

const QUERY: &str = "\
    SELECT d.dept_id, d.name AS dept_name, \
           g.good_id, g.name AS good_name, g.price::float8 AS price, g.quantity, \
           s.sales_id, s.check_no, s.date_sale, s.quantity AS sold_qty \
    FROM departments d \
    LEFT JOIN goods g ON g.dept_id = d.dept_id \
    LEFT JOIN sales s ON s.good_id = g.good_id \
    ORDER BY d.dept_id, g.good_id, s.sales_id \
    LIMIT $1";

pub struct SalesViewRepo;

impl SalesViewRepo {
    /// List at most `limit` joined rows, ordered by department, good, sale.
    ///
    /// The limit counts joined rows, so one busy department can use all of
    /// it. Negative limits return no rows.
    pub async fn list(
        conn: &mut PgConnection,
        limit: i64,
    ) -> Result<Vec<DeptGoodsSaleRow>, sqlx::Error> {
        sqlx::query_as::<_, DeptGoodsSaleRow>(QUERY)
            .bind(limit.max(0))
            .fetch_all(conn)
            .await
    }
}
