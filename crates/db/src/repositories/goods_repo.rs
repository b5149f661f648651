//! Stored functions over goods.

use chrono::NaiveDate;
use sqlx::PgConnection;

pub struct GoodsRepo;

impl GoodsRepo {
    /// Call `goods_by_date(date)`: names of goods sold that day, or `None`.
    pub async fn goods_by_date(
        conn: &mut PgConnection,
        date: NaiveDate,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<String>>("SELECT goods_by_date($1)")
            .bind(date)
            .fetch_one(conn)
            .await
    }
}
