//! Flattened Departments ⋈ Goods ⋈ Sales projection.

use chrono::NaiveDate;
use deptstore_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// One row of the departments / goods / sales left join.
///
/// A department without goods has every good and sale field `None`; a good
/// without sales has every sale field `None`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DeptGoodsSaleRow {
    pub dept_id: DbId,
    pub dept_name: String,
    pub good_id: Option<DbId>,
    pub good_name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i32>,
    pub sales_id: Option<DbId>,
    pub check_no: Option<String>,
    pub date_sale: Option<NaiveDate>,
    pub sold_qty: Option<i32>,
}
