//! Query parameter types for API handlers.

use chrono::NaiveDate;
use serde::Deserialize;

/// `?limit=` for the departments / goods / sales listing.
///
/// Defaults to `DEFAULT_LIMIT` in the repository layer when absent.
#[derive(Debug, Deserialize)]
pub struct ListLimitParams {
    pub limit: Option<i64>,
}

/// `?d=YYYY-MM-DD` for the goods-by-date function.
#[derive(Debug, Deserialize)]
pub struct SaleDateParams {
    pub d: NaiveDate,
}
