//! Response payloads for API handlers.
//!
//! Two endpoints answer with one of two shapes; those are `untagged` enums so
//! the JSON carries only the fields of the variant.

use chrono::NaiveDate;
use deptstore_core::types::DbId;
use deptstore_db::models::department::Department;
use deptstore_db::models::dept_goods_sale::DeptGoodsSaleRow;
use serde::Serialize;

pub const PROCEDURE_EXECUTED: &str = "Procedure executed";
pub const PROCEDURE_EXECUTED_NOT_FOUND: &str = "Procedure executed, but dept not found";
pub const NO_ERROR_UNEXPECTED: &str = "No error (unexpected)";

/// `{ "count": n, "rows": [...] }` where `count == rows.len()`.
#[derive(Debug, Serialize)]
pub struct DeptGoodsSalesResponse {
    pub count: usize,
    pub rows: Vec<DeptGoodsSaleRow>,
}

impl From<Vec<DeptGoodsSaleRow>> for DeptGoodsSalesResponse {
    fn from(rows: Vec<DeptGoodsSaleRow>) -> Self {
        Self {
            count: rows.len(),
            rows,
        }
    }
}

/// Outcome of `update_dept_info` followed by a re-read.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum DeptInfoResponse {
    Updated {
        message: &'static str,
        dept: Department,
    },
    NotFound {
        message: &'static str,
        dept_id: DbId,
    },
}

impl DeptInfoResponse {
    pub fn from_lookup(dept_id: DbId, dept: Option<Department>) -> Self {
        match dept {
            Some(dept) => Self::Updated {
                message: PROCEDURE_EXECUTED,
                dept,
            },
            None => Self::NotFound {
                message: PROCEDURE_EXECUTED_NOT_FOUND,
                dept_id,
            },
        }
    }
}

/// `goods_by_date` result; `result` is `null` when nothing was sold.
#[derive(Debug, Serialize)]
pub struct GoodsByDateResponse {
    pub date: NaiveDate,
    pub result: Option<String>,
}

/// Outcome of calling the always-failing diagnostic procedure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ExceptionReport {
    Handled {
        handled: bool,
        oracle_code: Option<i32>,
        oracle_message: String,
    },
    Unexpected {
        message: &'static str,
    },
}
