//! Department entity model and DTOs.

use deptstore_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `departments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Department {
    pub dept_id: DbId,
    pub name: String,
    pub info: Option<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for running `update_dept_info` against one department.
///
/// `dept_id` also accepts a numeric string (`"1"`) or a whole float (`1.0`).
#[derive(Debug, Clone, Deserialize)]
pub struct DeptInfoRequest {
    #[serde(deserialize_with = "lenient_id")]
    pub dept_id: DbId,
}

fn lenient_id<'de, D>(deserializer: D) -> Result<DbId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Int(DbId),
        Float(f64),
        Text(String),
    }

    match RawId::deserialize(deserializer)? {
        RawId::Int(id) => Ok(id),
        RawId::Float(f) if f.fract() == 0.0 && f.abs() < DbId::MAX as f64 => Ok(f as DbId),
        RawId::Float(f) => Err(serde::de::Error::custom(format!(
            "dept_id must be a whole number, got {f}"
        ))),
        RawId::Text(s) => s.trim().parse().map_err(|_| {
            serde::de::Error::custom(format!("dept_id must be an integer, got {s:?}"))
        }),
    }
}
