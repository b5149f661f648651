//! Handler for the `update_dept_info` procedure.

use axum::extract::State;
use axum::Json;
use deptstore_db::models::department::DeptInfoRequest;
use deptstore_db::repositories::DepartmentRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::response::DeptInfoResponse;
use crate::state::AppState;

/// POST /proc/update-dept-info
///
/// Calls the procedure and commits in one session, then re-reads the
/// department in a second session so the response reflects committed state.
/// A missing department is a normal outcome, not an error.
pub async fn update_dept_info(
    State(state): State<AppState>,
    AppJson(input): AppJson<DeptInfoRequest>,
) -> AppResult<Json<DeptInfoResponse>> {
    let dept_id = input.dept_id;

    let mut conn = state.db.connect().await?;
    let called = DepartmentRepo::update_info(&mut conn, dept_id).await;
    state.db.release(conn).await;
    called?;

    let mut conn = state.db.connect().await?;
    let dept = DepartmentRepo::find_by_id(&mut conn, dept_id).await;
    state.db.release(conn).await;
    let dept = dept?;

    tracing::info!(dept_id, found = dept.is_some(), "update_dept_info executed");
    Ok(Json(DeptInfoResponse::from_lookup(dept_id, dept)))
}
