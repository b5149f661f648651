//! Handler for the departments / goods / sales listing.

use axum::extract::State;
use axum::Json;
use deptstore_db::repositories::sales_view_repo::DEFAULT_LIMIT;
use deptstore_db::repositories::SalesViewRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::ListLimitParams;
use crate::response::DeptGoodsSalesResponse;
use crate::state::AppState;

/// GET /view/dept-goods-sales?limit=50
///
/// Left join of departments, goods and sales. `limit` bounds joined rows and
/// is applied by the database, not here.
pub async fn list(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ListLimitParams>,
) -> AppResult<Json<DeptGoodsSalesResponse>> {
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT);

    let mut conn = state.db.connect().await?;
    let rows = SalesViewRepo::list(&mut conn, limit).await;
    state.db.release(conn).await;

    let rows = rows?;
    tracing::debug!(limit, count = rows.len(), "Listed department goods sales");
    Ok(Json(DeptGoodsSalesResponse::from(rows)))
}
