//! Handler for the `goods_by_date` function.

use axum::extract::State;
use axum::Json;
use deptstore_db::repositories::GoodsRepo;

use crate::error::AppResult;
use crate::extract::AppQuery;
use crate::query::SaleDateParams;
use crate::response::GoodsByDateResponse;
use crate::state::AppState;

/// GET /func/goods-by-date?d=YYYY-MM-DD
pub async fn goods_by_date(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SaleDateParams>,
) -> AppResult<Json<GoodsByDateResponse>> {
    let mut conn = state.db.connect().await?;
    let result = GoodsRepo::goods_by_date(&mut conn, params.d).await;
    state.db.release(conn).await;

    Ok(Json(GoodsByDateResponse {
        date: params.d,
        result: result?,
    }))
}
