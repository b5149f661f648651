pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the data route tree.
///
/// ```text
/// /view/dept-goods-sales      departments ⋈ goods ⋈ sales listing (GET)
/// /proc/update-dept-info      call update_dept_info, re-read (POST)
/// /func/goods-by-date         call goods_by_date (GET)
/// /test/exception             call throw_test_error, report (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/view/dept-goods-sales", get(handlers::sales_view::list))
        .route(
            "/proc/update-dept-info",
            post(handlers::department::update_dept_info),
        )
        .route("/func/goods-by-date", get(handlers::goods::goods_by_date))
        .route(
            "/test/exception",
            post(handlers::diagnostics::test_exception),
        )
}
