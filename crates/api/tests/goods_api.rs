//! HTTP tests for `GET /func/goods-by-date`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

#[sqlx::test(migrations = "../../db/migrations", fixtures("retail"))]
async fn date_with_sales_returns_goods(_pool: PgPoolOptions, opts: PgConnectOptions) {
    let app = common::build_test_app(opts);
    let response = get(app, "/func/goods-by-date?d=2024-03-01").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["date"], "2024-03-01");
    assert_eq!(json["result"], "Bread, Milk");
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("retail"))]
async fn date_without_sales_returns_null_result(_pool: PgPoolOptions, opts: PgConnectOptions) {
    let app = common::build_test_app(opts);
    let response = get(app, "/func/goods-by-date?d=2024-03-05").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["date"], "2024-03-05");
    assert!(json["result"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("retail"))]
async fn function_raised_error_returns_400(_pool: PgPoolOptions, opts: PgConnectOptions) {
    let app = common::build_test_app(opts);
    let response = get(app, "/func/goods-by-date?d=2999-01-01").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["detail"],
        "Oracle error: Sale date must not be in the future"
    );
}

#[sqlx::test(migrations = "../../db/migrations", fixtures("retail"))]
async fn function_runtime_failure_returns_500(_pool: PgPoolOptions, opts: PgConnectOptions) {
    let provider = deptstore_db::ConnectionProvider::new(opts.clone());
    let mut conn = provider.connect().await.unwrap();
    sqlx::query(
        "CREATE OR REPLACE FUNCTION goods_by_date(p_date DATE) RETURNS TEXT LANGUAGE plpgsql AS $$ \
         DECLARE v TEXT; BEGIN SELECT name INTO STRICT v FROM goods WHERE false; RETURN v; END; $$",
    )
    .execute(&mut conn)
    .await
    .unwrap();
    provider.release(conn).await;

    let app = common::build_test_app(opts);
    let response = get(app, "/func/goods-by-date?d=2024-03-01").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let detail = body_json(response).await["detail"].as_str().unwrap().to_string();
    assert!(!detail.starts_with("Oracle error: "), "got {detail}");
    assert!(detail.contains("query returned no rows"), "got {detail}");
}

#[tokio::test]
async fn malformed_date_returns_422() {
    let app = common::build_unreachable_app();
    let response = get(app, "/func/goods-by-date?d=01.03.2024").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn missing_date_returns_422() {
    let app = common::build_unreachable_app();
    let response = get(app, "/func/goods-by-date").await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
