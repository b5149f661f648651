#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::postgres::PgConnectOptions;
use tower::ServiceExt;

use deptstore_api::config::ServerConfig;
use deptstore_api::router::build_app_router;
use deptstore_api::state::AppState;
use deptstore_db::ConnectionProvider;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
    }
}

/// Build the full application router against the given database.
pub fn build_test_app(opts: PgConnectOptions) -> Router {
    let state = AppState {
        db: ConnectionProvider::new(opts),
    };
    build_app_router(state, &test_config())
}

/// Build the router against a database that refuses every connection.
pub fn build_unreachable_app() -> Router {
    let opts = PgConnectOptions::new_without_pgpass()
        .host("127.0.0.1")
        .port(1)
        .database("retail")
        .username("shop")
        .password("s3cret");
    build_test_app(opts)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
