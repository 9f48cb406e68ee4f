// tests/support/helpers.rs
use std::sync::Arc;
use std::time::Duration;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use catalog_core::application::services::ApplicationServices;
use catalog_core::domain::article::ArticleRepository;
use catalog_core::infrastructure::{
    database,
    repositories::{InMemoryArticleRepository, SqliteArticleRepository},
};
use catalog_core::presentation::http::{
    routes::{RouterOptions, build_router},
    state::HttpState,
};
use serde_json::Value;
use sqlx::SqlitePool;

const SQLITE_TEST_TIMEOUT: Duration = Duration::from_secs(5);

/// A private in-memory SQLite database with the schema applied.
pub async fn sqlite_pool() -> SqlitePool {
    let pool = database::init_pool("sqlite::memory:", 1, SQLITE_TEST_TIMEOUT)
        .await
        .expect("open in-memory sqlite");
    database::run_migrations(&pool).await.expect("migrate");
    pool
}

pub fn sqlite_repo_on(pool: SqlitePool) -> SqliteArticleRepository {
    SqliteArticleRepository::new(Arc::new(pool), SQLITE_TEST_TIMEOUT)
}

pub async fn sqlite_repo() -> SqliteArticleRepository {
    sqlite_repo_on(sqlite_pool().await)
}

pub fn services_with(repo: Arc<dyn ArticleRepository>) -> ApplicationServices {
    ApplicationServices::new(repo)
}

pub fn make_router_with_repo(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    let state = HttpState {
        services: Arc::new(services_with(repo)),
    };
    build_router(state, RouterOptions::default())
}

pub fn make_test_router() -> axum::Router {
    make_router_with_repo(Arc::new(InMemoryArticleRepository::new()))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let body_bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and error string.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_error: &str,
) -> String {
    assert_eq!(resp.status(), expected_status);
    let ct = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();
    assert!(ct.starts_with("application/json"), "unexpected content-type: {}", ct);

    let (_, json) = read_json(resp).await;
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {}", err_field);
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
    msg_field.to_string()
}
