mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::{Router, routing::post};
use axum_test::TestServer;
use serde_json::json;
use seqlink::api::handlers::shorten_handler;
use seqlink::infrastructure::qr::{QrError, QrGenerator, QrResult};
use seqlink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;

fn shorten_app(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_shorten_success(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    response.assert_status_ok();

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "b");
    assert_eq!(body["short_url"], "http://sho.rt/b");
    assert_eq!(body["long_url"], "https://example.org/page");
    assert_eq!(body["qr_code"], "");
}

#[sqlx::test]
async fn test_shorten_same_url_returns_same_code(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_equivalent_urls_share_code(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let first = server
        .post("/shorten")
        .json(&json!({ "url": "https://Example.org:443/page#intro" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(first["code"], second["code"]);
    assert_eq!(first["long_url"], "https://example.org/page");
}

#[sqlx::test]
async fn test_shorten_distinct_urls_distinct_codes(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let a = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/a" }))
        .await
        .json::<serde_json::Value>();
    let b = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.com/b" }))
        .await
        .json::<serde_json::Value>();

    assert_eq!(a["code"], "b");
    assert_eq!(b["code"], "c");
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: SqlitePool) {
    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(shorten_app(state)).unwrap();

    for url in ["not-a-valid-url", "", "ftp://example.com/file", "javascript:alert(1)"] {
        let response = server.post("/shorten").json(&json!({ "url": url })).await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(body["error"]["code"], "validation_error", "url {url:?}");
    }

    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_too_long_url(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let url = format!("https://example.com/{}", "a".repeat(3000));
    let response = server.post("/shorten").json(&json!({ "url": url })).await;

    response.assert_status_bad_request();
}

#[sqlx::test]
async fn test_shorten_missing_field(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "link": "https://example.com" }))
        .await;

    assert!(response.status_code().is_client_error());
}

#[sqlx::test]
async fn test_shorten_short_url_from_host_header(pool: SqlitePool) {
    let state = common::create_test_state_without_base_url(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "localhost:3000")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_url"], "http://localhost:3000/b");
}

#[sqlx::test]
async fn test_shorten_short_url_respects_forwarded_proto(pool: SqlitePool) {
    let state = common::create_test_state_without_base_url(pool);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .add_header("Host", "s.example.com")
        .add_header("X-Forwarded-Proto", "https")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["short_url"], "https://s.example.com/b");
}

struct FixedQr;

impl QrGenerator for FixedQr {
    fn generate(&self, data: &str) -> QrResult<String> {
        Ok(format!("qr:{}", data))
    }
}

#[sqlx::test]
async fn test_shorten_includes_qr_of_short_url(pool: SqlitePool) {
    let mut state = common::create_test_state(pool);
    state.qr_generator = Arc::new(FixedQr);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    let body = response.json::<serde_json::Value>();
    assert_eq!(body["qr_code"], "qr:http://sho.rt/b");
}

struct FailingQr;

impl QrGenerator for FailingQr {
    fn generate(&self, _data: &str) -> QrResult<String> {
        Err(QrError::Encoding("data too long".to_string()))
    }
}

#[sqlx::test]
async fn test_shorten_succeeds_when_qr_fails(pool: SqlitePool) {
    let mut state = common::create_test_state(pool.clone());
    state.qr_generator = Arc::new(FailingQr);
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["code"], "b");
    assert_eq!(body["qr_code"], "");
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_shorten_without_origin_stores_nothing(pool: SqlitePool) {
    let app = shorten_app(common::create_test_state_without_base_url(pool.clone()));

    // Relative URI and no Host header: there is no public origin to build on.
    let request = Request::post("/shorten")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"url":"https://example.org/page"}"#))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[cfg(feature = "qr")]
#[sqlx::test]
async fn test_shorten_with_png_qr(pool: SqlitePool) {
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD;
    use seqlink::infrastructure::qr::PngQrGenerator;

    let mut state = common::create_test_state(pool);
    state.qr_generator = Arc::new(PngQrGenerator::default());
    let server = TestServer::new(shorten_app(state)).unwrap();

    let response = server
        .post("/shorten")
        .json(&json!({ "url": "https://example.org/page" }))
        .await;

    let body = response.json::<serde_json::Value>();
    let qr = body["qr_code"].as_str().unwrap();
    let png = STANDARD.decode(qr).unwrap();
    assert!(png.starts_with(b"\x89PNG"));
}
