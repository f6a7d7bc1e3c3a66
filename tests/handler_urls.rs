mod common;

use axum::{
    Router,
    routing::{delete, get},
};
use axum_test::TestServer;
use seqlink::api::handlers::{delete_url_handler, list_urls_handler};
use seqlink::state::AppState;
use sqlx::SqlitePool;

fn urls_app(state: AppState) -> Router {
    Router::new()
        .route("/urls", get(list_urls_handler))
        .route("/urls/{id}", delete(delete_url_handler))
        .with_state(state)
}

#[sqlx::test]
async fn test_list_empty(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(urls_app(state)).unwrap();

    let response = server.get("/urls").await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body, serde_json::json!([]));
}

#[sqlx::test]
async fn test_list_fields_and_order(pool: SqlitePool) {
    common::create_test_url(&pool, "https://example.com/old", common::at(2023, 3, 1), 5).await;
    common::create_test_url(&pool, "https://example.com/new", common::at(2024, 3, 1), 0).await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(urls_app(state)).unwrap();

    let body = server.get("/urls").await.json::<serde_json::Value>();
    let items = body.as_array().unwrap();

    assert_eq!(items.len(), 2);

    assert_eq!(items[0]["id"], 2);
    assert_eq!(items[0]["code"], "c");
    assert_eq!(items[0]["original_url"], "https://example.com/new");
    assert_eq!(items[0]["clicks"], 0);
    assert_eq!(items[0]["created_at"], "2024-03-01T12:00:00Z");

    assert_eq!(items[1]["id"], 1);
    assert_eq!(items[1]["code"], "b");
    assert_eq!(items[1]["clicks"], 5);
}

#[sqlx::test]
async fn test_delete_url(pool: SqlitePool) {
    let id = common::create_test_url(&pool, "https://example.com/", common::at(2024, 1, 1), 0).await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(urls_app(state)).unwrap();

    let response = server.delete(&format!("/urls/{}", id)).await;

    response.assert_status_ok();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["message"], "deleted");

    let list = server.get("/urls").await.json::<serde_json::Value>();
    assert_eq!(list, serde_json::json!([]));
    assert_eq!(common::count_urls(&pool).await, 0);
}

#[sqlx::test]
async fn test_delete_missing_url(pool: SqlitePool) {
    common::create_test_url(&pool, "https://example.com/", common::at(2024, 1, 1), 0).await;

    let state = common::create_test_state(pool.clone());
    let server = TestServer::new(urls_app(state)).unwrap();

    let response = server.delete("/urls/999").await;

    response.assert_status_not_found();
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "not_found");
    assert_eq!(common::count_urls(&pool).await, 1);
}

#[sqlx::test]
async fn test_delete_twice(pool: SqlitePool) {
    let id = common::create_test_url(&pool, "https://example.com/", common::at(2024, 1, 1), 0).await;

    let state = common::create_test_state(pool);
    let server = TestServer::new(urls_app(state)).unwrap();

    server.delete(&format!("/urls/{}", id)).await.assert_status_ok();
    server
        .delete(&format!("/urls/{}", id))
        .await
        .assert_status_not_found();
}

#[sqlx::test]
async fn test_delete_non_numeric_id(pool: SqlitePool) {
    let state = common::create_test_state(pool);
    let server = TestServer::new(urls_app(state)).unwrap();

    let response = server.delete("/urls/abc").await;

    response.assert_status_bad_request();
}
