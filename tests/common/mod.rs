#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use seqlink::infrastructure::qr::NullQrGenerator;
use seqlink::state::AppState;
use sqlx::SqlitePool;
use std::sync::Arc;

pub const TEST_BASE_URL: &str = "http://sho.rt";

/// State with a fixed public base URL and QR rendering off.
pub fn create_test_state(pool: SqlitePool) -> AppState {
    AppState::new(
        Arc::new(pool),
        Arc::new(NullQrGenerator::new()),
        Some(TEST_BASE_URL.to_string()),
    )
}

/// State that derives the public base URL from the request.
pub fn create_test_state_without_base_url(pool: SqlitePool) -> AppState {
    AppState::new(Arc::new(pool), Arc::new(NullQrGenerator::new()), None)
}

pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Inserts a row directly, bypassing normalization, and returns its id.
pub async fn create_test_url(
    pool: &SqlitePool,
    url: &str,
    created_at: DateTime<Utc>,
    clicks: i64,
) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO urls (original_url, created_at, clicks) VALUES (?1, ?2, ?3) RETURNING id",
    )
    .bind(url)
    .bind(created_at)
    .bind(clicks)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn get_clicks(pool: &SqlitePool, id: i64) -> i64 {
    sqlx::query_scalar("SELECT clicks FROM urls WHERE id = ?1")
        .bind(id)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_urls(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
