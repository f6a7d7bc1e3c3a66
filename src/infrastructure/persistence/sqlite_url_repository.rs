//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::SqlitePool;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;

/// How many times `get_or_create` retries when the conflicting row vanishes
/// between the insert and the re-read (a concurrent delete).
const MAX_CREATE_ATTEMPTS: usize = 3;

/// Row shape of the `urls` table.
#[derive(Debug, sqlx::FromRow)]
struct UrlRow {
    id: i64,
    original_url: String,
    created_at: DateTime<Utc>,
    clicks: i64,
}

impl From<UrlRow> for UrlRecord {
    fn from(row: UrlRow) -> Self {
        UrlRecord::new(row.id, row.original_url, row.created_at, row.clicks)
    }
}

/// SQLite repository for URL records.
///
/// Each method runs exactly one statement on a pooled connection, so every
/// operation is atomic on its own and the connection goes back to the pool on
/// every exit path. Uniqueness of `original_url` is enforced by the
/// `urls_original_url_key` constraint, not by application locking.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Inserts a new record unless `original_url` already exists.
    ///
    /// Returns `None` when the uniqueness constraint swallowed the insert.
    ///
    /// `created_at` is taken inside the statement, under SQLite's write lock,
    /// so timestamps never run backwards relative to identities.
    async fn try_insert(&self, original_url: &str) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            INSERT INTO urls (original_url, created_at, clicks)
            VALUES (?1, strftime('%Y-%m-%dT%H:%M:%f+00:00', 'now'), 0)
            ON CONFLICT (original_url) DO NOTHING
            RETURNING id, original_url, created_at, clicks
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn get_or_create(&self, original_url: &str) -> Result<UrlRecord, AppError> {
        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            if let Some(created) = self.try_insert(original_url).await? {
                info!(id = created.id, url = %created.original_url, "Created URL record");
                return Ok(created);
            }

            if let Some(existing) = self.find_by_original_url(original_url).await? {
                debug!(id = existing.id, "URL already shortened");
                return Ok(existing);
            }

            warn!(attempt, url = original_url, "URL record deleted during creation, retrying");
        }

        Err(AppError::storage(
            "Failed to create URL record",
            json!({ "reason": "Record deleted concurrently" }),
        ))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, created_at, clicks
            FROM urls
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError> {
        let row = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, created_at, clicks
            FROM urls
            WHERE original_url = ?1
            "#,
        )
        .bind(original_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(UrlRecord::from))
    }

    async fn resolve_and_touch(&self, id: i64) -> Result<Option<String>, AppError> {
        let original_url = sqlx::query_scalar::<_, String>(
            r#"
            UPDATE urls
            SET clicks = clicks + 1
            WHERE id = ?1
            RETURNING original_url
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(original_url)
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, AppError> {
        let rows = sqlx::query_as::<_, UrlRow>(
            r#"
            SELECT id, original_url, created_at, clicks
            FROM urls
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(UrlRecord::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM urls WHERE id = ?1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        let deleted = result.rows_affected() > 0;
        if deleted {
            info!(id, "Deleted URL record");
        }

        Ok(deleted)
    }
}
