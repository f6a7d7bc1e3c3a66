//! DTOs for the URL management endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// One stored URL as listed by `GET /urls`.
#[derive(Debug, Serialize)]
pub struct UrlDetail {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl From<UrlRecord> for UrlDetail {
    fn from(record: UrlRecord) -> Self {
        Self {
            code: record.code(),
            id: record.id,
            original_url: record.original_url,
            created_at: record.created_at,
            clicks: record.clicks,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self { message: "deleted" }
    }
}
