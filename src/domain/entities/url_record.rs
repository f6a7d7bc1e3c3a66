//! URL record entity: one shortened destination.

use chrono::{DateTime, Utc};

use crate::domain::codec;

/// A stored mapping from a row identity to an original URL.
///
/// The public short code is not stored; it is derived from `id` on every read
/// via [`UrlRecord::code`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub clicks: i64,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, original_url: String, created_at: DateTime<Utc>, clicks: i64) -> Self {
        Self {
            id,
            original_url,
            created_at,
            clicks,
        }
    }

    /// Returns the public short code for this record.
    pub fn code(&self) -> String {
        codec::encode_id(self.id)
    }
}
