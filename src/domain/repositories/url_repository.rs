//! Repository trait for URL record storage.

use crate::domain::entities::UrlRecord;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the URL store.
///
/// The store owns the whole lifecycle of [`UrlRecord`]: it allocates
/// identities, enforces uniqueness of `original_url` and is the only writer of
/// the click counter. Every method is a single logical operation; callers never
/// hold a transaction across calls.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_url.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Returns the record for `original_url`, creating it if it does not exist.
    ///
    /// An existing record is returned unchanged (no click increment). A new
    /// record starts with `clicks = 0` and the current timestamp. Concurrent
    /// calls with the same URL observe the same record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_or_create(&self, original_url: &str) -> Result<UrlRecord, AppError>;

    /// Finds a record by identity without touching its click counter.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<UrlRecord>, AppError>;

    /// Finds a record by its original URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_original_url(
        &self,
        original_url: &str,
    ) -> Result<Option<UrlRecord>, AppError>;

    /// Increments the click counter of `id` and returns its original URL.
    ///
    /// The increment and the read are one atomic statement, so concurrent
    /// calls never lose an increment.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the record exists (counter incremented)
    /// - `Ok(None)` if it does not (nothing modified)
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn resolve_and_touch(&self, id: i64) -> Result<Option<String>, AppError>;

    /// Lists all records, newest first; ties broken by identity, highest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list(&self) -> Result<Vec<UrlRecord>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Permanently deletes a record. Identities are never reused.
    ///
    /// Returns `Ok(true)` if the record was found and deleted, `Ok(false)` if
    /// no record has that identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete_by_id(&self, id: i64) -> Result<bool, AppError>;
}
