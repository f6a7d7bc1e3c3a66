//! URL shortening, resolution and management service.

use std::sync::Arc;

use serde_json::json;
use tracing::debug;

use crate::domain::codec;
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::UrlRepository;
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_url;

/// Service composing the codec and the URL store.
///
/// Handles URL normalization before storage and turns store misses into
/// [`AppError::NotFound`].
pub struct UrlService<R: UrlRepository> {
    url_repository: Arc<R>,
}

impl<R: UrlRepository> UrlService<R> {
    /// Creates a new URL service.
    pub fn new(url_repository: Arc<R>) -> Self {
        Self { url_repository }
    }

    /// Shortens a URL, returning the existing record if it was shortened before.
    ///
    /// The URL is normalized first, so `https://EXAMPLE.com:443/a#top` and
    /// `https://example.com/a` share one record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is not an absolute http(s) URL.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn shorten(&self, long_url: &str) -> Result<UrlRecord, AppError> {
        let normalized_url = normalize_url(long_url).map_err(|e| {
            AppError::bad_request("Invalid URL format", json!({ "reason": e.to_string() }))
        })?;

        self.url_repository.get_or_create(&normalized_url).await
    }

    /// Resolves a short code to its destination and counts the click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed or no record has
    /// the decoded identity. Nothing is incremented in either case.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        let id = codec::decode_id(code).map_err(|e| {
            debug!(code, error = %e, "Rejected short code");
            AppError::not_found(
                "Short link not found",
                json!({ "code": code, "reason": e.to_string() }),
            )
        })?;

        self.url_repository
            .resolve_and_touch(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Looks up a record by code without counting a click.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is malformed,
    /// [`AppError::NotFound`] if no record matches.
    pub async fn find_by_code(&self, code: &str) -> Result<UrlRecord, AppError> {
        let id = codec::decode_id(code)?;

        self.url_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": code })))
    }

    /// Lists all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn list_urls(&self) -> Result<Vec<UrlRecord>, AppError> {
        self.url_repository.list().await
    }

    /// Deletes a record by identity.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no record has that identity.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn delete_url(&self, id: i64) -> Result<(), AppError> {
        if self.url_repository.delete_by_id(id).await? {
            Ok(())
        } else {
            Err(AppError::not_found("URL not found", json!({ "id": id })))
        }
    }

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn count_urls(&self) -> Result<i64, AppError> {
        self.url_repository.count().await
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn get_short_url(&self, base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
