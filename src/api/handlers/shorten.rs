//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, Uri},
};
use tracing::debug;
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_base_url;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// Submitting a URL that was already shortened returns the existing code, so
/// the call is idempotent.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.org/page" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "b",
///   "short_url": "http://localhost:3000/b",
///   "long_url": "https://example.org/page",
///   "qr_code": "PHN2ZyB4bWxucz0i..."
/// }
/// ```
///
/// `short_url` uses the configured `BASE_URL`, or the request's `Host` header
/// when none is configured. `qr_code` is empty when QR rendering is disabled
/// or fails.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is invalid, or if no `BASE_URL` is
/// configured and the request carries no host. Nothing is stored in either case.
pub async fn shorten_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    Json(payload): Json<ShortenRequest>,
) -> Result<Json<ShortenResponse>, AppError> {
    payload.validate()?;

    let base_url = match state.base_url {
        Some(ref base_url) => base_url.clone(),
        None => request_base_url(&headers, &uri)?,
    };

    let record = state.url_service.shorten(&payload.url).await?;
    let code = record.code();

    let short_url = state.url_service.get_short_url(&base_url, &code);
    let qr_code = state.qr_generator.generate_or_empty(&short_url);

    debug!(id = record.id, %code, "Shortened URL");

    Ok(Json(ShortenResponse {
        code,
        short_url,
        long_url: record.original_url,
        qr_code,
    }))
}
