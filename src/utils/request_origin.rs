//! Public origin extraction from HTTP requests.
//!
//! Used to build `short_url` when no `BASE_URL` is configured, so a service
//! reached at `http://localhost:3000` hands out `http://localhost:3000/b`.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use serde_json::json;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Returns `scheme://host[:port]` for the current request.
///
/// - Host comes from the `Host` header, falling back to the URI authority
/// - Scheme comes from `X-Forwarded-Proto` (first value) when it is `http` or
///   `https`, then the URI scheme, and defaults to `http`
/// - The port is preserved: it is part of the public address
///
/// # Errors
///
/// Returns [`AppError::Validation`] if no host can be determined or the
/// `Host` header is not valid UTF-8.
pub fn request_base_url(headers: &HeaderMap, uri: &Uri) -> Result<String, AppError> {
    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::bad_request("Invalid Host header", json!({})))?
            .trim()
            .to_string(),
        None => uri
            .authority()
            .map(|authority| authority.as_str().to_string())
            .ok_or_else(|| AppError::bad_request("Missing Host header", json!({})))?,
    };

    if host.is_empty() {
        return Err(AppError::bad_request("Missing Host header", json!({})));
    }

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{}://{}", scheme, host))
}
