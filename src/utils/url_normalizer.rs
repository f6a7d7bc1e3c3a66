//! URL normalization for deduplication.
//!
//! Two submissions that point at the same resource should map to one record,
//! so the store only ever sees the canonical form produced here.

use url::Url;

/// Longest URL accepted for shortening.
pub const MAX_URL_LEN: usize = 2048;

/// Errors that can occur during URL normalization.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(#[from] url::ParseError),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedProtocol(String),

    #[error("URL has no host")]
    MissingHost,

    #[error("URL is {len} characters long, the limit is {max}")]
    TooLong { len: usize, max: usize },
}

/// Normalizes a URL to a canonical form.
///
/// - surrounding whitespace is trimmed
/// - only absolute `http`/`https` URLs with a host are accepted
/// - scheme and host are lowercased (done by the `url` parser)
/// - default ports (80, 443) are dropped
/// - the fragment is removed
/// - path and query are kept verbatim
///
/// # Errors
///
/// See [`UrlNormalizationError`].
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let input = input.trim();
    if input.len() > MAX_URL_LEN {
        return Err(UrlNormalizationError::TooLong {
            len: input.len(),
            max: MAX_URL_LEN,
        });
    }

    let mut url = Url::parse(input)?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(UrlNormalizationError::UnsupportedProtocol(
            url.scheme().to_string(),
        ));
    }

    if url.host_str().is_none_or(str::is_empty) {
        return Err(UrlNormalizationError::MissingHost);
    }

    // `Url` already omits a port equal to the scheme default, and host
    // lowercasing happens during parsing for special schemes.
    url.set_fragment(None);

    Ok(url.to_string())
}
