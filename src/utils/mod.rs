//! Helpers for URL processing and request handling.
//!
//! - [`url_normalizer`] - URL normalization and sanitization
//! - [`request_origin`] - Public origin extraction from HTTP headers

pub mod request_origin;
pub mod url_normalizer;
