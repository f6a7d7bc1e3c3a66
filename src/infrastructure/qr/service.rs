//! QR generator trait and error types.

use tracing::warn;

/// Errors that can occur while rendering a QR code.
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("QR encoding failed: {0}")]
    Encoding(String),
}

/// Result type for QR operations.
pub type QrResult<T> = Result<T, QrError>;

/// Turns a string (the short URL) into an image payload.
///
/// QR codes are decoration: a failing or missing generator must never fail a
/// shorten request. Callers should use [`QrGenerator::generate_or_empty`].
///
/// # Implementations
///
/// - [`crate::infrastructure::qr::PngQrGenerator`] - base64-encoded PNG (feature `qr`)
/// - [`crate::infrastructure::qr::NullQrGenerator`] - always empty
pub trait QrGenerator: Send + Sync {
    /// Renders `data` and returns the encoded image payload.
    ///
    /// # Errors
    ///
    /// Returns [`QrError::Encoding`] if the data cannot be encoded.
    fn generate(&self, data: &str) -> QrResult<String>;

    /// Whether this generator produces real images.
    fn is_available(&self) -> bool {
        true
    }

    /// Renders `data`, degrading to an empty payload on failure.
    fn generate_or_empty(&self, data: &str) -> String {
        match self.generate(data) {
            Ok(payload) => payload,
            Err(e) => {
                warn!(error = %e, "QR generation failed, returning empty payload");
                String::new()
            }
        }
    }
}
