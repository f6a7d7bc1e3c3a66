//! No-op QR generator for disabled QR rendering.

use super::service::{QrGenerator, QrResult};
use tracing::debug;

/// A QR generator that never renders anything.
///
/// Used when the `qr` feature is compiled out, when `QR_ENABLED=false`, and in
/// tests. Every payload is the empty string.
pub struct NullQrGenerator;

impl NullQrGenerator {
    /// Creates a new NullQrGenerator instance.
    pub fn new() -> Self {
        debug!("Using NullQrGenerator (QR codes disabled)");
        Self
    }
}

impl Default for NullQrGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl QrGenerator for NullQrGenerator {
    fn generate(&self, _data: &str) -> QrResult<String> {
        Ok(String::new())
    }

    fn is_available(&self) -> bool {
        false
    }
}
