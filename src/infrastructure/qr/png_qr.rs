//! PNG QR generator backed by the `qrcode` and `image` crates.

use super::service::{QrError, QrGenerator, QrResult};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Renders QR codes as grayscale PNG images, returned base64-encoded so the
/// payload can be dropped into a `data:image/png;base64,` URI.
pub struct PngQrGenerator {
    module_size: u32,
}

impl PngQrGenerator {
    /// Creates a generator drawing each QR module as a `module_size` pixel square.
    pub fn new(module_size: u32) -> Self {
        Self { module_size }
    }
}

impl Default for PngQrGenerator {
    fn default() -> Self {
        Self::new(10)
    }
}

impl QrGenerator for PngQrGenerator {
    fn generate(&self, data: &str) -> QrResult<String> {
        let code = QrCode::new(data.as_bytes()).map_err(|e| QrError::Encoding(e.to_string()))?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(self.module_size, self.module_size)
            .build();

        let mut png = Cursor::new(Vec::new());
        image
            .write_to(&mut png, ImageFormat::Png)
            .map_err(|e| QrError::Encoding(e.to_string()))?;

        Ok(STANDARD.encode(png.into_inner()))
    }
}
