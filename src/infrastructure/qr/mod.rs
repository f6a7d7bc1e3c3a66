//! QR code rendering for shortened links.
//!
//! Provides a [`QrGenerator`] trait with two implementations:
//! - [`PngQrGenerator`] - base64 PNG output (cargo feature `qr`)
//! - [`NullQrGenerator`] - empty payloads when QR rendering is unavailable

mod null_qr;
mod service;
#[cfg(feature = "qr")]
mod png_qr;

pub use null_qr::NullQrGenerator;
pub use service::{QrError, QrGenerator, QrResult};
#[cfg(feature = "qr")]
pub use png_qr::PngQrGenerator;

use std::sync::Arc;

/// Picks the generator for the current build and configuration.
pub fn from_config(enabled: bool) -> Arc<dyn QrGenerator> {
    if enabled {
        enabled_generator()
    } else {
        tracing::info!("QR codes disabled by configuration");
        Arc::new(NullQrGenerator::new())
    }
}

#[cfg(feature = "qr")]
fn enabled_generator() -> Arc<dyn QrGenerator> {
    tracing::info!("QR codes enabled (PNG)");
    Arc::new(PngQrGenerator::default())
}

#[cfg(not(feature = "qr"))]
fn enabled_generator() -> Arc<dyn QrGenerator> {
    tracing::warn!("QR_ENABLED is set but the `qr` feature is not compiled in");
    Arc::new(NullQrGenerator::new())
}
