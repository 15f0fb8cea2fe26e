// SPDX-License-Identifier: MPL-2.0
//! Image metadata probing.
//!
//! Reads the natural pixel dimensions of an encoded image and approximates
//! its lossy-encoded size by re-encoding through a raster surface to JPEG
//! and measuring the output length. The approximation mirrors what the
//! original asset would weigh as a quality-92 JPEG, not its exact byte
//! size on the wire.

use crate::config::defaults::SIZE_ESTIMATE_JPEG_QUALITY;
use image_rs::codecs::jpeg::JpegEncoder;
use image_rs::GenericImageView;
use std::fmt;

// =============================================================================
// ProbeError
// =============================================================================

/// Errors that can occur while probing an image.
#[derive(Debug, Clone)]
pub enum ProbeError {
    /// The bytes could not be decoded as an image.
    Decode(String),

    /// Re-encoding for the size estimate failed.
    Encode(String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::Decode(msg) => write!(f, "Failed to decode image: {msg}"),
            ProbeError::Encode(msg) => write!(f, "Failed to estimate size: {msg}"),
        }
    }
}

impl std::error::Error for ProbeError {}

// =============================================================================
// ImageDetails
// =============================================================================

/// Natural dimensions plus the approximate encoded size of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageDetails {
    pub width: u32,
    pub height: u32,
    pub approx_encoded_bytes: u64,
}

impl ImageDetails {
    /// Display label for the natural resolution, e.g. `"1920 x 1080"`.
    #[must_use]
    pub fn resolution_label(&self) -> String {
        format!("{} x {}", self.width, self.height)
    }

    /// Display label for the approximate size, `"—"` when unknown.
    #[must_use]
    pub fn size_label(&self) -> String {
        format_bytes(self.approx_encoded_bytes)
    }
}

/// Decodes `bytes` and derives dimensions plus an approximate encoded size.
///
/// # Errors
///
/// Returns a [`ProbeError`] when the bytes cannot be decoded or the JPEG
/// re-encode fails. Callers report failure as empty labels, never as an
/// error to the user.
pub fn inspect(bytes: &[u8]) -> Result<ImageDetails, ProbeError> {
    let decoded =
        image_rs::load_from_memory(bytes).map_err(|e| ProbeError::Decode(e.to_string()))?;
    let (width, height) = decoded.dimensions();

    // JPEG carries no alpha channel, so flatten before re-encoding.
    let raster = decoded.to_rgb8();
    let mut encoded = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut encoded, SIZE_ESTIMATE_JPEG_QUALITY);
    raster
        .write_with_encoder(encoder)
        .map_err(|e| ProbeError::Encode(e.to_string()))?;

    Ok(ImageDetails {
        width,
        height,
        approx_encoded_bytes: encoded.len() as u64,
    })
}

/// Formats a byte count for display. Zero renders as `"—"` (unknown).
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "—".to_string();
    }
    const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    let precision = if value < 10.0 && unit > 0 { 2 } else { 0 };
    format!("{value:.precision$} {}", UNITS[unit])
}
