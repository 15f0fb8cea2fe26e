// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Scale**: Lightbox zoom bounds and step
//! - **Gestures**: Double-tap and swipe recognition thresholds
//! - **Cards**: Gallery card size preference bounds
//! - **Download**: Filename derivation rules
//! - **Probing**: Encoded-size estimation parameters

// ==========================================================================
// Scale Defaults
// ==========================================================================

/// Scale applied when the lightbox opens (1.0 = unzoomed).
pub const MIN_SCALE: f32 = 1.0;

/// Maximum allowed lightbox scale.
pub const MAX_SCALE: f32 = 4.0;

/// Scale adjustment per zoom in/out operation.
pub const SCALE_STEP: f32 = 0.25;

/// Scale toggled to by a double tap or double click.
pub const DOUBLE_TAP_SCALE: f32 = 2.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Two taps within this window count as a double tap (milliseconds).
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Minimum horizontal travel for a swipe to navigate (pixels).
pub const SWIPE_MIN_HORIZONTAL: f32 = 40.0;

/// Maximum vertical travel allowed for a swipe to navigate (pixels).
pub const SWIPE_MAX_VERTICAL: f32 = 60.0;

// ==========================================================================
// Card Size Defaults
// ==========================================================================

/// Default minimum card width for the gallery grid (pixels).
pub const DEFAULT_CARD_MIN_PX: u16 = 220;

/// Smallest configurable card width.
pub const MIN_CARD_MIN_PX: u16 = 120;

/// Largest configurable card width.
pub const MAX_CARD_MIN_PX: u16 = 400;

// ==========================================================================
// Download Defaults
// ==========================================================================

/// Extension used when the source URL has none, or an implausible one.
pub const FALLBACK_EXTENSION: &str = "jpg";

/// Extensions longer than this are treated as implausible.
pub const MAX_EXTENSION_LEN: usize = 4;

// ==========================================================================
// Probing Defaults
// ==========================================================================

/// JPEG quality used when re-encoding to approximate the lossy size.
pub const SIZE_ESTIMATE_JPEG_QUALITY: u8 = 92;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Scale validation
    assert!(MIN_SCALE > 0.0);
    assert!(MAX_SCALE > MIN_SCALE);
    assert!(SCALE_STEP > 0.0);
    assert!(DOUBLE_TAP_SCALE > MIN_SCALE);
    assert!(DOUBLE_TAP_SCALE <= MAX_SCALE);

    // Gesture validation
    assert!(DOUBLE_TAP_WINDOW_MS > 0);
    assert!(SWIPE_MIN_HORIZONTAL > 0.0);
    assert!(SWIPE_MAX_VERTICAL > 0.0);

    // Card size validation
    assert!(MIN_CARD_MIN_PX > 0);
    assert!(MAX_CARD_MIN_PX >= MIN_CARD_MIN_PX);
    assert!(DEFAULT_CARD_MIN_PX >= MIN_CARD_MIN_PX);
    assert!(DEFAULT_CARD_MIN_PX <= MAX_CARD_MIN_PX);

    // Download validation
    assert!(!FALLBACK_EXTENSION.is_empty());
    assert!(FALLBACK_EXTENSION.len() <= MAX_EXTENSION_LEN);

    // Probing validation
    assert!(SIZE_ESTIMATE_JPEG_QUALITY > 0);
    assert!(SIZE_ESTIMATE_JPEG_QUALITY <= 100);
};
