// SPDX-License-Identifier: MPL-2.0
//! Lightbox zoom scale domain type.
//!
//! The scale is always within `[1.0, 4.0]`; this type clamps at
//! construction so usage sites never re-validate.

pub use crate::config::defaults::{DOUBLE_TAP_SCALE, MAX_SCALE, MIN_SCALE, SCALE_STEP};

/// Zoom scale, guaranteed to be within the valid range (1x–4x).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomScale(f32);

impl ZoomScale {
    /// Creates a new scale, clamping the value to the valid range.
    #[must_use]
    pub fn new(scale: f32) -> Self {
        Self(scale.clamp(MIN_SCALE, MAX_SCALE))
    }

    /// Returns the raw scale factor.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns whether the image is shown at its natural size.
    #[must_use]
    pub fn is_unzoomed(self) -> bool {
        self.0 <= MIN_SCALE
    }

    /// Returns whether the scale is at the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_SCALE
    }

    /// Increases the scale by one step.
    #[must_use]
    pub fn zoom_in(self) -> Self {
        Self::new(self.0 + SCALE_STEP)
    }

    /// Decreases the scale by one step.
    #[must_use]
    pub fn zoom_out(self) -> Self {
        Self::new(self.0 - SCALE_STEP)
    }

    /// Toggles between the unzoomed scale and the double-tap target.
    #[must_use]
    pub fn toggled(self) -> Self {
        if self.is_unzoomed() {
            Self::new(DOUBLE_TAP_SCALE)
        } else {
            Self::new(MIN_SCALE)
        }
    }
}

impl Default for ZoomScale {
    fn default() -> Self {
        Self(MIN_SCALE)
    }
}
