// SPDX-License-Identifier: MPL-2.0
//! Composed display transform for the lightbox image.
//!
//! The transform is applied as translate, then scale, then rotate; the
//! composition order matters for correct on-screen panning behavior.

use super::rotation::RotationAngle;
use super::zoom::ZoomScale;
use crate::config::defaults::MIN_SCALE;

/// The pan/scale/rotation state applied to the displayed image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub pan_x: f32,
    pub pan_y: f32,
    pub scale: ZoomScale,
    pub rotation: RotationAngle,
}

impl Transform {
    /// The identity transform: unzoomed, unrotated, centered.
    #[must_use]
    pub fn identity() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pan_x == 0.0
            && self.pan_y == 0.0
            && self.scale.is_unzoomed()
            && !self.rotation.is_rotated()
    }

    /// Sets the scale, clamping to the valid range. When the clamped scale
    /// lands back at 1x the pan is reset so the image re-centers.
    pub fn set_scale(&mut self, target: f32) {
        self.scale = ZoomScale::new(target);
        if self.scale.value() == MIN_SCALE {
            self.pan_x = 0.0;
            self.pan_y = 0.0;
        }
    }

    /// Accumulates a pan delta. Panning is only meaningful while zoomed;
    /// the caller gates on `scale`.
    pub fn pan_by(&mut self, dx: f32, dy: f32) {
        self.pan_x += dx;
        self.pan_y += dy;
    }

    /// Renders the composition as a CSS-style transform value.
    #[must_use]
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) scale({}) rotate({}deg)",
            format_scalar(self.pan_x),
            format_scalar(self.pan_y),
            format_scalar(self.scale.value()),
            self.rotation.degrees(),
        )
    }
}

/// Formats a scalar for display (removes unnecessary decimal places).
#[must_use]
pub fn format_scalar(value: f32) -> String {
    if value.fract().abs() < f32::EPSILON {
        // Value has no fractional part, so it represents an integer exactly
        #[allow(clippy::cast_possible_truncation)]
        let int_value = value as i32;
        format!("{int_value}")
    } else {
        format!("{value:.2}")
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}
