// SPDX-License-Identifier: MPL-2.0
//! Rotation angle domain type for the lightbox image.
//!
//! Only 90° increments are representable (0°, 90°, 180°, 270°).

/// Rotation angle in 90° increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RotationAngle(u16);

impl RotationAngle {
    /// No rotation (0°).
    pub const ZERO: Self = Self(0);

    /// Creates a new rotation angle, normalizing to valid 90° increments.
    ///
    /// Any value is rounded down to the nearest 90° increment, then wrapped
    /// to the 0–270° range.
    #[must_use]
    pub fn new(degrees: u16) -> Self {
        Self(((degrees / 90) * 90) % 360)
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(self) -> u16 {
        self.0
    }

    /// Rotates 90° clockwise, wrapping back to 0° after 270°.
    #[must_use]
    pub fn rotate_clockwise(self) -> Self {
        Self((self.0 + 90) % 360)
    }

    /// Returns true if the image is rotated away from its natural
    /// orientation.
    #[must_use]
    pub fn is_rotated(self) -> bool {
        self.0 != 0
    }
}

impl Default for RotationAngle {
    fn default() -> Self {
        Self::ZERO
    }
}
