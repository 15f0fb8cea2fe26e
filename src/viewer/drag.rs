// SPDX-License-Identifier: MPL-2.0
//! Gesture tracking state.
//!
//! Handles grab-and-drag panning, double-tap detection, and horizontal
//! swipe navigation. The trackers are pure state machines: the host feeds
//! them pointer coordinates and timestamps, and they report the resulting
//! motion.

use crate::config::defaults::{DOUBLE_TAP_WINDOW_MS, SWIPE_MAX_VERTICAL, SWIPE_MIN_HORIZONTAL};
use std::time::{Duration, Instant};

/// A pointer position in presentation-surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Manages grab-and-drag state for panning a zoomed image.
#[derive(Debug, Clone, Default)]
pub struct DragState {
    active: bool,
    last_position: Option<Point>,
    moved: bool,
}

impl DragState {
    /// Starts a drag operation at the given position.
    pub fn start(&mut self, position: Point) {
        self.active = true;
        self.last_position = Some(position);
        self.moved = false;
    }

    /// Stops the drag operation.
    pub fn stop(&mut self) {
        self.active = false;
        self.last_position = None;
        self.moved = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Whether the pointer travelled since the drag started. A drag that
    /// never moved is a stationary tap.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Advances the drag to a new position, returning the delta since the
    /// previous position. Returns `None` when no drag is active.
    pub fn advance(&mut self, position: Point) -> Option<(f32, f32)> {
        if !self.active {
            return None;
        }
        let last = self.last_position?;
        self.last_position = Some(position);
        let delta = (position.x - last.x, position.y - last.y);
        if delta != (0.0, 0.0) {
            self.moved = true;
        }
        Some(delta)
    }
}

/// Detects double taps: two taps within the recognition window.
#[derive(Debug, Clone, Default)]
pub struct TapTracker {
    last_tap: Option<Instant>,
}

impl TapTracker {
    /// Registers a tap at the given time and reports whether it completed
    /// a double tap. A completing tap clears the tracker, so a third tap
    /// starts a fresh sequence.
    pub fn register(&mut self, at: Instant) -> bool {
        let window = Duration::from_millis(DOUBLE_TAP_WINDOW_MS);
        let doubled = self
            .last_tap
            .is_some_and(|last| at.saturating_duration_since(last) < window);
        self.last_tap = if doubled { None } else { Some(at) };
        doubled
    }
}

/// Direction of a recognized horizontal swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Tracks a touch sequence and recognizes horizontal swipes.
///
/// A swipe navigates only when the horizontal travel exceeds the minimum
/// and the vertical travel stays under the ceiling.
#[derive(Debug, Clone, Default)]
pub struct SwipeTracker {
    origin: Option<Point>,
}

impl SwipeTracker {
    /// Begins tracking at the touch-down position.
    pub fn begin(&mut self, position: Point) {
        self.origin = Some(position);
    }

    /// Abandons the current sequence without recognizing a swipe.
    pub fn cancel(&mut self) {
        self.origin = None;
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Ends the sequence at the touch-up position and returns the
    /// recognized direction, if any.
    pub fn end(&mut self, position: Point) -> Option<SwipeDirection> {
        let origin = self.origin.take()?;
        let dx = position.x - origin.x;
        let dy = position.y - origin.y;
        if dx.abs() > SWIPE_MIN_HORIZONTAL && dy.abs() < SWIPE_MAX_VERTICAL {
            Some(if dx < 0.0 {
                SwipeDirection::Left
            } else {
                SwipeDirection::Right
            })
        } else {
            None
        }
    }
}
