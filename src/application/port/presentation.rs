// SPDX-License-Identifier: MPL-2.0
//! Presentation surface port definition.
//!
//! The surface is the single write target for derived view state: grid
//! visibility and ordering, the lightbox image and its transform, detail
//! labels, toasts, and focus. The engine never reads layout back — the
//! only queries are focus-related, which the focus trap needs.

use crate::catalog::CatalogView;
use crate::domain::ImageRecord;
use crate::viewer::focus::FocusId;

/// Port for everything the gallery shows.
///
/// Implementations must support per-record show/hide and reordering for
/// the grid, and a single "current transform" application for the viewer
/// image. A recording double for tests is provided in
/// [`crate::test_utils::RecordingSurface`].
pub trait PresentationSurface {
    /// Applies a recomputed catalog view: every record's visibility flag is
    /// (re)written in the given order, and the result label is updated.
    fn apply_catalog(&mut self, view: &CatalogView);

    /// Shows a record in the lightbox, with its 1-based position counter.
    fn show_image(&mut self, record: &ImageRecord, position: usize, total: usize);

    /// Applies the composed transform to the lightbox image.
    fn apply_transform(&mut self, css: &str);

    /// Opens or closes the lightbox surface.
    fn set_lightbox_open(&mut self, open: bool);

    /// Updates the resolution/size detail labels. Empty strings clear them.
    fn show_details(&mut self, resolution: &str, size: &str);

    /// Shows a transient informational message.
    fn show_toast(&mut self, message: &str);

    /// The element currently holding focus, if the host tracks one.
    fn focused_element(&self) -> Option<FocusId>;

    /// Moves focus to the given element; a stale handle is a no-op.
    fn focus(&mut self, target: &FocusId);

    /// The focusable descendants of the lightbox surface, in iteration
    /// order. Recomputed by the viewer on every open.
    fn focusable_elements(&self) -> Vec<FocusId>;
}
