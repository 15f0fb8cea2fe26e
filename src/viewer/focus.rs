// SPDX-License-Identifier: MPL-2.0
//! Focus trap for the open lightbox.
//!
//! The trap holds the focusable descendants of the lightbox surface, as
//! reported by the host on open. It only redirects keyboard iteration at
//! the boundaries: Tab on the last element wraps to the first, Shift-Tab
//! on the first wraps to the last. Everywhere else the host's natural
//! order applies.

/// Opaque handle to a focusable element on the presentation surface.
///
/// The viewer never dereferences the handle; it only hands it back to the
/// surface, so a stale handle degrades to a no-op on the host side.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FocusId(String);

impl FocusId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for FocusId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Keyboard-iteration guard over the lightbox's focusable elements.
#[derive(Debug, Clone, Default)]
pub struct FocusTrap {
    focusables: Vec<FocusId>,
}

impl FocusTrap {
    #[must_use]
    pub fn new(focusables: Vec<FocusId>) -> Self {
        Self { focusables }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.focusables.is_empty()
    }

    /// The element to focus when the lightbox opens.
    #[must_use]
    pub fn first(&self) -> Option<&FocusId> {
        self.focusables.first()
    }

    /// Returns the wrap target when iterating off either end of the set,
    /// `None` when the host's natural order should proceed.
    #[must_use]
    pub fn redirect(&self, current: &FocusId, backward: bool) -> Option<&FocusId> {
        let first = self.focusables.first()?;
        let last = self.focusables.last()?;
        if backward && current == first {
            Some(last)
        } else if !backward && current == last {
            Some(first)
        } else {
            None
        }
    }
}
