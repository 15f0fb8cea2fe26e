// SPDX-License-Identifier: MPL-2.0
//! Keyboard input mapping for the open lightbox.
//!
//! Maps host key names (DOM `KeyboardEvent.key` values) to viewer actions.
//! The mapping only applies while the lightbox is open; the gallery facade
//! ignores it otherwise.

/// Action requested by a key press while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Close,
    Previous,
    Next,
    ZoomIn,
    ZoomOut,
    Rotate,
    Fullscreen,
    TrapFocus { backward: bool },
}

/// Resolves a key name to its lightbox action, `None` for unbound keys.
#[must_use]
pub fn action_for_key(key: &str, shift: bool) -> Option<KeyAction> {
    match key {
        "Escape" => Some(KeyAction::Close),
        "ArrowLeft" => Some(KeyAction::Previous),
        "ArrowRight" => Some(KeyAction::Next),
        "+" | "=" => Some(KeyAction::ZoomIn),
        "-" | "_" => Some(KeyAction::ZoomOut),
        "r" | "R" => Some(KeyAction::Rotate),
        "f" | "F" => Some(KeyAction::Fullscreen),
        "Tab" => Some(KeyAction::TrapFocus { backward: shift }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navigation_keys_map_to_actions() {
        assert_eq!(action_for_key("Escape", false), Some(KeyAction::Close));
        assert_eq!(action_for_key("ArrowLeft", false), Some(KeyAction::Previous));
        assert_eq!(action_for_key("ArrowRight", false), Some(KeyAction::Next));
    }

    #[test]
    fn zoom_keys_accept_both_glyphs() {
        assert_eq!(action_for_key("+", false), Some(KeyAction::ZoomIn));
        assert_eq!(action_for_key("=", false), Some(KeyAction::ZoomIn));
        assert_eq!(action_for_key("-", false), Some(KeyAction::ZoomOut));
        assert_eq!(action_for_key("_", false), Some(KeyAction::ZoomOut));
    }

    #[test]
    fn letter_keys_are_case_insensitive() {
        assert_eq!(action_for_key("r", false), Some(KeyAction::Rotate));
        assert_eq!(action_for_key("R", false), Some(KeyAction::Rotate));
        assert_eq!(action_for_key("f", false), Some(KeyAction::Fullscreen));
        assert_eq!(action_for_key("F", false), Some(KeyAction::Fullscreen));
    }

    #[test]
    fn tab_carries_shift_state() {
        assert_eq!(
            action_for_key("Tab", false),
            Some(KeyAction::TrapFocus { backward: false })
        );
        assert_eq!(
            action_for_key("Tab", true),
            Some(KeyAction::TrapFocus { backward: true })
        );
    }

    #[test]
    fn unbound_keys_resolve_to_none() {
        assert_eq!(action_for_key("a", false), None);
        assert_eq!(action_for_key("Enter", false), None);
    }
}
