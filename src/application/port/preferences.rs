// SPDX-License-Identifier: MPL-2.0
//! Preference store port definition.
//!
//! A minimal key-value interface over string values: absent key means
//! default. There is no schema versioning. The engine uses the keys below;
//! adapters may reject keys they do not recognize.

use std::fmt;

/// Key under which the serialized favorite id list (JSON array) is stored.
pub const KEY_FAVORITES: &str = "gallery:favorites";

/// Key under which the theme name (`"dark"` or `"light"`) is stored.
pub const KEY_THEME: &str = "gallery:theme";

/// Key under which the card size preference (integer pixels) is stored.
pub const KEY_CARD_MIN: &str = "gallery:cardMin";

// =============================================================================
// StoreError
// =============================================================================

/// Errors that can occur when persisting a preference.
#[derive(Debug, Clone)]
pub enum StoreError {
    /// The value could not be written to the backing storage.
    WriteFailed(String),

    /// The value is not valid for the given key.
    InvalidValue { key: String, reason: String },

    /// The adapter does not recognize the key.
    UnknownKey(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::WriteFailed(msg) => write!(f, "Failed to persist preference: {msg}"),
            StoreError::InvalidValue { key, reason } => {
                write!(f, "Invalid value for {key}: {reason}")
            }
            StoreError::UnknownKey(key) => write!(f, "Unknown preference key: {key}"),
        }
    }
}

impl std::error::Error for StoreError {}

// =============================================================================
// PreferenceStore Trait
// =============================================================================

/// Port for persisting user preferences.
///
/// Reads are infallible by contract: an unreadable value is
/// indistinguishable from an absent one and falls back to the default.
pub trait PreferenceStore {
    /// Returns the stored value for `key`, or `None` when absent.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value is invalid for the key or the
    /// write fails. Callers treat persistence as best-effort and degrade.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_error_display() {
        let err = StoreError::WriteFailed("disk full".to_string());
        assert!(format!("{err}").contains("disk full"));

        let err = StoreError::InvalidValue {
            key: KEY_CARD_MIN.to_string(),
            reason: "not an integer".to_string(),
        };
        assert!(format!("{err}").contains("gallery:cardMin"));

        let err = StoreError::UnknownKey("gallery:unknown".to_string());
        assert!(format!("{err}").contains("gallery:unknown"));
    }

    // Test that the trait is object-safe
    fn _assert_object_safe(_: &dyn PreferenceStore) {}
}
