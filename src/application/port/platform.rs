// SPDX-License-Identifier: MPL-2.0
//! Platform capability port definition.
//!
//! Share sheet, clipboard, fullscreen, local save, and external open are
//! host capabilities that may or may not exist. Every capability is
//! optional: the `supports_*` probes let callers walk the documented
//! fallback chain (share → clipboard + toast → prompt) instead of failing.

use std::fmt;

/// Payload handed to the platform share capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

// =============================================================================
// PlatformError
// =============================================================================

/// Errors reported by platform capabilities.
///
/// All of these are absorbed by the callers; they exist so adapters can
/// report what happened, not to propagate.
#[derive(Debug, Clone)]
pub enum PlatformError {
    /// The capability is not available on this platform.
    Unavailable,

    /// The user dismissed the operation (e.g. cancelled the share sheet).
    Cancelled,

    /// The capability exists but the operation failed.
    Failed(String),
}

impl fmt::Display for PlatformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlatformError::Unavailable => write!(f, "Capability unavailable"),
            PlatformError::Cancelled => write!(f, "Cancelled by the user"),
            PlatformError::Failed(msg) => write!(f, "Platform operation failed: {msg}"),
        }
    }
}

impl std::error::Error for PlatformError {}

// =============================================================================
// PlatformCapabilities Trait
// =============================================================================

/// Port for optional host platform capabilities.
pub trait PlatformCapabilities {
    /// Whether a native share sheet is available.
    fn supports_share(&self) -> bool;

    /// Opens the share sheet with the given payload.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] on failure or user cancellation; callers
    /// absorb both.
    fn share(&mut self, payload: &SharePayload) -> Result<(), PlatformError>;

    /// Whether a writable clipboard is available.
    fn supports_clipboard(&self) -> bool;

    /// Writes `text` to the clipboard.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when the write fails; callers absorb it.
    fn clipboard_write(&mut self, text: &str) -> Result<(), PlatformError>;

    /// Last-resort share fallback: a synchronous prompt displaying `value`.
    fn prompt(&mut self, message: &str, value: &str);

    /// Requests or exits fullscreen for the lightbox surface. The resulting
    /// state is reported by the host through its own notification channel,
    /// not through this port.
    fn toggle_fullscreen(&mut self);

    /// Triggers a local save of `bytes` under the suggested file name.
    ///
    /// # Errors
    ///
    /// Returns a [`PlatformError`] when the save fails; callers absorb it.
    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), PlatformError>;

    /// Opens `url` in a new browsing context; the download fallback.
    fn open_external(&mut self, url: &str);
}
