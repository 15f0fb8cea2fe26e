// SPDX-License-Identifier: MPL-2.0
//! Network fetch port definition.
//!
//! The download operation needs exactly one capability: bytes for a URL,
//! or failure. No timeouts are defined and no retries are performed; a
//! failed fetch triggers the documented fallback (open the source
//! externally) and is never surfaced as an error.

use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching remote bytes.
#[derive(Debug, Clone)]
pub enum FetchError {
    /// The request could not be built or sent.
    Request(String),

    /// The server answered with a non-success status.
    Status(u16),

    /// The response body could not be read.
    Body(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(msg) => write!(f, "Request failed: {msg}"),
            FetchError::Status(code) => write!(f, "Unexpected status: {code}"),
            FetchError::Body(msg) => write!(f, "Failed to read body: {msg}"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// RemoteFetcher Trait
// =============================================================================

/// Port for fetching remote asset bytes.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; hosts commonly run the download
/// fetch off the input-event path.
pub trait RemoteFetcher: Send + Sync {
    /// Fetches the full body at `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the request fails, the status is not a
    /// success, or the body cannot be read.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError>;
}
