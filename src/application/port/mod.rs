// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the abstract interfaces the gallery engine consumes.
//! Hosts bind them to a concrete presentation layer, storage backend, HTTP
//! client, and platform capability set; reference adapters for the network
//! and preference-store ports live under [`crate::infrastructure`].
//!
//! # Available Ports
//!
//! - [`presentation`]: what is shown — grid visibility/order, lightbox image,
//!   transform, toasts, focus
//! - [`preferences`]: key-value persistence for favorites/theme/card size
//! - [`network`]: byte fetch for the download operation
//! - [`platform`]: fullscreen, share sheet, clipboard, prompt, local save
//!
//! # Design Notes
//!
//! - All traits use domain types only (no HTTP types, no widget handles)
//! - Every platform capability is optional; callers follow the documented
//!   fallback chain instead of failing hard
//! - Methods return `Result` with per-port error types

pub mod network;
pub mod platform;
pub mod preferences;
pub mod presentation;

// Re-export main types for convenience
pub use network::{FetchError, RemoteFetcher};
pub use platform::{PlatformCapabilities, PlatformError, SharePayload};
pub use preferences::{PreferenceStore, StoreError};
pub use presentation::PresentationSurface;
