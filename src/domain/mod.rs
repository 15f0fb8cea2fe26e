// SPDX-License-Identifier: MPL-2.0
//! Domain types for the gallery.
//!
//! Pure value objects with no I/O and no presentation concerns.

pub mod record;

pub use record::{ImageRecord, RecordId};
