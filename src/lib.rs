// SPDX-License-Identifier: MPL-2.0
//! lightgrid: a headless image gallery engine.
//!
//! The crate models a filterable, sortable gallery grid with a lightbox
//! viewer (zoom, pan, rotate, gestures, focus trapping) and persisted
//! user preferences. All rendering and input capture stay on the host
//! side: the host feeds events in through [`gallery::Gallery`] and the
//! engine writes derived state out through the ports in
//! [`application::port`].

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod error;
pub mod gallery;
pub mod infrastructure;
pub mod media;
pub mod test_utils;
pub mod theme;
pub mod viewer;

pub use error::{Error, Result};
