// SPDX-License-Identifier: MPL-2.0
//! Default adapters for the application ports.
//!
//! Hosts embedding the engine in another environment bring their own
//! implementations; these cover the native desktop case.

pub mod http;
pub mod prefs;
