// SPDX-License-Identifier: MPL-2.0
//! Application layer: port definitions consumed by the gallery components.

pub mod port;
