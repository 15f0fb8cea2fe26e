// SPDX-License-Identifier: MPL-2.0
//! Media helpers: download filename derivation and image probing.

pub mod download;
pub mod probe;
