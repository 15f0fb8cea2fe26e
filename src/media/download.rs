// SPDX-License-Identifier: MPL-2.0
//! Download filename derivation.
//!
//! The saved file is named after the slugified record title plus the
//! extension of the source URL. An absent or implausible extension
//! (longer than four characters) falls back to `jpg`.

use crate::config::defaults::{FALLBACK_EXTENSION, MAX_EXTENSION_LEN};

/// Lowercases the title and collapses whitespace runs into single dashes.
/// An empty title yields `"image"`.
#[must_use]
pub fn slugify(title: &str) -> String {
    let slug = title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase();
    if slug.is_empty() {
        "image".to_string()
    } else {
        slug
    }
}

/// Extracts the extension from a URL's path component, ignoring query and
/// fragment parts.
#[must_use]
pub fn extension_of(url: &str) -> Option<&str> {
    let path = url
        .split(['?', '#'])
        .next()
        .unwrap_or(url);
    let file = path.rsplit('/').next().unwrap_or(path);
    match file.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() => Some(ext),
        _ => None,
    }
}

/// Derives the suggested local file name for a record's source URL.
#[must_use]
pub fn file_name_for(title: &str, url: &str) -> String {
    let ext = match extension_of(url) {
        Some(ext) if ext.len() <= MAX_EXTENSION_LEN => ext,
        _ => FALLBACK_EXTENSION,
    };
    format!("{}.{}", slugify(title), ext)
}
