// SPDX-License-Identifier: MPL-2.0
//! Image record value objects.
//!
//! An [`ImageRecord`] describes one catalog entry: asset locations plus the
//! metadata that search and sort operate on. Records are immutable after
//! construction; the catalog is fixed for the lifetime of the session.

use std::fmt;

/// Stable identifier of a catalog record, unique within one catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(String);

impl RecordId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// One image in the catalog.
///
/// Tags are normalized to lowercase at construction so search matching
/// never has to re-normalize them.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageRecord {
    pub id: RecordId,
    /// Location of the grid preview asset.
    pub thumbnail_source: String,
    /// Location of the full-resolution asset shown in the lightbox.
    pub full_source: String,
    pub title: String,
    pub alt_text: String,
    /// Single-valued classification tag.
    pub category: String,
    /// Lowercase free-form tags used for search matching.
    tags: Vec<String>,
}

impl ImageRecord {
    #[must_use]
    pub fn new(
        id: impl Into<RecordId>,
        thumbnail_source: impl Into<String>,
        full_source: impl Into<String>,
        title: impl Into<String>,
        alt_text: impl Into<String>,
        category: impl Into<String>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        let tags = tags
            .into_iter()
            .map(|tag| tag.into().trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        Self {
            id: id.into(),
            thumbnail_source: thumbnail_source.into(),
            full_source: full_source.into(),
            title: title.into(),
            alt_text: alt_text.into(),
            category: category.into(),
            tags,
        }
    }

    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Case-insensitive substring match over title, alt text, and tags.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(&term)
            || self.alt_text.to_lowercase().contains(&term)
            || self.tags.iter().any(|tag| tag.contains(&term))
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
