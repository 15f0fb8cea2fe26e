// SPDX-License-Identifier: MPL-2.0
//! Catalog state: the searchable/sortable/filterable collection of records.
//!
//! The catalog owns the fixed record list plus the active criteria
//! (filter, search term, sort key) and favorite membership. Every criterion
//! change is followed by [`Catalog::recompute`], which derives the visible
//! ordering and the human-readable result label pushed to the presentation
//! surface.

use crate::domain::{ImageRecord, RecordId};
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Active filter selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    All,
    Favorites,
    /// Matches records whose category equals the given name. A category
    /// no record carries simply yields zero visible records.
    Category(String),
}

impl Filter {
    /// Capitalized label appended to the result count, empty for `All`.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Filter::All => String::new(),
            Filter::Favorites => "Favorites".to_string(),
            Filter::Category(name) => capitalize(name),
        }
    }
}

/// Active sort selection. `Default` preserves catalog insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Default,
    /// Title ascending.
    Name,
    /// Category ascending, title as tie-break.
    Category,
}

/// One record in the derived view, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub record: ImageRecord,
    pub visible: bool,
}

/// Result of [`Catalog::recompute`]: the full ordering with visibility
/// flags, the visible count, and the result label.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView {
    pub entries: Vec<CatalogEntry>,
    pub visible_count: usize,
    pub results_label: String,
}

impl CatalogView {
    /// The visible records in display order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<ImageRecord> {
        self.entries
            .iter()
            .filter(|entry| entry.visible)
            .map(|entry| entry.record.clone())
            .collect()
    }
}

/// State-holding component for the gallery grid.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<ImageRecord>,
    filter: Filter,
    search_term: String,
    sort: SortKey,
    favorites: BTreeSet<RecordId>,
}

impl Catalog {
    #[must_use]
    pub fn new(records: Vec<ImageRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Replaces favorite membership wholesale, e.g. when restoring from the
    /// preference store. Ids that match no record are kept; they are harmless
    /// and may refer to records of a different page variant.
    pub fn set_favorites(&mut self, favorites: impl IntoIterator<Item = RecordId>) {
        self.favorites = favorites.into_iter().collect();
    }

    pub fn set_filter(&mut self, filter: Filter) -> CatalogView {
        self.filter = filter;
        self.recompute()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) -> CatalogView {
        self.search_term = term.into();
        self.recompute()
    }

    pub fn set_sort(&mut self, sort: SortKey) -> CatalogView {
        self.sort = sort;
        self.recompute()
    }

    /// Flips favorite membership for the given id and returns whether the
    /// record is a favorite afterwards. Toggling twice restores the
    /// original membership.
    pub fn toggle_favorite(&mut self, id: &RecordId) -> bool {
        if self.favorites.remove(id) {
            false
        } else {
            self.favorites.insert(id.clone());
            true
        }
    }

    #[must_use]
    pub fn is_favorite(&self, id: &RecordId) -> bool {
        self.favorites.contains(id)
    }

    #[must_use]
    pub fn favorites(&self) -> impl Iterator<Item = &RecordId> {
        self.favorites.iter()
    }

    #[must_use]
    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn sort(&self) -> SortKey {
        self.sort
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derives the current view: sorted copy of all records (stable, only
    /// when a non-default sort is active), each flagged visible by the
    /// filter+search predicate, plus count and label.
    #[must_use]
    pub fn recompute(&self) -> CatalogView {
        let mut ordered = self.records.clone();
        match self.sort {
            SortKey::Default => {}
            SortKey::Name => ordered.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Category => ordered.sort_by(|a, b| {
                match a.category.cmp(&b.category) {
                    Ordering::Equal => a.title.cmp(&b.title),
                    other => other,
                }
            }),
        }

        let entries: Vec<CatalogEntry> = ordered
            .into_iter()
            .map(|record| {
                let visible = self.is_visible(&record);
                CatalogEntry { record, visible }
            })
            .collect();
        let visible_count = entries.iter().filter(|entry| entry.visible).count();
        let results_label = self.results_label(visible_count);

        CatalogView {
            entries,
            visible_count,
            results_label,
        }
    }

    /// The visible records in display order, e.g. as the snapshot handed to
    /// the viewer on open.
    #[must_use]
    pub fn visible_records(&self) -> Vec<ImageRecord> {
        self.recompute().visible_records()
    }

    fn is_visible(&self, record: &ImageRecord) -> bool {
        let matches_filter = match &self.filter {
            Filter::All => true,
            Filter::Favorites => self.favorites.contains(&record.id),
            Filter::Category(name) => record.category == *name,
        };
        matches_filter && record.matches_search(&self.search_term)
    }

    fn results_label(&self, visible: usize) -> String {
        let plural = if visible == 1 { "" } else { "s" };
        let suffix = match self.filter {
            Filter::All => String::new(),
            _ => format!(" · {}", self.filter.label()),
        };
        format!("{visible} result{plural}{suffix}")
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
