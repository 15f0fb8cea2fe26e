// SPDX-License-Identifier: MPL-2.0
//! Gallery facade: catalog + viewer + persisted preferences behind one
//! entry point.
//!
//! The facade restores preferences on construction, routes host input to
//! the right component, and pushes every derived change to the
//! presentation surface. Persistence is best-effort throughout: a failed
//! write is logged and the in-memory state stays authoritative for the
//! session.

use crate::application::port::platform::PlatformCapabilities;
use crate::application::port::preferences::{
    PreferenceStore, KEY_CARD_MIN, KEY_FAVORITES, KEY_THEME,
};
use crate::application::port::presentation::PresentationSurface;
use crate::catalog::{Catalog, CatalogView, Filter, SortKey};
use crate::config::defaults::{DEFAULT_CARD_MIN_PX, MAX_CARD_MIN_PX, MIN_CARD_MIN_PX};
use crate::domain::{ImageRecord, RecordId};
use crate::theme::ThemeMode;
use crate::viewer::{KeyAction, Viewer};

/// Top-level gallery engine state.
pub struct Gallery {
    catalog: Catalog,
    viewer: Viewer,
    store: Box<dyn PreferenceStore>,
    theme: ThemeMode,
    card_min: u16,
}

impl Gallery {
    /// Builds the gallery over a fixed record list, restoring favorites,
    /// theme, and card size from the preference store. Unreadable or
    /// malformed values silently fall back to their defaults.
    #[must_use]
    pub fn new(records: Vec<ImageRecord>, store: Box<dyn PreferenceStore>) -> Self {
        let mut catalog = Catalog::new(records);

        if let Some(raw) = store.get(KEY_FAVORITES) {
            if let Ok(ids) = serde_json::from_str::<Vec<String>>(&raw) {
                catalog.set_favorites(ids.into_iter().map(RecordId::from));
            }
        }

        let theme = store
            .get(KEY_THEME)
            .and_then(|raw| ThemeMode::parse(&raw))
            .unwrap_or_else(ThemeMode::from_system);

        let card_min = store
            .get(KEY_CARD_MIN)
            .and_then(|raw| raw.parse::<u16>().ok())
            .map_or(DEFAULT_CARD_MIN_PX, clamp_card_min);

        Self {
            catalog,
            viewer: Viewer::new(),
            store,
            theme,
            card_min,
        }
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn viewer(&self) -> &Viewer {
        &self.viewer
    }

    #[must_use]
    pub fn viewer_mut(&mut self) -> &mut Viewer {
        &mut self.viewer
    }

    #[must_use]
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    #[must_use]
    pub fn card_min(&self) -> u16 {
        self.card_min
    }

    /// Recomputes the catalog view and pushes it to the surface.
    pub fn refresh(&self, surface: &mut dyn PresentationSurface) {
        surface.apply_catalog(&self.catalog.recompute());
    }

    pub fn set_search_term(
        &mut self,
        term: impl Into<String>,
        surface: &mut dyn PresentationSurface,
    ) -> CatalogView {
        let view = self.catalog.set_search_term(term);
        surface.apply_catalog(&view);
        view
    }

    pub fn set_filter(
        &mut self,
        filter: Filter,
        surface: &mut dyn PresentationSurface,
    ) -> CatalogView {
        let view = self.catalog.set_filter(filter);
        surface.apply_catalog(&view);
        view
    }

    pub fn set_sort(
        &mut self,
        sort: SortKey,
        surface: &mut dyn PresentationSurface,
    ) -> CatalogView {
        let view = self.catalog.set_sort(sort);
        surface.apply_catalog(&view);
        view
    }

    /// Flips favorite membership, persists the new set, and re-renders the
    /// grid when the favorites filter is active (membership change affects
    /// visibility there). Returns the new membership.
    pub fn toggle_favorite(
        &mut self,
        id: &RecordId,
        surface: &mut dyn PresentationSurface,
    ) -> bool {
        let favored = self.catalog.toggle_favorite(id);
        let ids: Vec<&str> = self.catalog.favorites().map(RecordId::as_str).collect();
        match serde_json::to_string(&ids) {
            Ok(serialized) => self.persist(KEY_FAVORITES, &serialized),
            Err(error) => eprintln!("Failed to serialize favorites: {error}"),
        }
        if *self.catalog.filter() == Filter::Favorites {
            self.refresh(surface);
        }
        favored
    }

    /// Switches between light and dark, persisting the choice.
    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        self.persist(KEY_THEME, self.theme.as_str());
        self.theme
    }

    /// Updates the minimum card width, clamped to the valid range, and
    /// persists the clamped value. Returns what was applied.
    pub fn set_card_min(&mut self, px: u16) -> u16 {
        self.card_min = clamp_card_min(px);
        self.persist(KEY_CARD_MIN, &self.card_min.to_string());
        self.card_min
    }

    /// Opens the lightbox at `position` into the current visible ordering.
    ///
    /// The ordering is snapshotted here; catalog changes while the lightbox
    /// stays open do not rebind it. Returns whether the lightbox opened.
    pub fn activate(&mut self, position: usize, surface: &mut dyn PresentationSurface) -> bool {
        let snapshot = self.catalog.visible_records();
        let last_focused = surface.focused_element();
        let focusables = surface.focusable_elements();
        if !self.viewer.open(snapshot, position, last_focused, focusables) {
            return false;
        }
        surface.set_lightbox_open(true);
        if let Some(first) = self.viewer.initial_focus() {
            let first = first.clone();
            surface.focus(&first);
        }
        self.sync_viewer(surface);
        true
    }

    /// Closes the lightbox and restores focus to the activating element.
    pub fn close_viewer(&mut self, surface: &mut dyn PresentationSurface) {
        if !self.viewer.is_open() {
            return;
        }
        surface.set_lightbox_open(false);
        if let Some(target) = self.viewer.close() {
            surface.focus(&target);
        }
    }

    /// Steps the lightbox to the adjacent image and re-renders it.
    pub fn navigate(&mut self, direction: i32, surface: &mut dyn PresentationSurface) {
        if self.viewer.navigate(direction) {
            self.sync_viewer(surface);
        }
    }

    /// Dispatches a keyboard event. Returns whether the key was handled;
    /// all bindings are inert while the lightbox is closed.
    pub fn handle_key(
        &mut self,
        key: &str,
        shift: bool,
        surface: &mut dyn PresentationSurface,
        platform: &mut dyn PlatformCapabilities,
    ) -> bool {
        if !self.viewer.is_open() {
            return false;
        }
        let Some(action) = crate::viewer::input::action_for_key(key, shift) else {
            return false;
        };
        match action {
            KeyAction::Close => self.close_viewer(surface),
            KeyAction::Previous => self.navigate(-1, surface),
            KeyAction::Next => self.navigate(1, surface),
            KeyAction::ZoomIn => {
                self.viewer.zoom_in();
                self.apply_transform(surface);
            }
            KeyAction::ZoomOut => {
                self.viewer.zoom_out();
                self.apply_transform(surface);
            }
            KeyAction::Rotate => {
                self.viewer.rotate();
                self.apply_transform(surface);
            }
            KeyAction::Fullscreen => self.viewer.toggle_fullscreen(platform),
            KeyAction::TrapFocus { backward } => {
                return self.viewer.handle_tab(backward, surface);
            }
        }
        true
    }

    /// Pushes the current lightbox image, counter, and transform to the
    /// surface.
    fn sync_viewer(&self, surface: &mut dyn PresentationSurface) {
        let (Some(record), Some(index)) = (self.viewer.current_record(), self.viewer.current_index())
        else {
            return;
        };
        surface.show_image(record, index + 1, self.viewer.visible_count());
        self.apply_transform(surface);
    }

    fn apply_transform(&self, surface: &mut dyn PresentationSurface) {
        if let Some(css) = self.viewer.transform_css() {
            surface.apply_transform(&css);
        }
    }

    fn persist(&mut self, key: &str, value: &str) {
        if let Err(error) = self.store.set(key, value) {
            eprintln!("Failed to persist preference {key}: {error}");
        }
    }
}

fn clamp_card_min(px: u16) -> u16 {
    px.clamp(MIN_CARD_MIN_PX, MAX_CARD_MIN_PX)
}
