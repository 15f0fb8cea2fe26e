// SPDX-License-Identifier: MPL-2.0
//! Shared test doubles and fixtures.
//!
//! Kept as a regular module so integration tests and benches can use the
//! same doubles as the unit tests.

use crate::application::port::platform::{PlatformCapabilities, PlatformError, SharePayload};
use crate::application::port::presentation::PresentationSurface;
use crate::catalog::CatalogView;
use crate::domain::ImageRecord;
use crate::viewer::focus::FocusId;

/// Five records across three categories, mirroring a small gallery page.
#[must_use]
pub fn sample_records() -> Vec<ImageRecord> {
    let record = |id: &str, title: &str, category: &str, tags: &[&str]| {
        let slug = title.to_lowercase();
        ImageRecord::new(
            id,
            format!("https://cdn.example/thumb/{slug}.jpg"),
            format!("https://cdn.example/full/{slug}.jpg"),
            title,
            format!("{title} photo"),
            category,
            tags.iter().copied(),
        )
    };
    vec![
        record("1", "Dunes", "a", &["sand", "desert"]),
        record("2", "Canyon", "a", &["rock"]),
        record("3", "Reef", "b", &["ocean", "coral"]),
        record("4", "Atoll", "b", &["ocean"]),
        record("5", "Glacier", "c", &["ice"]),
    ]
}

/// [`PresentationSurface`] double that records every write.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub catalog_views: Vec<CatalogView>,
    pub shown_images: Vec<(ImageRecord, usize, usize)>,
    pub transforms: Vec<String>,
    pub lightbox_open: Option<bool>,
    pub details: Option<(String, String)>,
    pub toasts: Vec<String>,
    focused: Option<FocusId>,
    focusables: Vec<FocusId>,
}

impl RecordingSurface {
    /// Simulates the host moving focus, e.g. before an activation.
    pub fn set_focused(&mut self, target: Option<FocusId>) {
        self.focused = target;
    }

    #[must_use]
    pub fn focused(&self) -> Option<FocusId> {
        self.focused.clone()
    }

    /// Configures what [`PresentationSurface::focusable_elements`] reports.
    pub fn set_focusables(&mut self, focusables: Vec<FocusId>) {
        self.focusables = focusables;
    }
}

impl PresentationSurface for RecordingSurface {
    fn apply_catalog(&mut self, view: &CatalogView) {
        self.catalog_views.push(view.clone());
    }

    fn show_image(&mut self, record: &ImageRecord, position: usize, total: usize) {
        self.shown_images.push((record.clone(), position, total));
    }

    fn apply_transform(&mut self, css: &str) {
        self.transforms.push(css.to_string());
    }

    fn set_lightbox_open(&mut self, open: bool) {
        self.lightbox_open = Some(open);
    }

    fn show_details(&mut self, resolution: &str, size: &str) {
        self.details = Some((resolution.to_string(), size.to_string()));
    }

    fn show_toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }

    fn focused_element(&self) -> Option<FocusId> {
        self.focused.clone()
    }

    fn focus(&mut self, target: &FocusId) {
        self.focused = Some(target.clone());
    }

    fn focusable_elements(&self) -> Vec<FocusId> {
        self.focusables.clone()
    }
}

/// [`PlatformCapabilities`] double with configurable capabilities.
#[derive(Debug, Clone, Default)]
pub struct StubPlatform {
    pub has_share: bool,
    pub has_clipboard: bool,
    /// When set, share and clipboard writes fail instead of recording.
    pub fail_writes: bool,
    pub shared: Vec<SharePayload>,
    pub clipboard: Vec<String>,
    pub prompts: Vec<(String, String)>,
    pub saved_files: Vec<(String, Vec<u8>)>,
    pub opened_external: Vec<String>,
    pub fullscreen_toggles: usize,
}

impl PlatformCapabilities for StubPlatform {
    fn supports_share(&self) -> bool {
        self.has_share
    }

    fn share(&mut self, payload: &SharePayload) -> Result<(), PlatformError> {
        if self.fail_writes {
            return Err(PlatformError::Cancelled);
        }
        self.shared.push(payload.clone());
        Ok(())
    }

    fn supports_clipboard(&self) -> bool {
        self.has_clipboard
    }

    fn clipboard_write(&mut self, text: &str) -> Result<(), PlatformError> {
        if self.fail_writes {
            return Err(PlatformError::Failed("clipboard blocked".to_string()));
        }
        self.clipboard.push(text.to_string());
        Ok(())
    }

    fn prompt(&mut self, message: &str, value: &str) {
        self.prompts.push((message.to_string(), value.to_string()));
    }

    fn toggle_fullscreen(&mut self) {
        self.fullscreen_toggles += 1;
    }

    fn save_file(&mut self, file_name: &str, bytes: &[u8]) -> Result<(), PlatformError> {
        self.saved_files.push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }

    fn open_external(&mut self, url: &str) {
        self.opened_external.push(url.to_string());
    }
}
