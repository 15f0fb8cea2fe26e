// SPDX-License-Identifier: MPL-2.0
//! Preference store adapters.
//!
//! [`MemoryPreferenceStore`] holds preferences for the process lifetime
//! and accepts any key; it doubles as the test store. The
//! [`FilePreferenceStore`] persists the recognized keys through the
//! `preferences.toml` file managed by [`crate::config`], validating values
//! on write so a bad value never reaches disk.

use crate::application::port::preferences::{
    PreferenceStore, StoreError, KEY_CARD_MIN, KEY_FAVORITES, KEY_THEME,
};
use crate::config::{self, Preferences};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Volatile, schema-free store.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by the preference file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
    prefs: Preferences,
}

impl FilePreferenceStore {
    /// Opens the store over the given file. A missing or unreadable file
    /// starts from defaults; it is created on the first write.
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = config::load_from_path(&path).unwrap_or_default();
        Self { path, prefs }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        config::save_to_path(&self.prefs, &self.path)
            .map_err(|e| StoreError::WriteFailed(e.to_string()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            KEY_FAVORITES => self
                .prefs
                .favorites
                .as_ref()
                .and_then(|ids| serde_json::to_string(ids).ok()),
            KEY_THEME => self.prefs.theme.clone(),
            KEY_CARD_MIN => self.prefs.card_min.map(|px| px.to_string()),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        match key {
            KEY_FAVORITES => {
                let ids: Vec<String> =
                    serde_json::from_str(value).map_err(|e| StoreError::InvalidValue {
                        key: key.to_string(),
                        reason: e.to_string(),
                    })?;
                self.prefs.favorites = Some(ids);
            }
            KEY_THEME => {
                self.prefs.theme = Some(value.to_string());
            }
            KEY_CARD_MIN => {
                let px: u16 = value.parse().map_err(|_| StoreError::InvalidValue {
                    key: key.to_string(),
                    reason: format!("not an integer: {value}"),
                })?;
                self.prefs.card_min = Some(px);
            }
            _ => return Err(StoreError::UnknownKey(key.to_string())),
        }
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn memory_store_round_trips_any_key() {
        let mut store = MemoryPreferenceStore::default();
        assert!(store.get("gallery:theme").is_none());
        store.set("gallery:theme", "dark").expect("memory set");
        store.set("custom:flag", "on").expect("memory set");
        assert_eq!(store.get("gallery:theme").as_deref(), Some("dark"));
        assert_eq!(store.get("custom:flag").as_deref(), Some("on"));
    }

    #[test]
    fn file_store_persists_across_reopen() {
        let dir = tempdir().expect("failed to create temp dir");
        let path = dir.path().join("preferences.toml");

        let mut store = FilePreferenceStore::open(&path);
        store.set(KEY_THEME, "dark").expect("write theme");
        store.set(KEY_CARD_MIN, "260").expect("write card size");
        store
            .set(KEY_FAVORITES, r#"["img-1","img-4"]"#)
            .expect("write favorites");

        let reopened = FilePreferenceStore::open(&path);
        assert_eq!(reopened.get(KEY_THEME).as_deref(), Some("dark"));
        assert_eq!(reopened.get(KEY_CARD_MIN).as_deref(), Some("260"));
        assert_eq!(
            reopened.get(KEY_FAVORITES).as_deref(),
            Some(r#"["img-1","img-4"]"#)
        );
    }

    #[test]
    fn file_store_rejects_malformed_values() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut store = FilePreferenceStore::open(dir.path().join("preferences.toml"));

        let err = store.set(KEY_FAVORITES, "not json").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
        let err = store.set(KEY_CARD_MIN, "wide").unwrap_err();
        assert!(matches!(err, StoreError::InvalidValue { .. }));
    }

    #[test]
    fn file_store_rejects_unknown_keys() {
        let dir = tempdir().expect("failed to create temp dir");
        let mut store = FilePreferenceStore::open(dir.path().join("preferences.toml"));
        let err = store.set("gallery:unknown", "x").unwrap_err();
        assert!(matches!(err, StoreError::UnknownKey(_)));
    }

    #[test]
    fn missing_file_starts_from_defaults() {
        let dir = tempdir().expect("failed to create temp dir");
        let store = FilePreferenceStore::open(dir.path().join("absent.toml"));
        assert!(store.get(KEY_THEME).is_none());
        assert!(store.get(KEY_FAVORITES).is_none());
    }
}
