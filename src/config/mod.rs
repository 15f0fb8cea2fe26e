// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's preference file, including loading and
//! saving persisted user preferences to a `preferences.toml` file.
//!
//! The preference file backs the [`FilePreferenceStore`] adapter; hosts that
//! bring their own storage (browser local storage, a database, ...) implement
//! [`PreferenceStore`] directly and never touch this module.
//!
//! [`FilePreferenceStore`]: crate::infrastructure::prefs::FilePreferenceStore
//! [`PreferenceStore`]: crate::application::port::preferences::PreferenceStore
//!
//! # Examples
//!
//! ```no_run
//! use lightgrid::config;
//!
//! // Load existing preferences
//! let mut prefs = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! prefs.theme = Some("dark".to_string());
//!
//! // Save the modified preferences
//! config::save(&prefs).expect("Failed to save preferences");
//! ```

pub mod defaults;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const PREFERENCES_FILE: &str = "preferences.toml";
const APP_NAME: &str = "lightgrid";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Theme name, `"dark"` or `"light"`. Absent means follow the system.
    #[serde(default)]
    pub theme: Option<String>,
    /// Minimum gallery card width in pixels.
    #[serde(default)]
    pub card_min: Option<u16>,
    /// Ids of records marked as favorites.
    #[serde(default)]
    pub favorites: Option<Vec<String>>,
}

fn get_default_preferences_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(PREFERENCES_FILE);
        path
    })
}

pub fn load() -> Result<Preferences> {
    if let Some(path) = get_default_preferences_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Preferences::default())
}

pub fn save(prefs: &Preferences) -> Result<()> {
    if let Some(path) = get_default_preferences_path() {
        return save_to_path(prefs, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Preferences> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(prefs: &Preferences, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(prefs)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_preferences() {
        let prefs = Preferences {
            theme: Some("dark".to_string()),
            card_min: Some(260),
            favorites: Some(vec!["img-1".to_string(), "img-4".to_string()]),
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join("nested").join("preferences.toml");

        save_to_path(&prefs, &prefs_path).expect("failed to save preferences");
        let loaded = load_from_path(&prefs_path).expect("failed to load preferences");

        assert_eq!(loaded, prefs);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir.path().join("preferences.toml");
        fs::write(&prefs_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&prefs_path).expect("load should not error");
        assert!(loaded.theme.is_none());
        assert!(loaded.favorites.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let prefs_path = temp_dir
            .path()
            .join("deep")
            .join("path")
            .join("preferences.toml");
        let prefs = Preferences {
            theme: Some("light".to_string()),
            ..Preferences::default()
        };

        save_to_path(&prefs, &prefs_path).expect("save should create directories");
        assert!(prefs_path.exists());
    }

    #[test]
    fn default_preferences_are_empty() {
        let prefs = Preferences::default();
        assert!(prefs.theme.is_none());
        assert!(prefs.card_min.is_none());
        assert!(prefs.favorites.is_none());
    }
}
