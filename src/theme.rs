// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme mode.
//!
//! The persisted preference wins; a fresh profile follows the system
//! appearance.

/// Visual theme applied to the gallery surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Stable identifier used for persistence.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parses a persisted identifier. Unknown values yield `None` so the
    /// caller can fall back to the system appearance.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// Detects the host system's appearance, defaulting to light when
    /// detection is unavailable.
    #[must_use]
    pub fn from_system() -> Self {
        if matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)) {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }
}
