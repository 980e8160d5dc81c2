//! Configuration types for Coursebook
//!
//! Defines:
//! - `Settings` - Global application settings
//! - Related sub-types and enums

use serde::{Deserialize, Serialize};

use crate::color_scheme::ColorScheme;

/// Application settings (config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub strings: StringsSettings,
}

/// UI settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UiSettings {
    /// "auto" follows the terminal, "light"/"dark" force a scheme
    #[serde(default)]
    pub theme: ThemePreference,

    /// Show the key hint line at the bottom of the screen
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            theme: ThemePreference::default(),
            show_key_hints: true,
        }
    }
}

/// Theme preference from config
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    #[default]
    Auto,
    Light,
    Dark,
}

impl ThemePreference {
    /// Forced scheme, or `None` for auto
    pub fn forced(self) -> Option<ColorScheme> {
        match self {
            ThemePreference::Auto => None,
            ThemePreference::Light => Some(ColorScheme::Light),
            ThemePreference::Dark => Some(ColorScheme::Dark),
        }
    }
}

/// Labels for the card toggle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StringsSettings {
    #[serde(default = "default_show_more")]
    pub show_more: String,

    #[serde(default = "default_show_less")]
    pub show_less: String,
}

impl Default for StringsSettings {
    fn default() -> Self {
        Self {
            show_more: default_show_more(),
            show_less: default_show_less(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_show_more() -> String {
    "Show more".to_string()
}

fn default_show_less() -> String {
    "Show less".to_string()
}
