//! Settings loader for config.toml

use std::path::{Path, PathBuf};

use coursebook_core::prelude::*;

use super::types::Settings;
use crate::color_scheme::ColorScheme;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "coursebook";

/// Contents written by [`init_config_file`]
pub const DEFAULT_CONFIG: &str = r#"# Coursebook Configuration

[ui]
theme = "auto"          # "auto" follows COLORFGBG, or force "light" / "dark"
show_key_hints = true

[strings]
show_more = "Show more"
show_less = "Show less"
"#;

/// `~/.config/coursebook/config.toml` (platform equivalent elsewhere)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from a config file.
///
/// A missing file gives defaults. An unreadable or malformed file is logged
/// and also gives defaults; bad config never blocks startup.
pub fn load_settings(config_path: &Path) -> Settings {
    if !config_path.exists() {
        debug!("No config file at {:?}, using defaults", config_path);
        return Settings::default();
    }

    match std::fs::read_to_string(config_path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", config_path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            Settings::default()
        }
    }
}

/// Write the default config file unless one already exists.
///
/// Returns `true` when a new file was written.
pub fn init_config_file(config_path: &Path) -> Result<bool> {
    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| Error::config(format!("Failed to create {:?}: {}", parent, e)))?;
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .map_err(|e| Error::config(format!("Failed to write {:?}: {}", config_path, e)))?;

    info!("Created default config at {:?}", config_path);
    Ok(true)
}

/// Pick the color scheme.
///
/// Priority: command line, then config, then the terminal's own report,
/// then light.
pub fn resolve_color_scheme(settings: &Settings, cli: Option<ColorScheme>) -> ColorScheme {
    cli.or_else(|| settings.ui.theme.forced())
        .or_else(ColorScheme::detect)
        .unwrap_or_default()
}
