//! Configuration file parsing for Coursebook
//!
//! Supports `config.toml` in the user config directory
//! (`~/.config/coursebook/config.toml` on Linux) or an explicit path.

pub mod settings;
pub mod types;

pub use settings::{
    default_config_path, init_config_file, load_settings, resolve_color_scheme, DEFAULT_CONFIG,
};
pub use types::*;
