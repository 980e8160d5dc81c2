//! Raw color constants for the brown course-catalog palette.

use ratatui::style::Color;

// --- Brand browns ---
/// `#91735E`, used at 0x70 alpha for light-scheme cards
pub const LIGHT_BROWN: Color = Color::Rgb(0x91, 0x73, 0x5E);
pub const DARK_BROWN: Color = Color::Rgb(0x59, 0x3E, 0x33);
pub const LIGHT_TEXT_ON_BROWN: Color = Color::Rgb(0xC9, 0xA2, 0x84);
pub const LIGHT_TEXT_LIGHTER: Color = Color::Rgb(0xE5, 0xD2, 0xBD);
pub const LIGHTER_BROWN_FOR_DARK: Color = Color::Rgb(0x49, 0x3A, 0x31);

/// [`LIGHT_BROWN`] at 0x70 alpha composited over [`LIGHT_SURFACE`].
/// Terminals have no alpha channel.
pub const LIGHT_BROWN_TRANSLUCENT: Color = Color::Rgb(0xCF, 0xC2, 0xB8);

// --- Surfaces ---
pub const LIGHT_SURFACE: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const DARK_SURFACE: Color = Color::Rgb(0x1C, 0x1B, 0x1F);

// --- Text on buttons ---
pub const ON_DARK_BUTTON: Color = Color::Rgb(0xFF, 0xFF, 0xFF);
pub const ON_LIGHT_BUTTON: Color = Color::Rgb(0x1C, 0x1B, 0x1F);
