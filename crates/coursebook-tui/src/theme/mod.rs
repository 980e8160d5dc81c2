//! Theme context passed to every widget.
//!
//! - `palette` - Raw color constants
//! - `styles` - Semantic style builder functions
//!
//! Widgets never look colors up on their own. The render root builds one
//! [`Theme`] from the active [`ColorScheme`] and hands a reference down.

pub mod palette;
pub mod styles;

use coursebook_app::ColorScheme;
use ratatui::style::Color;

/// Colors for one light/dark scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Primary text
    pub text: Color,
    /// Secondary text (codes, attribution)
    pub text_lighter: Color,
    /// Card surface
    pub card: Color,
    /// Primary button surface
    pub button: Color,
    /// Text drawn on the button
    pub on_button: Color,
}

impl Theme {
    pub fn from_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self {
                background: palette::LIGHT_SURFACE,
                text: palette::DARK_BROWN,
                text_lighter: palette::DARK_BROWN,
                card: palette::LIGHT_BROWN_TRANSLUCENT,
                button: palette::DARK_BROWN,
                on_button: palette::ON_DARK_BUTTON,
            },
            ColorScheme::Dark => Self {
                background: palette::DARK_SURFACE,
                text: palette::LIGHT_TEXT_ON_BROWN,
                text_lighter: palette::LIGHT_TEXT_LIGHTER,
                card: palette::LIGHTER_BROWN_FOR_DARK,
                button: palette::LIGHT_TEXT_ON_BROWN,
                on_button: palette::ON_LIGHT_BUTTON,
            },
        }
    }
}
