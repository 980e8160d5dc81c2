//! Message types for the application (TEA pattern)

use crate::color_scheme::ColorScheme;
use crate::input_key::InputKey;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Terminal was resized; views are rebuilt, view-state is kept
    Resize { width: u16, height: u16 },

    /// Quit immediately (q, Esc, Ctrl+C, signal handler)
    Quit,

    /// Re-read the config file, keeping onboarding and card state
    ReloadSettings,

    // ─────────────────────────────────────────────────────────
    // Onboarding
    // ─────────────────────────────────────────────────────────
    /// Continue action on the onboarding screen
    Continue,

    // ─────────────────────────────────────────────────────────
    // Course Cards
    // ─────────────────────────────────────────────────────────
    /// Expand or collapse the card at a catalog index
    ToggleCard(usize),
    /// Expand or collapse the focused card
    ToggleSelected,

    // ─────────────────────────────────────────────────────────
    // Catalog Navigation
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,

    // ─────────────────────────────────────────────────────────
    // Appearance
    // ─────────────────────────────────────────────────────────
    /// Switch to a specific color scheme
    SetColorScheme(ColorScheme),
    /// Flip between light and dark
    ToggleColorScheme,
}
