//! Events emitted by the Engine after each message processing cycle
//!
//! Views do not read state on their own schedule; they subscribe through
//! `Engine::subscribe()` and redraw when one of these arrives.

use crate::color_scheme::ColorScheme;

/// State changes observable by frontends.
///
/// Events are broadcast after each message processing cycle, so subscribers
/// see a consistent view of state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    // ─────────────────────────────────────────────────────────
    // View-state
    // ─────────────────────────────────────────────────────────
    /// The user continued past onboarding
    OnboardingDismissed,

    /// One card changed its expanded flag
    CardToggled { index: usize, expanded: bool },

    /// Keyboard focus moved to another card
    SelectionChanged { index: usize },

    // ─────────────────────────────────────────────────────────
    // Environment
    // ─────────────────────────────────────────────────────────
    /// Light/dark appearance changed
    ColorSchemeChanged { scheme: ColorScheme },

    /// Terminal size changed
    Resized { width: u16, height: u16 },

    /// State was rebuilt from a saved snapshot (settings reload)
    Restored,

    // ─────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────
    /// Engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Returns a short string label for this event type (for logging/debugging).
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::OnboardingDismissed => "onboarding_dismissed",
            Self::CardToggled { .. } => "card_toggled",
            Self::SelectionChanged { .. } => "selection_changed",
            Self::ColorSchemeChanged { .. } => "color_scheme_changed",
            Self::Resized { .. } => "resized",
            Self::Restored => "restored",
            Self::Shutdown => "shutdown",
        }
    }
}
