//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState, Mode};

use super::{keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Resize { width, height } => {
            debug!("Terminal resized to {}x{}", width, height);
            state.terminal_size = Some((width, height));
            UpdateResult::none()
        }

        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::ReloadSettings => UpdateResult::action(UpdateAction::ReloadSettings),

        // ─────────────────────────────────────────────────────────
        // Onboarding
        // ─────────────────────────────────────────────────────────
        Message::Continue => {
            if state.dismiss_onboarding() {
                info!(
                    "Onboarding dismissed, showing {} courses",
                    state.catalog.len()
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Course Cards
        // ─────────────────────────────────────────────────────────
        Message::ToggleCard(index) => {
            if state.mode() != Mode::Catalog {
                debug!("Ignoring toggle of card {} outside catalog mode", index);
                return UpdateResult::none();
            }
            match state.toggle_card(index) {
                Some(expanded) => debug!("Card {} expanded={}", index, expanded),
                None => debug!("No card at index {}", index),
            }
            UpdateResult::none()
        }

        Message::ToggleSelected => {
            if state.mode() != Mode::Catalog || state.catalog.is_empty() {
                return UpdateResult::none();
            }
            UpdateResult::message(Message::ToggleCard(state.catalog_view.selected))
        }

        // ─────────────────────────────────────────────────────────
        // Catalog Navigation
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => navigation::handle_select_next(state),
        Message::SelectPrevious => navigation::handle_select_previous(state),
        Message::SelectFirst => navigation::handle_select_first(state),
        Message::SelectLast => navigation::handle_select_last(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),

        // ─────────────────────────────────────────────────────────
        // Appearance
        // ─────────────────────────────────────────────────────────
        Message::SetColorScheme(scheme) => {
            if state.color_scheme != scheme {
                info!("Color scheme changed: {} -> {}", state.color_scheme, scheme);
                state.color_scheme = scheme;
            }
            UpdateResult::none()
        }

        Message::ToggleColorScheme => {
            UpdateResult::message(Message::SetColorScheme(state.color_scheme.toggled()))
        }
    }
}
