//! Key event handlers for each mode

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Mode};

/// Convert key events to messages based on the current mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.mode() {
        Mode::Onboarding => handle_key_onboarding(key),
        Mode::Catalog => handle_key_catalog(key),
    }
}

/// Keys available everywhere
fn handle_key_global(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc | InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('t') => Some(Message::ToggleColorScheme),
        InputKey::Char('r') => Some(Message::ReloadSettings),
        _ => None,
    }
}

fn handle_key_onboarding(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Char(' ') | InputKey::Char('c') => Some(Message::Continue),
        other => handle_key_global(&other),
    }
}

fn handle_key_catalog(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Home | InputKey::Char('g') => Some(Message::SelectFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::SelectLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),
        InputKey::Enter | InputKey::Char(' ') => Some(Message::ToggleSelected),
        other => handle_key_global(&other),
    }
}
