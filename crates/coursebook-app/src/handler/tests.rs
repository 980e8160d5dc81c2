//! Tests for the update function and key mapping

use std::sync::Arc;

use coursebook_core::{sample_catalog, Catalog, Course};

use super::*;
use crate::color_scheme::ColorScheme;
use crate::input_key::InputKey;
use crate::state::{AppState, Mode};

fn two_course_catalog() -> Catalog {
    Catalog::new(vec![
        Course::new(
            "Introduction to Kotlin",
            "KOT101",
            3,
            "Covers Kotlin programming basics and syntax.",
            "None",
            "JetBrains Academy",
        ),
        Course::new(
            "Android Fundamentals",
            "AND201",
            4,
            "Essential Android app development concepts.",
            "Introduction to Kotlin",
            "Google Android Team",
        ),
    ])
}

/// Run a message and any follow-ups it produces
fn dispatch(state: &mut AppState, message: Message) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        msg = update(state, m).message;
    }
}

fn catalog_state() -> AppState {
    let mut state = AppState::new(Arc::new(sample_catalog()));
    dispatch(&mut state, Message::Continue);
    state
}

// ─────────────────────────────────────────────────────────
// Mode switch
// ─────────────────────────────────────────────────────────

#[test]
fn test_initial_mode_is_onboarding() {
    let state = AppState::new(Arc::new(sample_catalog()));
    assert_eq!(state.mode(), Mode::Onboarding);
}

#[test]
fn test_continue_switches_to_catalog() {
    let mut state = AppState::new(Arc::new(sample_catalog()));
    dispatch(&mut state, Message::Continue);
    assert!(!state.show_onboarding());
    assert_eq!(state.mode(), Mode::Catalog);
}

#[test]
fn test_continue_twice_stays_in_catalog() {
    let mut state = AppState::new(Arc::new(sample_catalog()));
    dispatch(&mut state, Message::Continue);
    dispatch(&mut state, Message::Continue);
    assert!(!state.show_onboarding());
    assert_eq!(state.mode(), Mode::Catalog);
}

#[test]
fn test_no_message_brings_onboarding_back() {
    let mut state = catalog_state();
    for msg in [
        Message::ToggleSelected,
        Message::SelectLast,
        Message::ToggleColorScheme,
        Message::Resize {
            width: 40,
            height: 10,
        },
        Message::Key(InputKey::Enter),
    ] {
        dispatch(&mut state, msg);
        assert_eq!(state.mode(), Mode::Catalog);
    }
}

// ─────────────────────────────────────────────────────────
// Cards
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_card_leaves_other_cards_alone() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::ToggleCard(0));

    assert!(state.is_expanded(0));
    for other in 1..state.catalog.len() {
        assert!(!state.is_expanded(other), "card {} changed", other);
    }
}

#[test]
fn test_every_card_toggles_back_after_two_toggles() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::ToggleCard(7));

    for index in 0..state.catalog.len() {
        let before = state.is_expanded(index);
        dispatch(&mut state, Message::ToggleCard(index));
        dispatch(&mut state, Message::ToggleCard(index));
        assert_eq!(state.is_expanded(index), before, "card {}", index);
    }
}

#[test]
fn test_toggle_ignored_during_onboarding() {
    let mut state = AppState::new(Arc::new(sample_catalog()));
    dispatch(&mut state, Message::ToggleCard(0));
    dispatch(&mut state, Message::ToggleSelected);
    assert_eq!(state.expanded_count(), 0);
}

#[test]
fn test_toggle_selected_targets_focused_card() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::SelectNext);
    dispatch(&mut state, Message::SelectNext);
    dispatch(&mut state, Message::ToggleSelected);

    assert!(state.is_expanded(2));
    assert_eq!(state.expanded_count(), 1);
}

#[test]
fn test_toggle_selected_on_empty_catalog_is_noop() {
    let mut state = AppState::new(Arc::new(Catalog::default()));
    dispatch(&mut state, Message::Continue);
    dispatch(&mut state, Message::ToggleSelected);
    assert_eq!(state.expanded_count(), 0);
}

#[test]
fn test_navigation_never_changes_expansion() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::ToggleCard(3));
    let before = state.save().expanded;

    for msg in [
        Message::SelectLast,
        Message::PageUp,
        Message::SelectPrevious,
        Message::SelectFirst,
        Message::PageDown,
        Message::SelectNext,
    ] {
        dispatch(&mut state, msg);
    }

    assert_eq!(state.save().expanded, before);
}

#[test]
fn test_navigation_ignored_during_onboarding() {
    let mut state = AppState::new(Arc::new(sample_catalog()));
    dispatch(&mut state, Message::SelectLast);
    assert_eq!(state.catalog_view.selected, 0);
}

#[test]
fn test_two_course_scenario() {
    let mut state = AppState::new(Arc::new(two_course_catalog()));
    assert_eq!(state.mode(), Mode::Onboarding);

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert_eq!(state.mode(), Mode::Catalog);
    assert!(!state.is_expanded(0));
    assert!(!state.is_expanded(1));

    dispatch(&mut state, Message::Key(InputKey::Enter));
    assert!(state.is_expanded(0));
    assert!(!state.is_expanded(1));
}

// ─────────────────────────────────────────────────────────
// Appearance and environment
// ─────────────────────────────────────────────────────────

#[test]
fn test_toggle_color_scheme_keeps_view_state() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::ToggleCard(1));
    let saved = state.save();

    dispatch(&mut state, Message::ToggleColorScheme);

    assert_eq!(state.color_scheme, ColorScheme::Dark);
    assert_eq!(state.save(), saved);
}

#[test]
fn test_set_same_color_scheme_is_noop() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::SetColorScheme(ColorScheme::Light));
    assert_eq!(state.color_scheme, ColorScheme::Light);
}

#[test]
fn test_resize_records_size_and_keeps_view_state() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::ToggleCard(5));
    let saved = state.save();

    dispatch(
        &mut state,
        Message::Resize {
            width: 120,
            height: 40,
        },
    );

    assert_eq!(state.terminal_size, Some((120, 40)));
    assert_eq!(state.save(), saved);
}

#[test]
fn test_reload_settings_is_left_to_the_engine() {
    let mut state = catalog_state();
    let result = update(&mut state, Message::ReloadSettings);
    assert_eq!(result.action, Some(UpdateAction::ReloadSettings));
    assert!(result.message.is_none());
}

#[test]
fn test_quit() {
    let mut state = catalog_state();
    dispatch(&mut state, Message::Quit);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Key mapping
// ─────────────────────────────────────────────────────────

#[test]
fn test_onboarding_keys() {
    let state = AppState::new(Arc::new(sample_catalog()));
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::Continue)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char(' ')),
        Some(Message::Continue)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('c')),
        Some(Message::Continue)
    );
    assert_eq!(handle_key(&state, InputKey::Char('q')), Some(Message::Quit));
    assert_eq!(handle_key(&state, InputKey::Down), None);
}

#[test]
fn test_catalog_keys() {
    let state = catalog_state();
    assert_eq!(
        handle_key(&state, InputKey::Down),
        Some(Message::SelectNext)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('k')),
        Some(Message::SelectPrevious)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('G')),
        Some(Message::SelectLast)
    );
    assert_eq!(
        handle_key(&state, InputKey::Enter),
        Some(Message::ToggleSelected)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('t')),
        Some(Message::ToggleColorScheme)
    );
    assert_eq!(
        handle_key(&state, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    );
    assert_eq!(
        handle_key(&state, InputKey::Char('r')),
        Some(Message::ReloadSettings)
    );
    // 'c' only continues on the onboarding screen
    assert_eq!(handle_key(&state, InputKey::Char('c')), None);
}
