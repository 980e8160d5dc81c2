//! Message processing through the TEA update loop

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::state::AppState;

/// Run a message and every follow-up it produces.
///
/// Returns the actions the handlers asked for, in order; performing them is
/// up to the caller.
pub fn process_message(state: &mut AppState, message: Message) -> Vec<UpdateAction> {
    let mut actions = Vec::new();
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);
        actions.extend(result.action);
        msg = result.message;
    }
    actions
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use coursebook_core::sample_catalog;

    use super::*;
    use crate::color_scheme::ColorScheme;
    use crate::input_key::InputKey;

    #[test]
    fn test_follow_up_chain_runs_to_completion() {
        let mut state = AppState::new(Arc::new(sample_catalog()));
        // Key -> ToggleColorScheme -> SetColorScheme
        let actions = process_message(&mut state, Message::Key(InputKey::Char('t')));
        assert!(actions.is_empty());
        assert_eq!(state.color_scheme, ColorScheme::Dark);
    }

    #[test]
    fn test_key_chain_ending_in_action() {
        let mut state = AppState::new(Arc::new(sample_catalog()));
        let actions = process_message(&mut state, Message::Key(InputKey::Char('r')));
        assert_eq!(actions, vec![UpdateAction::ReloadSettings]);
    }
}
