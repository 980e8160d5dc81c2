//! Main render/view function (View in TEA pattern)


use coursebook_app::{AppState, Mode};
use ratatui::layout::{Constraint, Layout};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::theme::{styles, Theme};
use crate::widgets;

/// Render the complete UI (View function in TEA)
///
/// This is a pure projection of `state`, except for the catalog's scroll
/// bookkeeping (`offset`, `visible_cards`) which depends on the frame size.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();
    let theme = Theme::from_scheme(state.color_scheme);
    let mode = state.mode();

    frame.render_widget(Block::default().style(styles::background(&theme)), area);

    let show_hints = state.settings.ui.show_key_hints && area.height > 1;
    let [main, hints] = if show_hints {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(area)
    } else {
        Layout::vertical([Constraint::Fill(1), Constraint::Length(0)]).areas(area)
    };

    match mode {
        Mode::Onboarding => {
            frame.render_widget(widgets::OnboardingView::new(&theme), main);
        }
        Mode::Catalog => {
            let catalog =
                widgets::CatalogView::new(&state.catalog, &state.cards, &theme, &state.strings);
            frame.render_stateful_widget(catalog, main, &mut state.catalog_view);
        }
    }

    if show_hints {
        frame.render_widget(widgets::KeyHints::new(mode, &theme), hints);
    }
}
