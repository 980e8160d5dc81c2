//! Bottom line listing the keys available in the current mode

use coursebook_app::Mode;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{styles, Theme};

const ONBOARDING_HINTS: &[(&str, &str)] = &[
    ("Enter", "continue"),
    ("t", "theme"),
    ("r", "reload"),
    ("q", "quit"),
];

const CATALOG_HINTS: &[(&str, &str)] = &[
    ("↑↓", "select"),
    ("Enter", "show more/less"),
    ("t", "theme"),
    ("r", "reload"),
    ("q", "quit"),
];

pub struct KeyHints<'a> {
    mode: Mode,
    theme: &'a Theme,
}

impl<'a> KeyHints<'a> {
    pub fn new(mode: Mode, theme: &'a Theme) -> Self {
        Self { mode, theme }
    }
}

impl Widget for KeyHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = match self.mode {
            Mode::Onboarding => ONBOARDING_HINTS,
            Mode::Catalog => CATALOG_HINTS,
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (i, (key, action)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", styles::text_lighter(self.theme)));
            }
            spans.push(Span::styled(*key, styles::keybinding(self.theme)));
            spans.push(Span::styled(
                format!(" {}", action),
                styles::text_lighter(self.theme),
            ));
        }
        Line::from(spans).render(area, buf);
    }
}
