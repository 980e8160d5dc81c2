//! Semantic style builders over a [`Theme`].

use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::Theme;

// --- Surfaces ---
pub fn background(theme: &Theme) -> Style {
    Style::default().bg(theme.background).fg(theme.text)
}

// --- Text styles ---
pub fn text(theme: &Theme) -> Style {
    Style::default().fg(theme.text)
}

pub fn text_lighter(theme: &Theme) -> Style {
    Style::default().fg(theme.text_lighter)
}

pub fn headline(theme: &Theme) -> Style {
    text(theme).add_modifier(Modifier::BOLD)
}

// --- Controls ---
pub fn button(theme: &Theme) -> Style {
    Style::default()
        .fg(theme.on_button)
        .bg(theme.button)
        .add_modifier(Modifier::BOLD)
}

/// Expand/collapse affordance on a card
pub fn affordance(theme: &Theme) -> Style {
    text(theme).add_modifier(Modifier::UNDERLINED)
}

pub fn keybinding(theme: &Theme) -> Style {
    text(theme).add_modifier(Modifier::BOLD)
}

// --- Blocks ---
/// Rounded card block; the focused card gets a bold border
pub fn card_block(theme: &Theme, focused: bool) -> Block<'static> {
    let border = if focused {
        text(theme).add_modifier(Modifier::BOLD)
    } else {
        text_lighter(theme).add_modifier(Modifier::DIM)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border)
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(theme.card))
}
