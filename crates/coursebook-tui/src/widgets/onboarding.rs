//! Onboarding view: welcome message and a single Continue button.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::{styles, Theme};

pub const WELCOME: &str = "Welcome to the Basics Codelab!";
pub const CONTINUE: &str = "Continue";

pub struct OnboardingView<'a> {
    theme: &'a Theme,
}

impl<'a> OnboardingView<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for OnboardingView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        // Message, gap, button; centered vertically
        let [message_area, _, button_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center)
        .areas(area);

        Paragraph::new(Line::styled(WELCOME, styles::text(self.theme)))
            .alignment(Alignment::Center)
            .render(message_area, buf);

        let label = button_label(CONTINUE);
        let width = column_width(&label).min(button_area.width);
        let [button] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(button_area);
        Line::styled(label, styles::button(self.theme)).render(button, buf);
    }
}

fn button_label(text: &str) -> String {
    format!("  {}  ", text)
}

/// Terminal columns taken by `text`
fn column_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}
