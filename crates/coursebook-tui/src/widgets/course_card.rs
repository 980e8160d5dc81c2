//! Course card widget
//!
//! One bordered card per course. Collapsed cards show the title, code,
//! attribution and credit hours; expanded cards add the description and
//! prerequisites. The last line is the toggle affordance, whose label comes
//! from the [`Resources`] collaborator.

use coursebook_app::resources::{self, Resources, StringKey};
use coursebook_core::Course;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, Theme};

/// Columns taken by the border and horizontal padding
const CHROME_WIDTH: u16 = 4;
/// Rows taken by the top and bottom border
const CHROME_HEIGHT: u16 = 2;

/// Role of one logical card line, used to pick its style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Title,
    Code,
    Secondary,
    Detail,
    Affordance,
}

pub struct CourseCard<'a> {
    course: &'a Course,
    theme: &'a Theme,
    resources: &'a dyn Resources,
    expanded: bool,
    focused: bool,
}

impl<'a> CourseCard<'a> {
    pub fn new(course: &'a Course, theme: &'a Theme, resources: &'a dyn Resources) -> Self {
        Self {
            course,
            theme,
            resources,
            expanded: false,
            focused: false,
        }
    }

    pub fn expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn content(&self) -> Vec<(String, LineKind)> {
        let course = self.course;
        let mut lines = vec![
            (course.title.clone(), LineKind::Title),
            (course.code.clone(), LineKind::Code),
            (course.credit.clone(), LineKind::Secondary),
            (
                format!("Credit Hours: {}", course.credit_hours),
                LineKind::Detail,
            ),
        ];

        if self.expanded {
            lines.push((
                format!("Description: {}", course.description),
                LineKind::Detail,
            ));
            lines.push((
                format!("Prerequisites: {}", course.prerequisites),
                LineKind::Detail,
            ));
        }

        let label = resources::label(self.resources, StringKey::toggle_for(self.expanded));
        let marker = if self.expanded { '▾' } else { '▸' };
        lines.push((format!("{} {}", marker, label), LineKind::Affordance));
        lines
    }

    /// Card text, unwrapped and unstyled
    pub fn plain_lines(&self) -> Vec<String> {
        self.content().into_iter().map(|(text, _)| text).collect()
    }

    fn style_for(&self, kind: LineKind) -> Style {
        match kind {
            LineKind::Title => styles::headline(self.theme),
            LineKind::Code => styles::text_lighter(self.theme),
            LineKind::Secondary => styles::text_lighter(self.theme),
            LineKind::Detail => styles::text(self.theme),
            LineKind::Affordance => styles::affordance(self.theme),
        }
    }

    fn wrapped_lines(&self, width: u16) -> Vec<Line<'static>> {
        let inner = width.saturating_sub(CHROME_WIDTH) as usize;
        self.content()
            .into_iter()
            .flat_map(|(text, kind)| {
                let style = self.style_for(kind);
                wrap(&text, inner)
                    .into_iter()
                    .map(move |line| Line::styled(line, style))
            })
            .collect()
    }

    /// Rows this card needs when drawn `width` columns wide
    pub fn height(&self, width: u16) -> u16 {
        let lines = u16::try_from(self.wrapped_lines(width).len()).unwrap_or(u16::MAX);
        lines.saturating_add(CHROME_HEIGHT)
    }
}

impl Widget for CourseCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.theme, self.focused);
        let inner = block.inner(area);
        let lines = self.wrapped_lines(area.width);

        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }
        Paragraph::new(lines).render(inner, buf);
    }
}

/// Word-wrap `text` to `width` columns. Words wider than a line are split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width > width {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if !current.is_empty() && current_width + ch_width > width {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
            continue;
        }

        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current.push_str(word);
        current_width += word_width;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}
