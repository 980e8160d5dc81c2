//! Catalog view: "My Courses" header followed by one card per course.
//!
//! Cards are materialized lazily. Only the cards from `offset` down to the
//! bottom of the viewport are built and drawn; the offset follows the focused
//! card.

use coursebook_app::catalog_view_state::CatalogViewState;
use coursebook_app::expansion::CardExpansion;
use coursebook_app::resources::Resources;
use coursebook_core::Catalog;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{StatefulWidget, Widget},
};

use super::CourseCard;
use crate::theme::{styles, Theme};

pub const HEADER: &str = "My Courses";

/// Header line plus one blank row
const HEADER_HEIGHT: u16 = 2;

pub struct CatalogView<'a> {
    catalog: &'a Catalog,
    cards: &'a CardExpansion,
    theme: &'a Theme,
    resources: &'a dyn Resources,
}

impl<'a> CatalogView<'a> {
    pub fn new(
        catalog: &'a Catalog,
        cards: &'a CardExpansion,
        theme: &'a Theme,
        resources: &'a dyn Resources,
    ) -> Self {
        Self {
            catalog,
            cards,
            theme,
            resources,
        }
    }

    fn card(&self, index: usize, selected: usize) -> Option<CourseCard<'a>> {
        let course = self.catalog.get(index)?;
        Some(
            CourseCard::new(course, self.theme, self.resources)
                .expanded(self.cards.is_expanded(index))
                .focused(index == selected),
        )
    }

    fn card_height(&self, index: usize, width: u16) -> u16 {
        self.card(index, usize::MAX)
            .map(|card| card.height(width))
            .unwrap_or(0)
    }
}

impl StatefulWidget for CatalogView<'_> {
    type State = CatalogViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        state.total_cards = self.catalog.len();
        state.select(state.selected);
        state.visible_cards = 0;

        if area.height == 0 || area.width == 0 {
            return;
        }

        Line::styled(HEADER, styles::headline(self.theme)).render(
            Rect {
                height: 1,
                ..area
            },
            buf,
        );

        if self.catalog.is_empty() || area.height <= HEADER_HEIGHT {
            state.offset = 0;
            return;
        }

        let list = Rect {
            y: area.y + HEADER_HEIGHT,
            height: area.height - HEADER_HEIGHT,
            ..area
        };

        let selected = state.selected;
        let viewport = u32::from(list.height);
        state.scroll_to_selected(|offset| {
            let needed: u32 = (offset..=selected)
                .map(|index| u32::from(self.card_height(index, list.width)))
                .sum();
            needed <= viewport
        });

        let bottom = list.bottom();
        let mut y = list.y;
        let mut fully_visible = 0;
        for index in state.offset..self.catalog.len() {
            if y >= bottom {
                break;
            }
            let Some(card) = self.card(index, selected) else {
                break;
            };
            let height = card.height(list.width);
            let shown = height.min(bottom - y);
            if shown == height {
                fully_visible += 1;
            }
            card.render(Rect::new(list.x, y, list.width, shown), buf);
            y += shown;
        }
        state.visible_cards = fully_visible;
    }
}
