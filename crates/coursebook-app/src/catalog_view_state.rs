//! Catalog view state - keyboard focus, scroll offset and viewport bounds.
//!
//! Shared by the handler layer (navigation messages) and the TUI layer
//! (virtualized card rendering).

/// Focus and scroll state for the card list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogViewState {
    /// Index of the focused card
    pub selected: usize,
    /// Index of the first card drawn in the viewport
    pub offset: usize,
    /// Number of cards in the catalog
    pub total_cards: usize,
    /// Cards that fit in the viewport (set during render)
    pub visible_cards: usize,
}

impl CatalogViewState {
    pub fn new(total_cards: usize) -> Self {
        Self {
            total_cards,
            ..Self::default()
        }
    }

    fn last_index(&self) -> usize {
        self.total_cards.saturating_sub(1)
    }

    /// Focus a card, clamped to the catalog bounds
    pub fn select(&mut self, index: usize) {
        self.selected = index.min(self.last_index());
    }

    pub fn select_next(&mut self) {
        self.select(self.selected.saturating_add(1));
    }

    pub fn select_previous(&mut self) {
        self.select(self.selected.saturating_sub(1));
    }

    pub fn select_first(&mut self) {
        self.select(0);
    }

    pub fn select_last(&mut self) {
        self.select(self.last_index());
    }

    fn page_size(&self) -> usize {
        self.visible_cards.max(1)
    }

    pub fn page_up(&mut self) {
        self.select(self.selected.saturating_sub(self.page_size()));
    }

    pub fn page_down(&mut self) {
        self.select(self.selected.saturating_add(self.page_size()));
    }

    /// Move `offset` so the focused card starts inside the viewport.
    ///
    /// `fits_from(offset)` answers whether cards `offset..=selected` fit in the
    /// viewport when drawing starts at `offset`.
    pub fn scroll_to_selected(&mut self, mut fits_from: impl FnMut(usize) -> bool) {
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        while self.offset < self.selected && !fits_from(self.offset) {
            self.offset += 1;
        }
    }
}
