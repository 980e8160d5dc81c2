//! Application state (Model in TEA pattern)

use std::sync::Arc;

use coursebook_core::Catalog;
use serde::{Deserialize, Serialize};

use crate::catalog_view_state::CatalogViewState;
use crate::color_scheme::ColorScheme;
use crate::config::Settings;
use crate::expansion::CardExpansion;
use crate::resources::StringTable;

/// Which top-level view is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Welcome screen with a single Continue action
    Onboarding,
    /// Header plus one card per course
    Catalog,
}

/// Run phase of the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Courses shown in catalog mode, shared read-only with the views
    pub catalog: Arc<Catalog>,

    /// `true` until the user continues past onboarding
    show_onboarding: bool,

    /// Per-card expanded flags. Mutate through [`AppState::toggle_card`].
    pub cards: CardExpansion,

    /// Keyboard focus and scroll position in catalog mode
    pub catalog_view: CatalogViewState,

    /// Active light/dark scheme
    pub color_scheme: ColorScheme,

    /// Labels for the expand/collapse affordance
    pub strings: StringTable,

    /// Loaded settings
    pub settings: Settings,

    /// Last known terminal size (columns, rows)
    pub terminal_size: Option<(u16, u16)>,

    pub phase: AppPhase,
}

impl AppState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, Settings::default(), ColorScheme::default())
    }

    pub fn with_settings(
        catalog: Arc<Catalog>,
        settings: Settings,
        color_scheme: ColorScheme,
    ) -> Self {
        let catalog_view = CatalogViewState::new(catalog.len());
        let strings = StringTable::from_settings(&settings.strings);
        Self {
            catalog,
            show_onboarding: true,
            cards: CardExpansion::new(),
            catalog_view,
            color_scheme,
            strings,
            settings,
            terminal_size: None,
            phase: AppPhase::Running,
        }
    }

    pub fn mode(&self) -> Mode {
        if self.show_onboarding {
            Mode::Onboarding
        } else {
            Mode::Catalog
        }
    }

    pub fn show_onboarding(&self) -> bool {
        self.show_onboarding
    }

    /// Leave onboarding for good.
    ///
    /// Returns `true` only on the call that actually changed the state.
    pub fn dismiss_onboarding(&mut self) -> bool {
        let changed = self.show_onboarding;
        self.show_onboarding = false;
        changed
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.cards.is_expanded(index)
    }

    /// Flip one card and return its new state.
    ///
    /// Indices past the end of the catalog have no card and are left alone.
    pub fn toggle_card(&mut self, index: usize) -> Option<bool> {
        if index >= self.catalog.len() {
            return None;
        }
        Some(self.cards.toggle(index))
    }

    pub fn expanded_count(&self) -> usize {
        self.cards.count()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Snapshot the view-state that must outlive the views
    pub fn save(&self) -> SavedState {
        SavedState {
            show_onboarding: self.show_onboarding,
            expanded: self.cards.indices(),
            selected: self.catalog_view.selected,
        }
    }

    /// Re-apply a snapshot taken with [`AppState::save`].
    ///
    /// Expanded indices that no longer name a card are dropped. A dismissed
    /// onboarding screen stays dismissed whatever the snapshot says.
    pub fn restore(&mut self, saved: &SavedState) {
        let len = self.catalog.len();
        self.show_onboarding = self.show_onboarding && saved.show_onboarding;
        self.cards =
            CardExpansion::from_indices(saved.expanded.iter().copied().filter(|&i| i < len));
        self.catalog_view.select(saved.selected);
    }
}

/// View-state snapshot carried across a rebuild of the state owner.
///
/// Lives for the session only; it is never written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    pub show_onboarding: bool,
    /// Expanded card indices, ascending
    #[serde(default)]
    pub expanded: Vec<usize>,
    #[serde(default)]
    pub selected: usize,
}

impl Default for SavedState {
    fn default() -> Self {
        Self {
            show_onboarding: true,
            expanded: Vec::new(),
            selected: 0,
        }
    }
}
