//! Catalog focus handlers
//!
//! Moving the focus never touches card order or any card's expanded flag.

use crate::state::{AppState, Mode};

use super::UpdateResult;

fn with_catalog_view(
    state: &mut AppState,
    f: impl FnOnce(&mut crate::catalog_view_state::CatalogViewState),
) -> UpdateResult {
    if state.mode() == Mode::Catalog {
        f(&mut state.catalog_view);
    }
    UpdateResult::none()
}

pub fn handle_select_next(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.select_next())
}

pub fn handle_select_previous(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.select_previous())
}

pub fn handle_select_first(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.select_first())
}

pub fn handle_select_last(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.select_last())
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.page_up())
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    with_catalog_view(state, |view| view.page_down())
}
