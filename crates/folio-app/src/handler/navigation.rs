//! Navigation and scroll handlers

use folio_core::prelude::*;

use super::UpdateResult;
use crate::location::{Location, Selection};
use crate::state::{AppState, PAGE_SCROLL_LINES};
use crate::view::Action;

/// Handle cursor up (or scroll up when the view has no cards)
pub fn handle_move_up(state: &mut AppState) -> UpdateResult {
    if state.cards().is_empty() {
        state.scroll_offset = state.scroll_offset.saturating_sub(1);
    } else {
        state.cursor = state.cursor.saturating_sub(1);
    }
    UpdateResult::none()
}

/// Handle cursor down (or scroll down when the view has no cards)
pub fn handle_move_down(state: &mut AppState) -> UpdateResult {
    let count = state.cards().len();
    if count == 0 {
        state.scroll_offset = state.scroll_offset.saturating_add(1);
    } else if state.cursor + 1 < count {
        state.cursor += 1;
    }
    UpdateResult::none()
}

pub fn handle_move_first(state: &mut AppState) -> UpdateResult {
    state.cursor = 0;
    state.scroll_offset = 0;
    UpdateResult::none()
}

pub fn handle_move_last(state: &mut AppState) -> UpdateResult {
    let count = state.cards().len();
    if count == 0 {
        // Clamped to the content height by the renderer
        state.scroll_offset = u16::MAX;
    } else {
        state.cursor = count - 1;
    }
    UpdateResult::none()
}

pub fn handle_page_up(state: &mut AppState) -> UpdateResult {
    state.scroll_offset = state.scroll_offset.saturating_sub(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

pub fn handle_page_down(state: &mut AppState) -> UpdateResult {
    state.scroll_offset = state.scroll_offset.saturating_add(PAGE_SCROLL_LINES);
    UpdateResult::none()
}

/// Select the card under the cursor
pub fn handle_activate(state: &mut AppState) -> UpdateResult {
    let Some(action) = state.selected_card().map(|card| card.action.clone()) else {
        return UpdateResult::none();
    };
    dispatch(state, &action)
}

/// Select the card at `index`. Out-of-range indices are ignored.
pub fn handle_select_card(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(action) = state.cards().get(index).map(|card| card.action.clone()) else {
        return UpdateResult::none();
    };
    dispatch(state, &action)
}

/// Go to the parent view, keeping the cursor on the card we came from
pub fn handle_back(state: &mut AppState) -> UpdateResult {
    dispatch(state, &Action::Back)
}

fn dispatch(state: &mut AppState, action: &Action) -> UpdateResult {
    let Some(nav) = state.navigator.as_mut() else {
        return UpdateResult::none();
    };

    let previous = nav.location().clone();
    match nav.dispatch(action) {
        Ok(()) => {
            if nav.location() != &previous {
                let cursor = cursor_after_transition(state, &previous);
                state.reset_view_state(cursor);
            }
        }
        Err(e) if e.is_recoverable() => {
            warn!("Ignoring navigation action {:?}: {}", action, e);
        }
        Err(e) => {
            error!("Navigation failed: {}", e);
            state.fail(e.to_string());
        }
    }
    UpdateResult::none()
}

/// After going back, highlight the card leading to where we were; otherwise 0
fn cursor_after_transition(state: &AppState, previous: &Location) -> usize {
    let came_from = match previous {
        Location::Home => return 0,
        Location::Category { category } => Selection::Category(category.clone()),
        Location::Subcategory { subcategory, .. } => Selection::Subcategory(subcategory.clone()),
        Location::Article { article, .. } => Selection::Article(*article),
    };
    state
        .cards()
        .iter()
        .position(|card| card.action == Action::Select(came_from.clone()))
        .unwrap_or(0)
}
