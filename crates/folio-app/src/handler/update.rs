//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::navigation::Navigator;
use crate::state::{AppPhase, AppState, TICK_INTERVAL_MS};
use folio_core::prelude::*;

use super::{keys::handle_key, navigation, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            match state.phase {
                AppPhase::Loading => state.loading_frame = state.loading_frame.wrapping_add(1),
                AppPhase::Ready => {
                    if !state.entrance.is_complete(state.cards().len()) {
                        state.entrance.advance(TICK_INTERVAL_MS);
                    }
                }
                _ => {}
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Loading
        // ─────────────────────────────────────────────────────────
        Message::LoadContent => {
            if state.load_requested {
                debug!("Content load already requested, ignoring");
                return UpdateResult::none();
            }
            state.load_requested = true;
            state.phase = AppPhase::Loading;
            info!("Loading content from {}", state.source);
            UpdateResult::action(UpdateAction::LoadContent {
                source: state.source.clone(),
            })
        }

        Message::ContentLoaded(tree) => {
            if state.phase != AppPhase::Loading {
                warn!("Content arrived in phase {:?}, ignoring", state.phase);
                return UpdateResult::none();
            }
            match Navigator::new(tree) {
                Ok(nav) => {
                    info!("Content ready: {} categories", nav.tree().categories.len());
                    state.navigator = Some(nav);
                    state.phase = AppPhase::Ready;
                    state.reset_view_state(0);
                }
                Err(e) => {
                    error!("Failed to render home view: {}", e);
                    state.fail(e.to_string());
                }
            }
            UpdateResult::none()
        }

        Message::ContentLoadFailed { error } => {
            error!("Content load failed: {}", error);
            state.fail(error);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation (only meaningful once a view exists)
        // ─────────────────────────────────────────────────────────
        _ if !state.is_ready() => UpdateResult::none(),

        Message::MoveUp => navigation::handle_move_up(state),
        Message::MoveDown => navigation::handle_move_down(state),
        Message::MoveFirst => navigation::handle_move_first(state),
        Message::MoveLast => navigation::handle_move_last(state),
        Message::PageUp => navigation::handle_page_up(state),
        Message::PageDown => navigation::handle_page_down(state),
        Message::Activate => navigation::handle_activate(state),
        Message::SelectCard(index) => navigation::handle_select_card(state, index),
        Message::Back => navigation::handle_back(state),
    }
}
