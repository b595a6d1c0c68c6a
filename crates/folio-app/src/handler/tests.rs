//! Tests for handler module

use std::sync::Arc;

use super::*;
use crate::config::Settings;
use crate::input_key::InputKey;
use crate::location::{Location, Selection};
use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::view::{Action, CardTier};
use folio_core::{ContentDocument, Global};

use super::keys::handle_key;

fn test_tree() -> Arc<Global> {
    let doc: ContentDocument = serde_json::from_str(
        r#"{"global": {"description": "Welcome", "categories": {
            "Nature": {"description": "Outdoors", "subcategories": {
                "Forests": {"articles": [
                    {"title": "Oaks", "abstract": "Big trees", "content": [
                        {"type": "heading", "text": "Intro"},
                        {"type": "paragraph", "text": "Oaks are..."}
                    ]},
                    {"title": "Pines", "content": []}
                ]},
                "Rivers": {"articles": []}
            }},
            "Cities": {"description": "Urban", "subcategories": {}}
        }}}"#,
    )
    .unwrap();
    Arc::new(doc.global)
}

fn new_state() -> AppState {
    AppState::new(DocumentSource::default(), Settings::default())
}

/// State that has requested and received the test tree
fn ready_state() -> AppState {
    let mut state = new_state();
    update(&mut state, Message::LoadContent);
    update(&mut state, Message::ContentLoaded(test_tree()));
    assert!(state.is_ready());
    state
}

fn location(state: &AppState) -> Location {
    state.navigator.as_ref().unwrap().location().clone()
}

#[test]
fn test_quit_message_sets_quitting_phase() {
    let mut state = new_state();
    assert!(!state.should_quit());

    update(&mut state, Message::Quit);

    assert_eq!(state.phase, AppPhase::Quitting);
    assert!(state.should_quit());
}

// ─────────────────────────────────────────────────────────
// Loading
// ─────────────────────────────────────────────────────────

#[test]
fn test_load_content_returns_action_once() {
    let mut state = new_state();

    let result = update(&mut state, Message::LoadContent);
    assert_eq!(
        result.action,
        Some(UpdateAction::LoadContent {
            source: DocumentSource::default()
        })
    );
    assert!(state.load_requested);

    let again = update(&mut state, Message::LoadContent);
    assert!(again.action.is_none());
}

#[test]
fn test_content_loaded_enters_home() {
    let state = ready_state();
    assert_eq!(location(&state), Location::Home);
    assert_eq!(state.cards().len(), 2);
    assert_eq!(state.cursor, 0);
    assert!(state.cards().iter().all(|c| c.tier == CardTier::Category));
}

#[test]
fn test_load_failure_shows_failure_without_cards() {
    let mut state = new_state();
    update(&mut state, Message::LoadContent);
    update(
        &mut state,
        Message::ContentLoadFailed {
            error: "data.json: No such file".into(),
        },
    );

    assert!(matches!(state.phase, AppPhase::Failed { ref message } if message.contains("data.json")));
    assert!(state.cards().is_empty());

    // Navigation input does nothing without a view
    update(&mut state, Message::Activate);
    update(&mut state, Message::SelectCard(0));
    assert!(state.navigator.is_none());
}

#[test]
fn test_late_content_after_failure_is_ignored() {
    let mut state = new_state();
    update(&mut state, Message::LoadContent);
    update(
        &mut state,
        Message::ContentLoadFailed {
            error: "boom".into(),
        },
    );
    update(&mut state, Message::ContentLoaded(test_tree()));

    assert!(matches!(state.phase, AppPhase::Failed { .. }));
    assert!(state.navigator.is_none());
}

#[test]
fn test_tick_advances_spinner_while_loading() {
    let mut state = new_state();
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert_eq!(state.loading_frame, 2);
}

#[test]
fn test_tick_reveals_cards_over_time() {
    let mut state = ready_state();
    assert!(state.entrance.is_visible(0));
    assert!(!state.entrance.is_visible(1));

    // Default stagger is 80ms, ticks are 50ms
    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    assert!(state.entrance.is_visible(1));
}

// ─────────────────────────────────────────────────────────
// Navigation
// ─────────────────────────────────────────────────────────

#[test]
fn test_cursor_moves_within_bounds() {
    let mut state = ready_state();

    update(&mut state, Message::MoveUp);
    assert_eq!(state.cursor, 0);

    update(&mut state, Message::MoveDown);
    assert_eq!(state.cursor, 1);

    update(&mut state, Message::MoveDown);
    assert_eq!(state.cursor, 1);

    update(&mut state, Message::MoveFirst);
    assert_eq!(state.cursor, 0);

    update(&mut state, Message::MoveLast);
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_walk_to_article_and_back() {
    let mut state = ready_state();

    update(&mut state, Message::Activate);
    assert_eq!(
        location(&state),
        Location::Category {
            category: "Nature".into()
        }
    );
    assert!(state.cards().iter().all(|c| c.tier == CardTier::Subcategory));

    update(&mut state, Message::SelectCard(0));
    update(&mut state, Message::MoveDown);
    update(&mut state, Message::Activate);
    assert_eq!(
        location(&state),
        Location::Article {
            category: "Nature".into(),
            subcategory: "Forests".into(),
            article: 1,
        }
    );
    assert!(state.cards().is_empty());

    update(&mut state, Message::Back);
    assert_eq!(
        location(&state),
        Location::Subcategory {
            category: "Nature".into(),
            subcategory: "Forests".into(),
        }
    );
    // Cursor returns to the article we came from
    assert_eq!(state.cursor, 1);

    update(&mut state, Message::Back);
    update(&mut state, Message::Back);
    assert_eq!(location(&state), Location::Home);
    assert_eq!(state.cursor, 0);

    // Back on Home is a no-op
    update(&mut state, Message::Back);
    assert_eq!(location(&state), Location::Home);
    assert!(state.is_ready());
}

#[test]
fn test_back_restores_cursor_to_category() {
    let mut state = ready_state();
    update(&mut state, Message::SelectCard(1));
    assert_eq!(
        location(&state),
        Location::Category {
            category: "Cities".into()
        }
    );
    assert!(state.cards().is_empty());

    update(&mut state, Message::Back);
    assert_eq!(state.cursor, 1);
}

#[test]
fn test_transition_resets_animation_and_scroll() {
    let mut state = ready_state();
    for _ in 0..10 {
        update(&mut state, Message::Tick);
    }
    state.scroll_offset = 5;

    update(&mut state, Message::Activate);
    assert_eq!(state.scroll_offset, 0);
    assert!(!state.entrance.is_visible(1));
}

#[test]
fn test_select_out_of_range_card_is_ignored() {
    let mut state = ready_state();
    update(&mut state, Message::SelectCard(8));
    assert_eq!(location(&state), Location::Home);
    assert!(state.is_ready());
}

#[test]
fn test_article_view_scrolls_instead_of_moving_cursor() {
    let mut state = ready_state();
    let nav = state.navigator.as_mut().unwrap();
    nav.select(Selection::Category("Nature".into())).unwrap();
    nav.select(Selection::Subcategory("Forests".into())).unwrap();
    nav.select(Selection::Article(0)).unwrap();

    update(&mut state, Message::MoveDown);
    update(&mut state, Message::MoveDown);
    assert_eq!(state.scroll_offset, 2);
    update(&mut state, Message::MoveUp);
    assert_eq!(state.scroll_offset, 1);

    update(&mut state, Message::PageDown);
    assert_eq!(state.scroll_offset, 11);
    update(&mut state, Message::PageUp);
    update(&mut state, Message::PageUp);
    assert_eq!(state.scroll_offset, 0);
    assert_eq!(state.cursor, 0);
}

#[test]
fn test_stale_card_action_is_fatal() {
    let mut state = ready_state();
    // Swap in a tree that lacks the categories the current view points at
    let empty: ContentDocument =
        serde_json::from_str(r#"{"global": {"description": "", "categories": {}}}"#).unwrap();
    let stale_nav = crate::navigation::Navigator::new(Arc::new(empty.global)).unwrap();
    let cards_before = state.cards().len();
    let old_nav = state.navigator.replace(stale_nav).unwrap();
    assert_eq!(cards_before, 2);

    // Dispatch an action taken from the old view against the new tree
    let action = old_nav.cards()[0].action.clone();
    assert!(matches!(action, Action::Select(Selection::Category(_))));
    let nav = state.navigator.as_mut().unwrap();
    assert!(nav.dispatch(&action).unwrap_err().is_fatal());
}

// ─────────────────────────────────────────────────────────
// Keys
// ─────────────────────────────────────────────────────────

#[test]
fn test_q_key_produces_quit_message() {
    let state = ready_state();
    assert!(matches!(
        handle_key(&state, InputKey::Char('q')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_ctrl_c_quits_in_every_phase() {
    let loading = new_state();
    assert!(matches!(
        handle_key(&loading, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
    let ready = ready_state();
    assert!(matches!(
        handle_key(&ready, InputKey::CharCtrl('c')),
        Some(Message::Quit)
    ));
}

#[test]
fn test_escape_quits_on_home_and_goes_back_elsewhere() {
    let mut state = ready_state();
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Quit)
    ));

    update(&mut state, Message::Activate);
    assert!(matches!(
        handle_key(&state, InputKey::Esc),
        Some(Message::Back)
    ));
}

#[test]
fn test_navigation_keys_map_to_messages() {
    let state = ready_state();
    assert!(matches!(handle_key(&state, InputKey::Char('j')), Some(Message::MoveDown)));
    assert!(matches!(handle_key(&state, InputKey::Up), Some(Message::MoveUp)));
    assert!(matches!(handle_key(&state, InputKey::Enter), Some(Message::Activate)));
    assert!(matches!(handle_key(&state, InputKey::Backspace), Some(Message::Back)));
    assert!(matches!(
        handle_key(&state, InputKey::Char('3')),
        Some(Message::SelectCard(2))
    ));
}

#[test]
fn test_loading_ignores_navigation_keys() {
    let state = new_state();
    assert!(handle_key(&state, InputKey::Enter).is_none());
    assert!(handle_key(&state, InputKey::Char('1')).is_none());
}

#[test]
fn test_key_message_flows_through_update() {
    let mut state = ready_state();
    let result = update(&mut state, Message::Key(InputKey::Enter));
    assert!(matches!(result.message, Some(Message::Activate)));
}
