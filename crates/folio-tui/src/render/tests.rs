//! Full-screen rendering tests for the view function

use super::*;
use crate::test_utils::{ready_state, TestTerminal};
use folio_app::config::Settings;
use folio_app::message::Message;
use folio_app::{update, DocumentSource};

fn draw(term: &mut TestTerminal, state: &mut AppState) {
    term.draw_with(|frame| view(frame, state));
}

/// Ready state with every card already revealed
fn settled_state() -> AppState {
    let mut state = ready_state();
    state.entrance.advance(10_000);
    state
}

fn open(state: &mut AppState, card: usize) {
    update(state, Message::SelectCard(card));
    state.entrance.advance(10_000);
}

#[test]
fn test_loading_screen() {
    let mut state = AppState::new(DocumentSource::default(), Settings::default());
    update(&mut state, Message::LoadContent);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Loading content from data.json"));
    assert!(term.buffer_contains("[q] Quit"));
    assert!(!term.buffer_contains("Back"));
}

#[test]
fn test_failure_screen_shows_error_and_no_cards() {
    let mut state = AppState::new(DocumentSource::default(), Settings::default());
    update(&mut state, Message::LoadContent);
    update(
        &mut state,
        Message::ContentLoadFailed {
            error: "Failed to load content: data.json: not found".into(),
        },
    );

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Could not load content"));
    assert!(term.buffer_contains("data.json: not found"));
    assert!(!term.buffer_contains(widgets::SELECTED_MARKER));
}

#[test]
fn test_home_view_lists_categories() {
    let mut state = settled_state();
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Field Notes"));
    assert!(term.line_contains(1, "Home"));
    assert!(term.buffer_contains("▶ Nature"));
    assert!(term.buffer_contains("Outdoors"));
    assert!(term.buffer_contains("[image] img/nature.jpg"));
    assert!(term.buffer_contains("Cities"));
    assert!(term.buffer_contains("[2]"));
    assert!(term.line_contains(23, "1/2"));
    assert!(!term.buffer_contains("← Back"));
}

#[test]
fn test_home_view_hides_image_refs_when_disabled() {
    let mut state = settled_state();
    state.settings.ui.show_image_refs = false;
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("Nature"));
    assert!(!term.buffer_contains("img/nature.jpg"));
}

#[test]
fn test_entrance_reveals_cards_over_ticks() {
    let mut state = ready_state();
    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Nature"));
    assert!(!term.buffer_contains("Cities"));

    update(&mut state, Message::Tick);
    update(&mut state, Message::Tick);
    draw(&mut term, &mut state);
    assert!(term.buffer_contains("Cities"));
}

#[test]
fn test_category_view() {
    let mut state = settled_state();
    open(&mut state, 0);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Home › Nature"));
    assert!(term.buffer_contains("← Back"));
    assert!(term.buffer_contains("Outdoors"));
    assert!(term.buffer_contains("▶ Forests"));
    assert!(term.buffer_contains("[image] img/forests.jpg"));
    assert!(term.buffer_contains("Rivers"));
    assert!(term.buffer_contains("[Esc] Back"));
}

#[test]
fn test_empty_category_view_has_no_cards() {
    let mut state = settled_state();
    open(&mut state, 1);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Home › Cities"));
    assert!(term.buffer_contains("← Back"));
    assert!(!term.buffer_contains(widgets::SELECTED_MARKER));
    assert!(!term.line_contains(23, "/"));
}

#[test]
fn test_article_view() {
    let mut state = settled_state();
    open(&mut state, 0);
    open(&mut state, 0);
    open(&mut state, 0);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    assert!(term.line_contains(1, "Home › Nature › Forests › Oaks"));
    assert!(term.buffer_contains("Intro"));
    assert!(term.buffer_contains("Oaks are..."));
    assert!(term.buffer_contains("[image: An oak] img/oak.png"));
    assert!(!term.buffer_contains("oaks.mp4"));
    assert!(term.buffer_contains("[PgUp/PgDn] Page"));
}

#[test]
fn test_article_scroll_clamped_after_render() {
    let mut state = settled_state();
    open(&mut state, 0);
    open(&mut state, 0);
    open(&mut state, 0);
    update(&mut state, Message::MoveLast);
    assert_eq!(state.scroll_offset, u16::MAX);

    let mut term = TestTerminal::new();
    draw(&mut term, &mut state);

    // Short article fits the screen, so there is nothing to scroll
    assert_eq!(state.scroll_offset, 0);
    assert!(term.buffer_contains("← Back"));
}

#[test]
fn test_compact_terminal_keeps_selection_visible() {
    let mut state = settled_state();
    update(&mut state, Message::MoveDown);

    let mut term = TestTerminal::compact();
    draw(&mut term, &mut state);

    assert!(term.buffer_contains("▶ Cities"));
}
