//! Key event handlers for each application phase

use crate::input_key::InputKey;
use crate::location::Location;
use crate::message::Message;
use crate::state::{AppPhase, AppState};

/// Convert key events to messages based on current phase
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.phase {
        // No view exists yet (or anymore): only leaving is possible
        AppPhase::Loading | AppPhase::Failed { .. } => handle_key_no_view(key),
        AppPhase::Ready => handle_key_ready(state, key),
        AppPhase::Quitting => None,
    }
}

/// Handle key events while loading or after a failure
fn handle_key_no_view(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::Esc => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Handle key events while browsing content
fn handle_key_ready(state: &AppState, key: InputKey) -> Option<Message> {
    let at_home = state
        .navigator
        .as_ref()
        .map(|nav| nav.location() == &Location::Home)
        .unwrap_or(true);

    match key {
        InputKey::Char('q') => Some(Message::Quit),
        InputKey::CharCtrl('c') => Some(Message::Quit),

        // Esc leaves the app from Home, otherwise goes back
        InputKey::Esc if at_home => Some(Message::Quit),
        InputKey::Esc | InputKey::Backspace | InputKey::Left | InputKey::Char('h') => {
            Some(Message::Back)
        }

        // ─────────────────────────────────────────────────────────
        // Cursor / Scroll
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::MoveUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MoveDown),
        InputKey::Home | InputKey::Char('g') => Some(Message::MoveFirst),
        InputKey::End | InputKey::Char('G') => Some(Message::MoveLast),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown => Some(Message::PageDown),

        // ─────────────────────────────────────────────────────────
        // Selection
        // ─────────────────────────────────────────────────────────
        InputKey::Enter | InputKey::Right | InputKey::Char('l') => Some(Message::Activate),
        // Number keys 1-9 select a card directly
        InputKey::Char(c @ '1'..='9') => Some(Message::SelectCard(c as usize - '1' as usize)),

        _ => None,
    }
}
