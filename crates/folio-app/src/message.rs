//! Message types for the application (TEA pattern)

use std::sync::Arc;

use crate::input_key::InputKey;
use folio_core::Global;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for animations, sent every [`crate::state::TICK_INTERVAL_MS`]
    Tick,

    /// Quit immediately
    Quit,

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────
    /// Start the one-time content fetch
    LoadContent,
    /// Content document fetched and parsed
    ContentLoaded(Arc<Global>),
    /// Content document could not be fetched or parsed
    ContentLoadFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Move the card cursor up (scrolls in article view)
    MoveUp,
    /// Move the card cursor down (scrolls in article view)
    MoveDown,
    /// Jump to the first card (top of article)
    MoveFirst,
    /// Jump to the last card (end of article)
    MoveLast,
    /// Select the card under the cursor
    Activate,
    /// Select the card at a 0-based index
    SelectCard(usize),
    /// Return to the parent view
    Back,

    // ─────────────────────────────────────────────────────────
    // Article Scrolling
    // ─────────────────────────────────────────────────────────
    PageUp,
    PageDown,
}
