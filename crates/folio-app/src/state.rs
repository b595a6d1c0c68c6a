//! Application state (Model in TEA pattern)

use crate::config::Settings;
use crate::loader::DocumentSource;
use crate::navigation::Navigator;
use crate::view::Card;

/// Interval between [`crate::message::Message::Tick`] events
pub const TICK_INTERVAL_MS: u64 = 50;

/// Lines scrolled by PageUp/PageDown in article view
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Application lifecycle phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AppPhase {
    /// Waiting for the content document; no view exists yet
    #[default]
    Loading,

    /// Content loaded, navigation active
    Ready,

    /// Loading failed (or navigation hit a stale reference). Terminal until quit.
    Failed { message: String },

    /// Shutting down
    Quitting,
}

/// Staggered entrance of cards after entering a view.
///
/// Card `n` becomes visible once `n * stagger_ms` has elapsed. This is purely
/// cosmetic: hidden cards are still selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntranceAnimation {
    elapsed_ms: u64,
    stagger_ms: u64,
}

impl EntranceAnimation {
    pub fn new(stagger_ms: u64) -> Self {
        Self {
            elapsed_ms: 0,
            stagger_ms,
        }
    }

    /// Start over, e.g. after entering a new view
    pub fn restart(&mut self) {
        self.elapsed_ms = 0;
    }

    pub fn advance(&mut self, ms: u64) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(ms);
    }

    /// Delay before the card with this stagger index appears
    pub fn delay_ms(&self, stagger: usize) -> u64 {
        (stagger as u64).saturating_mul(self.stagger_ms)
    }

    pub fn is_visible(&self, stagger: usize) -> bool {
        self.elapsed_ms >= self.delay_ms(stagger)
    }

    /// True once every card of a view with `card_count` cards is visible
    pub fn is_complete(&self, card_count: usize) -> bool {
        card_count == 0 || self.is_visible(card_count - 1)
    }
}

/// Complete application state (Model in TEA pattern)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    pub settings: Settings,

    /// Where content is loaded from
    pub source: DocumentSource,

    /// Set once the fetch has been requested; the fetch never repeats
    pub load_requested: bool,

    /// Present only after a successful load
    pub navigator: Option<Navigator>,

    /// Index of the highlighted card in the current view
    pub cursor: usize,

    /// Vertical scroll of the article view, in lines
    pub scroll_offset: u16,

    pub entrance: EntranceAnimation,

    /// Spinner frame while loading
    pub loading_frame: u64,
}

impl AppState {
    pub fn new(source: DocumentSource, settings: Settings) -> Self {
        let entrance = EntranceAnimation::new(settings.ui.stagger_ms);
        Self {
            phase: AppPhase::Loading,
            settings,
            source,
            load_requested: false,
            navigator: None,
            cursor: 0,
            scroll_offset: 0,
            entrance,
            loading_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn is_ready(&self) -> bool {
        self.phase == AppPhase::Ready && self.navigator.is_some()
    }

    /// Cards of the current view, empty when no view exists
    pub fn cards(&self) -> Vec<&Card> {
        self.navigator
            .as_ref()
            .map(Navigator::cards)
            .unwrap_or_default()
    }

    /// The card under the cursor
    pub fn selected_card(&self) -> Option<&Card> {
        self.cards().get(self.cursor).copied()
    }

    /// Put the app into its failure screen and drop any view
    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = AppPhase::Failed {
            message: message.into(),
        };
        self.navigator = None;
    }

    /// Reset per-view presentation state after a transition
    pub(crate) fn reset_view_state(&mut self, cursor: usize) {
        self.cursor = cursor;
        self.scroll_offset = 0;
        self.entrance.restart();
    }
}
