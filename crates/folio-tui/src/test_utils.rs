//! Test utilities for TUI rendering verification
//!
//! Wraps ratatui's TestBackend so widget and full-screen tests can render
//! into a buffer and assert on its text.

use std::sync::Arc;

use folio_app::config::Settings;
use folio_app::message::Message;
use folio_app::state::AppState;
use folio_app::{update, DocumentSource};
use folio_core::{ContentDocument, Global};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;

/// Standard test terminal size (matches common terminal dimensions)
pub const TEST_WIDTH: u16 = 80;
pub const TEST_HEIGHT: u16 = 24;

/// Compact terminal for testing responsive layouts
pub const COMPACT_WIDTH: u16 = 40;
pub const COMPACT_HEIGHT: u16 = 12;

/// Test utility wrapper around ratatui's TestBackend terminal.
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    /// Create a new test terminal with standard dimensions (80x24)
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    /// Create a new test terminal with compact dimensions (40x12)
    pub fn compact() -> Self {
        Self::with_size(COMPACT_WIDTH, COMPACT_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    /// Render a widget to the terminal
    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    /// Draws a frame using a custom rendering function, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string anywhere
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_to_string(self.buffer()).contains(text)
    }

    /// Check if a specific line contains text
    pub fn line_contains(&self, line: u16, text: &str) -> bool {
        get_line_content(self.buffer(), line).contains(text)
    }

    /// Get all content as a string (for debugging)
    pub fn content(&self) -> String {
        buffer_to_string(self.buffer())
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

fn buffer_to_string(buffer: &Buffer) -> String {
    let mut result = String::new();
    for y in 0..buffer.area.height {
        result.push_str(&get_line_content(buffer, y));
        result.push('\n');
    }
    result
}

fn get_line_content(buffer: &Buffer, line: u16) -> String {
    let mut result = String::new();
    if line < buffer.area.height {
        for x in 0..buffer.area.width {
            result.push_str(buffer[(x, line)].symbol());
        }
    }
    result
}

/// Small tree: two categories, one with two subcategories
pub fn test_tree() -> Arc<Global> {
    let doc: ContentDocument = serde_json::from_str(
        r#"{"global": {"description": "Field Notes", "categories": {
            "Nature": {"description": "Outdoors", "image": "img/nature.jpg", "subcategories": {
                "Forests": {"image": "img/forests.jpg", "articles": [
                    {"title": "Oaks", "abstract": "Big trees", "content": [
                        {"type": "heading", "text": "Intro"},
                        {"type": "paragraph", "text": "Oaks are..."},
                        {"type": "video", "src": "oaks.mp4"},
                        {"type": "image", "src": "img/oak.png", "alt": "An oak"}
                    ]}
                ]},
                "Rivers": {"articles": []}
            }},
            "Cities": {"description": "", "subcategories": {}}
        }}}"#,
    )
    .expect("test tree parses");
    Arc::new(doc.global)
}

/// Create a state that has loaded [`test_tree`] and sits on Home
pub fn ready_state() -> AppState {
    let mut state = AppState::new(DocumentSource::default(), Settings::default());
    update(&mut state, Message::LoadContent);
    update(&mut state, Message::ContentLoaded(test_tree()));
    state
}
