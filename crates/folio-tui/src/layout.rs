//! Screen layout definitions for the TUI

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + title row + bottom border
pub const HEADER_HEIGHT: u16 = 3;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Site header (description + breadcrumb)
    pub header: Rect,

    /// Current view
    pub content: Rect,

    /// Key hints
    pub status: Rect,
}

pub fn create(area: Rect) -> ScreenAreas {
    let [header, content, status] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(area);

    ScreenAreas {
        header,
        content,
        status,
    }
}
