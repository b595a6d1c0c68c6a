//! Bottom bar with key hints for the current screen

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

/// Which set of hints to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintSet {
    /// Loading or failure screen: only quitting works
    QuitOnly,
    /// Home view: no back
    Home,
    /// A view with cards below Home
    Cards,
    /// Article view: scrolling instead of a cursor
    Article,
}

pub struct StatusBar {
    hints: HintSet,
    /// 1-based cursor position and card count
    position: Option<(usize, usize)>,
}

impl StatusBar {
    pub fn new(hints: HintSet) -> Self {
        Self {
            hints,
            position: None,
        }
    }

    pub fn position(mut self, cursor: usize, count: usize) -> Self {
        if count > 0 {
            self.position = Some((cursor + 1, count));
        }
        self
    }

    fn keys(&self) -> &'static [(&'static str, &'static str)] {
        match self.hints {
            HintSet::QuitOnly => &[("q", "Quit")],
            HintSet::Home => &[("↑↓", "Move"), ("Enter", "Open"), ("1-9", "Jump"), ("q", "Quit")],
            HintSet::Cards => &[
                ("↑↓", "Move"),
                ("Enter", "Open"),
                ("Esc", "Back"),
                ("q", "Quit"),
            ],
            HintSet::Article => &[("↑↓", "Scroll"), ("PgUp/PgDn", "Page"), ("Esc", "Back"), ("q", "Quit")],
        }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (key, label) in self.keys() {
            spans.push(Span::styled("[", styles::text_muted()));
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!("] {label}  "), styles::text_muted()));
        }
        buf.set_line(area.x, area.y, &Line::from(spans), area.width);

        if let Some((current, count)) = self.position {
            let text = format!("{current}/{count} ");
            let width = text.chars().count() as u16;
            if width < area.width {
                buf.set_string(
                    area.x + area.width - width,
                    area.y,
                    text,
                    styles::text_secondary(),
                );
            }
        }
    }
}
