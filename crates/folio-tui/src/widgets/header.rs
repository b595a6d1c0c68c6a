//! Header bar widget
//!
//! Shows the site description on the left and the breadcrumb of the current
//! location on the right.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::{palette, styles};

use super::text::truncate;

/// Breadcrumb separator
const SEPARATOR: &str = " › ";

pub struct SiteHeader<'a> {
    description: Option<&'a str>,
    breadcrumb: Vec<String>,
}

impl<'a> SiteHeader<'a> {
    pub fn new(description: Option<&'a str>) -> Self {
        Self {
            description,
            breadcrumb: Vec::new(),
        }
    }

    pub fn with_breadcrumb(mut self, breadcrumb: Vec<String>) -> Self {
        self.breadcrumb = breadcrumb;
        self
    }
}

impl Widget for SiteHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let crumb = self.breadcrumb.join(SEPARATOR);
        let crumb_width = Line::from(crumb.as_str()).width() as u16;

        // Breadcrumb wins when space is short; the title takes what is left
        let crumb_width = crumb_width.min(inner.width.saturating_sub(2));
        let title_width = inner.width.saturating_sub(crumb_width + 2);

        let title = self.description.unwrap_or("Folio");
        let title_line = Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate(title, title_width.saturating_sub(1)), styles::accent_bold()),
        ]);
        buf.set_line(inner.x, inner.y, &title_line, title_width);

        if crumb_width > 0 {
            let crumb_line = Line::from(Span::styled(
                truncate(&crumb, crumb_width),
                styles::text_secondary(),
            ));
            let x = inner.x + inner.width - crumb_width - 1;
            buf.set_line(x, inner.y, &crumb_line, crumb_width);
        }
    }
}
