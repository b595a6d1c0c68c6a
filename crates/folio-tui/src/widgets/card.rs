//! Card widget for category, subcategory and article summaries

use folio_app::{Card, CardTier};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

use crate::theme::styles;

use super::text::{truncate, wrap};

/// Marker drawn before the title of the selected card
pub const SELECTED_MARKER: &str = "▶ ";

/// Total rows a card of this tier occupies, borders included
pub fn card_height(tier: CardTier) -> u16 {
    match tier {
        CardTier::Category => 5,
        CardTier::Subcategory => 6,
        CardTier::Article => 5,
    }
}

pub struct CardView<'a> {
    card: &'a Card,
    selected: bool,
    show_image_refs: bool,
}

impl<'a> CardView<'a> {
    pub fn new(card: &'a Card) -> Self {
        Self {
            card,
            selected: false,
            show_image_refs: true,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_image_refs(mut self, show: bool) -> Self {
        self.show_image_refs = show;
        self
    }

    fn title_line(&self, width: u16) -> Line<'a> {
        let marker = if self.selected { SELECTED_MARKER } else { "" };
        // Direct-select hint for the first nine cards
        let hint = if self.card.stagger < 9 {
            format!("[{}]", self.card.stagger + 1)
        } else {
            String::new()
        };
        let hint_width = hint.chars().count() as u16;
        let title_width = width.saturating_sub(marker.chars().count() as u16 + hint_width + 1);

        let title = truncate(&self.card.title, title_width);
        let used = marker.chars().count() as u16 + Line::from(title.as_str()).width() as u16;
        let pad = width.saturating_sub(used + hint_width) as usize;

        Line::from(vec![
            Span::styled(marker, styles::accent_bold()),
            Span::styled(title, styles::card_title(self.card.tier, self.selected)),
            Span::raw(" ".repeat(pad)),
            Span::styled(hint, styles::keybinding()),
        ])
    }
}

impl Widget for CardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::card_block(self.selected);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        buf.set_line(inner.x, inner.y, &self.title_line(inner.width), inner.width);

        let image = self
            .card
            .image
            .as_deref()
            .filter(|_| self.show_image_refs);
        let body_rows = inner
            .height
            .saturating_sub(1)
            .saturating_sub(u16::from(image.is_some()));

        if let Some(description) = &self.card.description {
            let mut lines = wrap(description, inner.width);
            if lines.len() > usize::from(body_rows) {
                lines.truncate(usize::from(body_rows));
                if let Some(last) = lines.last_mut() {
                    *last = truncate(&format!("{last} …"), inner.width);
                }
            }
            for (row, text) in lines.iter().enumerate() {
                buf.set_stringn(
                    inner.x,
                    inner.y + 1 + row as u16,
                    text,
                    usize::from(inner.width),
                    styles::text_secondary(),
                );
            }
        }

        if let Some(src) = image {
            if inner.height >= 2 {
                let line = Line::from(Span::styled(
                    truncate(&format!("[image] {src}"), inner.width),
                    styles::image_ref(),
                ));
                buf.set_line(inner.x, inner.y + inner.height - 1, &line, inner.width);
            }
        }
    }
}
