//! Page widget: lays out the elements of a view and scrolls them
//!
//! Elements are stacked top to bottom on a virtual canvas as tall as the
//! whole view, then the visible window is copied into the frame. Card views
//! scroll to keep the selected card on screen; card-less views (articles)
//! scroll by the offset held in the widget state.

use folio_app::state::EntranceAnimation;
use folio_app::{Card, Element};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

use crate::theme::styles;

use super::card::{card_height, CardView};
use super::text::wrap;

/// A laid-out piece of the page
enum Piece<'a> {
    Lines(Vec<Line<'a>>),
    Card { card: &'a Card, index: usize },
}

impl Piece<'_> {
    fn height(&self) -> u16 {
        match self {
            Piece::Lines(lines) => u16::try_from(lines.len()).unwrap_or(u16::MAX),
            Piece::Card { card, .. } => card_height(card.tier),
        }
    }
}

pub struct PageView<'a> {
    elements: &'a [Element],
    cursor: usize,
    entrance: Option<&'a EntranceAnimation>,
    show_image_refs: bool,
}

impl<'a> PageView<'a> {
    pub fn new(elements: &'a [Element]) -> Self {
        Self {
            elements,
            cursor: 0,
            entrance: None,
            show_image_refs: true,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    /// Hide cards the entrance animation has not revealed yet
    pub fn entrance(mut self, entrance: &'a EntranceAnimation) -> Self {
        self.entrance = Some(entrance);
        self
    }

    pub fn show_image_refs(mut self, show: bool) -> Self {
        self.show_image_refs = show;
        self
    }

    fn layout(&self, width: u16) -> Vec<Piece<'a>> {
        let mut pieces = Vec::with_capacity(self.elements.len());
        let mut card_index = 0;

        for element in self.elements {
            let piece = match element {
                Element::Back { label, .. } => Piece::Lines(vec![
                    Line::from(Span::styled(label.clone(), styles::accent())),
                    Line::default(),
                ]),
                Element::Banner { title, image } => {
                    let mut lines = styled_lines(title, width, styles::accent_bold());
                    if let Some(src) = image.as_deref().filter(|_| self.show_image_refs) {
                        lines.push(Line::from(Span::styled(
                            format!("[image] {src}"),
                            styles::image_ref(),
                        )));
                    }
                    lines.push(Line::default());
                    Piece::Lines(lines)
                }
                Element::Title { text } => {
                    let mut lines = styled_lines(text, width, styles::title());
                    lines.push(Line::default());
                    Piece::Lines(lines)
                }
                Element::Text { text } => {
                    let mut lines = styled_lines(text, width, styles::text_secondary());
                    lines.push(Line::default());
                    Piece::Lines(lines)
                }
                Element::Heading { text } => Piece::Lines(styled_lines(text, width, styles::heading())),
                Element::Paragraph { text } => {
                    let mut lines = styled_lines(text, width, styles::text_primary());
                    lines.push(Line::default());
                    Piece::Lines(lines)
                }
                Element::Image { src, alt } => {
                    let label = match alt {
                        Some(alt) => format!("[image: {alt}]"),
                        None => "[image]".to_string(),
                    };
                    let text = if self.show_image_refs {
                        format!("{label} {src}")
                    } else {
                        label
                    };
                    let mut lines = styled_lines(&text, width, styles::image_ref());
                    lines.push(Line::default());
                    Piece::Lines(lines)
                }
                Element::Card(card) => {
                    let index = card_index;
                    card_index += 1;
                    Piece::Card { card, index }
                }
            };
            pieces.push(piece);
        }
        pieces
    }
}

fn styled_lines<'a>(text: &str, width: u16, style: Style) -> Vec<Line<'a>> {
    wrap(text, width)
        .into_iter()
        .map(|line| Line::from(Span::styled(line, style)))
        .collect()
}

impl StatefulWidget for PageView<'_> {
    /// Scroll offset in lines, clamped in place for card-less views
    type State = u16;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut u16) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let pieces = self.layout(area.width);
        let total = pieces
            .iter()
            .fold(0u16, |acc, piece| acc.saturating_add(piece.height()));

        let mut canvas = Buffer::empty(Rect::new(0, 0, area.width, total.max(1)));
        let mut y = 0u16;
        let mut selected_span = None;

        for piece in &pieces {
            let height = piece.height();
            let rect = Rect::new(0, y, area.width, height.min(total - y));
            match piece {
                Piece::Lines(lines) => {
                    for (row, line) in lines.iter().enumerate() {
                        let line_y = y.saturating_add(u16::try_from(row).unwrap_or(u16::MAX));
                        if line_y >= total {
                            break;
                        }
                        canvas.set_line(0, line_y, line, area.width);
                    }
                }
                Piece::Card { card, index } => {
                    let selected = *index == self.cursor;
                    if selected {
                        selected_span = Some((y, y.saturating_add(height)));
                    }
                    let visible = self
                        .entrance
                        .map(|anim| anim.is_visible(card.stagger))
                        .unwrap_or(true);
                    if visible {
                        CardView::new(card)
                            .selected(selected)
                            .show_image_refs(self.show_image_refs)
                            .render(rect, &mut canvas);
                    }
                }
            }
            y = y.saturating_add(height);
        }

        let max_offset = total.saturating_sub(area.height);
        let offset = match selected_span {
            Some((_, bottom)) => bottom.saturating_sub(area.height).min(max_offset),
            None => {
                *scroll = (*scroll).min(max_offset);
                *scroll
            }
        };

        for row in 0..area.height.min(total.saturating_sub(offset)) {
            for col in 0..area.width {
                buf[(area.x + col, area.y + row)] = canvas[(col, offset + row)].clone();
            }
        }
    }
}
