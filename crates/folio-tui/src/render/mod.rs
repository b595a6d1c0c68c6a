//! Main render/view function (View in TEA pattern)

#[cfg(test)]
mod tests;

use folio_app::state::{AppPhase, AppState};
use folio_app::{Element, Location, Navigator};
use folio_core::logging;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{palette, styles};

/// Braille spinner frames for the loading screen
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Render the complete UI (View function in TEA)
///
/// Only mutates the article scroll offset, which is clamped to the content.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let description = state
        .navigator
        .as_ref()
        .map(|nav| nav.tree().description.as_str())
        .filter(|d| !d.is_empty());
    let breadcrumb = state.navigator.as_ref().map(breadcrumb).unwrap_or_default();
    frame.render_widget(
        widgets::SiteHeader::new(description).with_breadcrumb(breadcrumb),
        areas.header,
    );

    match &state.phase {
        AppPhase::Loading => render_loading_screen(frame, state, areas.content),
        AppPhase::Failed { message } => render_failure_screen(frame, message, areas.content),
        AppPhase::Ready | AppPhase::Quitting => {}
    }

    if state.is_ready() {
        render_ready(frame, state, &areas);
    } else {
        frame.render_widget(
            widgets::StatusBar::new(widgets::HintSet::QuitOnly),
            areas.status,
        );
    }
}

fn render_ready(frame: &mut Frame, state: &mut AppState, areas: &layout::ScreenAreas) {
    let Some(nav) = state.navigator.as_ref() else {
        return;
    };

    let hints = match nav.location() {
        Location::Home => widgets::HintSet::Home,
        Location::Article { .. } => widgets::HintSet::Article,
        _ => widgets::HintSet::Cards,
    };
    let card_count = nav.cards().len();

    // One column of padding on each side of the page
    let page_area = Rect {
        x: areas.content.x + 1,
        width: areas.content.width.saturating_sub(2),
        ..areas.content
    };
    let page = widgets::PageView::new(nav.view())
        .cursor(state.cursor)
        .entrance(&state.entrance)
        .show_image_refs(state.settings.ui.show_image_refs);
    frame.render_stateful_widget(page, page_area, &mut state.scroll_offset);

    frame.render_widget(
        widgets::StatusBar::new(hints).position(state.cursor, card_count),
        areas.status,
    );
}

/// Path segments for the header: Home, then each key, then the article title
fn breadcrumb(nav: &Navigator) -> Vec<String> {
    let mut parts = vec!["Home".to_string()];
    match nav.location() {
        Location::Home => {}
        Location::Category { category } => parts.push(category.clone()),
        Location::Subcategory {
            category,
            subcategory,
        } => parts.extend([category.clone(), subcategory.clone()]),
        Location::Article {
            category,
            subcategory,
            article,
        } => {
            parts.extend([category.clone(), subcategory.clone()]);
            let title = nav.view().iter().find_map(|el| match el {
                Element::Title { text } => Some(text.clone()),
                _ => None,
            });
            parts.push(title.unwrap_or_else(|| format!("#{}", article + 1)));
        }
    }
    parts
}

/// Centered box of the given size within `area`
fn centered(area: Rect, width_percent: u16, height: u16) -> Rect {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .areas(area);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - width_percent) / 2),
        Constraint::Percentage(width_percent),
        Constraint::Percentage((100 - width_percent) / 2),
    ])
    .areas(middle);
    center
}

fn render_loading_screen(frame: &mut Frame, state: &AppState, area: Rect) {
    let spinner = SPINNER[(state.loading_frame as usize) % SPINNER.len()];
    let center_area = centered(area, 60, 5);
    frame.render_widget(Clear, center_area);

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(spinner, styles::accent_bold()),
            Span::raw(" "),
            Span::styled(
                format!("Loading content from {}", state.source),
                styles::text_secondary(),
            ),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(styles::glass_block(false))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, center_area);
}

fn render_failure_screen(frame: &mut Frame, message: &str, area: Rect) {
    let center_area = centered(area, 80, 9);
    frame.render_widget(Clear, center_area);

    let mut lines = vec![
        Line::from(Span::styled("Could not load content", styles::status_red())),
        Line::from(""),
        Line::from(Span::styled(message.to_string(), styles::text_primary())),
        Line::from(""),
    ];
    if let Ok(dir) = logging::log_directory() {
        lines.push(Line::from(Span::styled(
            format!("Details in the logs under {}", dir.display()),
            styles::text_muted(),
        )));
    }

    let block = styles::glass_block(false).border_style(styles::status_red());
    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, center_area);
}
