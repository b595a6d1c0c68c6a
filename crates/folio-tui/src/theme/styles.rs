//! Semantic style builders.

use folio_app::CardTier;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default()
        .fg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

// --- Keybinding hint style ---
pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Content styles ---
pub fn title() -> Style {
    Style::default()
        .fg(palette::TEXT_BRIGHT)
        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
}

pub fn heading() -> Style {
    Style::default()
        .fg(palette::HEADING)
        .add_modifier(Modifier::BOLD)
}

pub fn image_ref() -> Style {
    Style::default()
        .fg(palette::IMAGE_REF)
        .add_modifier(Modifier::ITALIC)
}

/// Card title emphasis by tier: categories loudest, articles quietest
pub fn card_title(tier: CardTier, selected: bool) -> Style {
    let base = match tier {
        CardTier::Category => Style::default()
            .fg(palette::ACCENT)
            .add_modifier(Modifier::BOLD),
        CardTier::Subcategory => Style::default()
            .fg(palette::TEXT_BRIGHT)
            .add_modifier(Modifier::BOLD),
        CardTier::Article => Style::default().fg(palette::TEXT_PRIMARY),
    };
    if selected {
        base.add_modifier(Modifier::REVERSED)
    } else {
        base
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

/// Card container; the selected card gets a thick accent border
pub fn card_block(selected: bool) -> Block<'static> {
    if selected {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(border_active())
            .style(Style::default().bg(palette::SELECTED_BG))
    } else {
        glass_block(false).style(Style::default().bg(palette::CARD_BG))
    }
}
