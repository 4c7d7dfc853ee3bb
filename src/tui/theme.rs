//! Color theme for the explorer TUI.
//!
//! All colors are RGB truecolor. Views import from here instead of using
//! inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders};

use crate::core::filter::ColorFilter;

// ── Palette ─────────────────────────────────────────────────────────────────

/// Teal: focused borders, headers.
pub const PRIMARY: Color = Color::Rgb(0x00, 0x80, 0x80);
/// Light teal: hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x00, 0x96, 0x88);
/// Coral: titles, active buttons.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x7F, 0x50);

pub const BG_BASE: Color = Color::Rgb(0x0A, 0x19, 0x19);

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

/// Star glyphs in the table.
pub const STARS: Color = Color::Rgb(0xFF, 0xD5, 0x4F);

// ── Color filter swatches ───────────────────────────────────────────────────

pub fn swatch(filter: ColorFilter) -> Color {
    match filter {
        ColorFilter::All => TEXT,
        ColorFilter::Green => Color::Rgb(0x66, 0xBB, 0x6A),
        ColorFilter::Dark => Color::Rgb(0x9C, 0x6A, 0xDE),
        ColorFilter::Light => Color::Rgb(0xFF, 0xF1, 0x76),
    }
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Card titles and the app title.
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Table header cells.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Selected table row.
pub fn row_highlight() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Badge shown while an input box is being edited.
pub fn editing_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// A color filter button, filled when active.
pub fn filter_button(filter: ColorFilter, active: bool) -> Style {
    if active {
        Style::default()
            .fg(BG_BASE)
            .bg(swatch(filter))
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(swatch(filter))
    }
}

// ── Block builders ──────────────────────────────────────────────────────────

/// Bordered block, highlighted when it owns keyboard input.
pub fn input_block(title: &str, focused: bool) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(PRIMARY)
        } else {
            Style::default().fg(TEXT_DIM)
        })
}

/// Card frame with the character name as its title.
pub fn card_block(name: &str) -> Block<'_> {
    Block::default()
        .title(Span::styled(format!(" {name} "), title()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_MUTED))
}
