//! Card grid view: one bordered card per filtered character.
//!
//! The grid is responsive (1/2/3 columns by width) and scrolls one card row
//! at a time with `j`/`k`.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::core::card::{CharacterCard, CARD_FIELD_COUNT};
use crate::tui::layout::card_columns;
use crate::tui::theme;

/// Field lines plus top and bottom border.
pub const CARD_HEIGHT: u16 = CARD_FIELD_COUNT as u16 + 2;

#[derive(Debug)]
pub struct CardGridState {
    /// First visible card row.
    scroll_row: usize,
    /// Columns used by the last render; drives row math for scrolling.
    columns: usize,
}

impl CardGridState {
    pub fn new() -> Self {
        Self {
            scroll_row: 0,
            columns: 1,
        }
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn reset(&mut self) {
        self.scroll_row = 0;
    }

    fn total_rows(&self, card_count: usize) -> usize {
        card_count.div_ceil(self.columns.max(1))
    }

    pub fn scroll_down(&mut self, card_count: usize) {
        let last = self.total_rows(card_count).saturating_sub(1);
        self.scroll_row = (self.scroll_row + 1).min(last);
    }

    pub fn scroll_up(&mut self) {
        self.scroll_row = self.scroll_row.saturating_sub(1);
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame, area: Rect, cards: &[CharacterCard]) {
        self.columns = card_columns(area.width);
        let total_rows = self.total_rows(cards.len());
        self.scroll_row = self.scroll_row.min(total_rows.saturating_sub(1));

        // An empty filtered set is an empty grid.
        if cards.is_empty() {
            return;
        }

        let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
        let row_areas = Layout::vertical(vec![Constraint::Length(CARD_HEIGHT); visible_rows])
            .split(area);
        let col_constraints = vec![Constraint::Ratio(1, self.columns as u32); self.columns];

        for (slot, row_area) in row_areas.iter().enumerate() {
            let start = (self.scroll_row + slot) * self.columns;
            if start >= cards.len() {
                break;
            }
            let cells = Layout::horizontal(col_constraints.clone()).split(*row_area);
            for (card, cell) in cards[start..].iter().take(self.columns).zip(cells.iter()) {
                render_card(frame, *cell, card);
            }
        }
    }
}

impl Default for CardGridState {
    fn default() -> Self {
        Self::new()
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &CharacterCard) {
    let block = theme::card_block(&card.title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line<'static>> = card
        .fields
        .iter()
        .map(|field| {
            Line::from(vec![
                Span::styled(
                    format!("{}: ", field.label),
                    theme::muted().add_modifier(Modifier::BOLD),
                ),
                Span::raw(field.value.clone()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::card::build_cards;
    use crate::core::catalog::CharacterCatalog;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn bundled_cards() -> Vec<CharacterCard> {
        let catalog = CharacterCatalog::bundled().unwrap();
        build_cards(catalog.iter())
    }

    #[test]
    fn test_renders_card_titles_and_fields() {
        let cards = bundled_cards();
        let mut state = CardGridState::new();
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| state.render(f, Rect::new(0, 0, 120, 30), &cards)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Ada"));
        assert!(text.contains("Class: Support"));
        assert!(text.contains("Stars: &#9733;&#9733;"));
        assert_eq!(state.columns, 3);
    }

    #[test]
    fn test_empty_grid_renders_nothing() {
        let mut state = CardGridState::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal.draw(|f| state.render(f, Rect::new(0, 0, 80, 20), &[])).unwrap();
        assert!(buffer_text(&terminal).trim().is_empty());
    }

    #[test]
    fn test_scroll_is_clamped() {
        let cards = bundled_cards();
        let mut state = CardGridState::new();
        let mut terminal = Terminal::new(TestBackend::new(50, 20)).unwrap();
        terminal.draw(|f| state.render(f, Rect::new(0, 0, 50, 20), &cards)).unwrap();
        assert_eq!(state.columns, 1);

        for _ in 0..50 {
            state.scroll_down(cards.len());
        }
        assert_eq!(state.scroll_row(), cards.len() - 1);

        state.scroll_up();
        assert_eq!(state.scroll_row(), cards.len() - 2);
        state.reset();
        assert_eq!(state.scroll_row(), 0);
    }

    #[test]
    fn test_render_clamps_after_shrink() {
        let cards = bundled_cards();
        let mut state = CardGridState::new();
        state.scroll_row = 10;
        let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
        terminal.draw(|f| state.render(f, Rect::new(0, 0, 120, 30), &cards[..2])).unwrap();
        assert_eq!(state.scroll_row(), 0);
    }

    #[test]
    fn test_default_matches_new() {
        let mut state = CardGridState::default();
        assert_eq!(state.columns, 1);
        assert_eq!(state.scroll_row(), 0);

        // One column: six cards are six rows
        for _ in 0..10 {
            state.scroll_down(6);
        }
        assert_eq!(state.scroll_row(), 5);
    }
}
