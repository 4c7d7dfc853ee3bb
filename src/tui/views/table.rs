//! Table view: name filter box above a sortable grid of normalized rows.
//!
//! `f` edits the name filter, `s` activates the Name header (cycling its
//! sort), `j`/`k` move the selection. All of this state is table-local and
//! is discarded when the user switches back to cards.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};
use tracing::debug;

use crate::core::catalog::CharacterRecord;
use crate::core::table::{
    build_rows, sort_indicator, Column, SortDirection, TableControls, TableRow, NO_RESULTS,
};
use crate::tui::theme;
use crate::tui::widgets::text_input::{InputOutcome, TextInput};

const FILTER_PLACEHOLDER: &str = "Filter names...";

/// Relative column widths, in `Column::ALL` order.
const COLUMN_WIDTHS: [u16; 8] = [18, 12, 12, 10, 12, 12, 12, 12];

pub struct TableViewState {
    controls: TableControls,
    name_filter: TextInput,
    table_state: TableState,
}

impl TableViewState {
    pub fn new() -> Self {
        Self {
            controls: TableControls::new(),
            name_filter: TextInput::new(),
            table_state: TableState::default(),
        }
    }

    /// Drop sort, filter, and selection.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    pub fn controls(&self) -> &TableControls {
        &self.controls
    }

    pub fn selected(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Rows for the current filtered set after table-level filter and sort.
    pub fn rows<'a>(
        &self,
        entries: impl IntoIterator<Item = (&'a str, &'a CharacterRecord)>,
    ) -> Vec<TableRow> {
        self.controls.apply(build_rows(entries))
    }

    /// Activate the Name header.
    pub fn toggle_name_sort(&mut self) -> Option<SortDirection> {
        let sort = self.controls.toggle_name_sort();
        debug!(sort = ?sort, "name sort toggled");
        sort
    }

    /// Route an editing key to the name filter box. Returns true if consumed.
    pub fn handle_filter_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match self.name_filter.handle_key(code, modifiers) {
            InputOutcome::Edited => {
                self.controls.set_name_filter(self.name_filter.value());
                self.table_state.select(None);
                true
            }
            InputOutcome::Moved => true,
            InputOutcome::Ignored => false,
        }
    }

    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let next = match self.table_state.selected() {
            Some(i) if i + 1 < row_count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    pub fn select_prev(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        let prev = self
            .table_state
            .selected()
            .map_or(0, |i| i.saturating_sub(1));
        self.table_state.select(Some(prev));
    }

    // ── Rendering ──────────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame, area: Rect, rows: &[TableRow], filter_focused: bool) {
        let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(area);

        let filter_block = theme::input_block("Name", filter_focused);
        let filter_inner = filter_block.inner(chunks[0]);
        frame.render_widget(filter_block, chunks[0]);
        frame.render_widget(
            Paragraph::new(self.name_filter.render_line(FILTER_PLACEHOLDER, filter_focused)),
            filter_inner,
        );

        self.render_grid(frame, chunks[1], rows);
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, rows: &[TableRow]) {
        match self.table_state.selected() {
            Some(i) if rows.is_empty() || i >= rows.len() => {
                self.table_state.select(rows.len().checked_sub(1));
            }
            _ => {}
        }

        let header = Row::new(Column::ALL.iter().map(|column| {
            let label = match column {
                Column::Name => format!(
                    "{} {}",
                    column.header(),
                    sort_indicator(self.controls.name_sort())
                ),
                other => other.header().to_string(),
            };
            Cell::from(label).style(theme::heading())
        }))
        .height(1)
        .bottom_margin(1);

        let body = rows.iter().map(|row| {
            Row::new(Column::ALL.iter().map(|&column| {
                let cell = Cell::from(row.cell(column).to_string());
                if column == Column::Stars {
                    cell.style(Style::default().fg(theme::STARS))
                } else {
                    cell
                }
            }))
        });

        let widths = COLUMN_WIDTHS.map(Constraint::Percentage);
        let block = Block::default()
            .title(format!(" Characters ({}) ", rows.len()))
            .borders(Borders::ALL)
            .border_style(theme::muted());
        let grid_inner = block.inner(area);

        let table = Table::new(body, widths)
            .header(header)
            .block(block)
            .row_highlight_style(theme::row_highlight())
            .highlight_symbol("▸ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);

        if rows.is_empty() {
            // Header row plus its bottom margin sit above the placeholder.
            let placeholder_area = Rect {
                y: grid_inner.y.saturating_add(2),
                height: grid_inner.height.saturating_sub(2),
                ..grid_inner
            };
            frame.render_widget(
                Paragraph::new(Line::styled(NO_RESULTS, theme::muted())).alignment(Alignment::Center),
                placeholder_area,
            );
        }
    }
}

impl Default for TableViewState {
    fn default() -> Self {
        Self::new()
    }
}
