use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tracing::{debug, info};

use super::events::{Action, AppEvent, InputFocus, StatusMessage};
use super::layout::AppLayout;
use super::theme;
use super::views::cards::CardGridState;
use super::views::table::TableViewState;
use super::widgets::text_input::{InputOutcome, TextInput};
use crate::core::card::build_cards;
use crate::core::catalog::CharacterCatalog;
use crate::core::explorer::ExplorerState;
use crate::core::filter::ColorFilter;
use crate::core::table::SortDirection;

const SEARCH_PLACEHOLDER: &str = "Search characters...";

/// Central application state (Elm architecture).
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Which input box, if any, owns typed keys.
    pub focus: InputFocus,
    /// Search text, color filter, view toggle, and the filtered set.
    pub explorer: ExplorerState,
    search: TextInput,
    cards: CardGridState,
    table: TableViewState,
    /// Whether the help modal is open.
    pub show_help: bool,
    status: Option<StatusMessage>,
}

impl AppState {
    pub fn new(catalog: Arc<CharacterCatalog>) -> Self {
        Self {
            running: true,
            focus: InputFocus::Browse,
            explorer: ExplorerState::new(catalog),
            search: TextInput::new(),
            cards: CardGridState::new(),
            table: TableViewState::new(),
            show_help: false,
            status: None,
        }
    }

    // ── Elm event loop ──────────────────────────────────────────────────

    /// Main event loop: render → select → update → loop.
    pub async fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        let mut tick_interval = tokio::time::interval(tick_rate);
        let mut event_stream = EventStream::new();

        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            tokio::select! {
                _ = tick_interval.tick() => {
                    self.handle_event(AppEvent::Tick);
                }
                maybe_event = event_stream.next() => match maybe_event {
                    Some(Ok(crossterm_event)) => self.handle_event(AppEvent::Input(crossterm_event)),
                    Some(Err(e)) => return Err(e),
                    None => self.running = false,
                },
            }
        }

        info!("event loop finished");
        Ok(())
    }

    // ── Event handling ──────────────────────────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => self.on_tick(),
            AppEvent::Input(input) => self.handle_input(&input),
        }
    }

    fn handle_input(&mut self, event: &Event) {
        if let Event::Mouse(mouse) = event {
            match mouse.kind {
                MouseEventKind::ScrollDown => self.handle_action(Action::MoveDown),
                MouseEventKind::ScrollUp => self.handle_action(Action::MoveUp),
                _ => {}
            }
            return;
        }

        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return;
        };

        // Ctrl+C quits from anywhere
        if *modifiers == KeyModifiers::CONTROL && *code == KeyCode::Char('c') {
            self.handle_action(Action::Quit);
            return;
        }

        // Priority 1: Help modal
        if self.show_help {
            if matches!(code, KeyCode::Esc | KeyCode::Char('?')) {
                self.handle_action(Action::CloseHelp);
            }
            return;
        }

        // Priority 2: Active input box
        match self.focus {
            InputFocus::Search => {
                self.handle_search_key(*code, *modifiers);
                return;
            }
            InputFocus::NameFilter => {
                self.handle_name_filter_key(*code, *modifiers);
                return;
            }
            InputFocus::Browse => {}
        }

        // Priority 3: Browse keybindings
        if let Some(action) = self.map_browse_input(*code, *modifiers) {
            self.handle_action(action);
        }
    }

    fn handle_search_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Tab) {
            self.focus = InputFocus::Browse;
            return;
        }
        if self.search.handle_key(code, modifiers) == InputOutcome::Edited {
            self.explorer.set_search_term(self.search.value());
            self.cards.reset();
        }
    }

    fn handle_name_filter_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Tab) {
            self.focus = InputFocus::Browse;
            return;
        }
        if self.table.handle_filter_key(code, modifiers) {
            return;
        }
        // Keys the box does not use still steer the table selection.
        match code {
            KeyCode::Down => self.handle_action(Action::MoveDown),
            KeyCode::Up => self.handle_action(Action::MoveUp),
            _ => {}
        }
    }

    fn map_browse_input(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        if !matches!(modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
            return None;
        }

        match code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('?') => Some(Action::ShowHelp),
            KeyCode::Char('/') => Some(Action::FocusSearch),
            KeyCode::Char('f') if self.explorer.is_table_view() => Some(Action::FocusNameFilter),
            KeyCode::Char('s') if self.explorer.is_table_view() => Some(Action::CycleNameSort),
            KeyCode::Char('v') => Some(Action::ToggleView),
            KeyCode::Char('a') | KeyCode::Char('1') => Some(Action::SetColorFilter(ColorFilter::All)),
            KeyCode::Char('g') | KeyCode::Char('2') => {
                Some(Action::SetColorFilter(ColorFilter::Green))
            }
            KeyCode::Char('d') | KeyCode::Char('3') => {
                Some(Action::SetColorFilter(ColorFilter::Dark))
            }
            KeyCode::Char('l') | KeyCode::Char('4') => {
                Some(Action::SetColorFilter(ColorFilter::Light))
            }
            KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
            _ => None,
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.running = false,
            Action::ShowHelp => self.show_help = true,
            Action::CloseHelp => self.show_help = false,
            Action::FocusSearch => self.focus = InputFocus::Search,
            Action::FocusNameFilter => {
                if self.explorer.is_table_view() {
                    self.focus = InputFocus::NameFilter;
                }
            }
            Action::SetColorFilter(filter) => {
                self.explorer.set_color_filter(filter);
                self.cards.reset();
                debug!(color = filter.token(), "color filter selected");
            }
            Action::ToggleView => {
                let to_table = !self.explorer.is_table_view();
                self.explorer.set_is_table_view(to_table);
                if !to_table {
                    // Table-local sort/filter live only while the table is shown.
                    self.table.reset();
                    if self.focus == InputFocus::NameFilter {
                        self.focus = InputFocus::Browse;
                    }
                }
            }
            Action::CycleNameSort => {
                let message = match self.table.toggle_name_sort() {
                    Some(SortDirection::Ascending) => "Sorted by name, ascending",
                    Some(SortDirection::Descending) => "Sorted by name, descending",
                    None => "Name sort cleared",
                };
                self.status = Some(StatusMessage::new(message));
            }
            Action::MoveDown => {
                if self.explorer.is_table_view() {
                    let count = self.table.rows(self.explorer.filtered()).len();
                    self.table.select_next(count);
                } else {
                    self.cards.scroll_down(self.explorer.filtered_len());
                }
            }
            Action::MoveUp => {
                if self.explorer.is_table_view() {
                    let count = self.table.rows(self.explorer.filtered()).len();
                    self.table.select_prev(count);
                } else {
                    self.cards.scroll_up();
                }
            }
        }
    }

    /// Tick: age the status message.
    fn on_tick(&mut self) {
        if let Some(status) = self.status.as_mut() {
            status.ttl_ticks = status.ttl_ticks.saturating_sub(1);
            if status.ttl_ticks == 0 {
                self.status = None;
            }
        }
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status.as_ref().map(|s| s.text.as_str())
    }

    pub fn table(&self) -> &TableViewState {
        &self.table
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let layout = AppLayout::compute(area);

        self.render_header(frame, layout.header);
        self.render_controls(frame, layout.controls);
        self.render_body(frame, layout.body);
        self.render_status_bar(frame, layout.status);

        if self.show_help {
            self.render_help_modal(frame, area);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(" Character Explorer ", theme::title()),
            Span::styled(format!("v{}", crate::VERSION), theme::dim()),
        ]);
        frame.render_widget(Paragraph::new(header), area);
    }

    fn render_controls(&self, frame: &mut Frame, area: Rect) {
        let (search_area, buttons_area, switch_area) = AppLayout::controls_split(area);

        let search_focused = self.focus == InputFocus::Search;
        let search_block = theme::input_block("Search", search_focused);
        let search_inner = search_block.inner(search_area);
        frame.render_widget(search_block, search_area);
        frame.render_widget(
            Paragraph::new(self.search.render_line(SEARCH_PLACEHOLDER, search_focused)),
            search_inner,
        );

        let active = self.explorer.color_filter();
        let mut buttons: Vec<Span<'static>> = Vec::new();
        for filter in ColorFilter::ALL {
            buttons.push(Span::raw(" "));
            buttons.push(Span::styled(
                format!(" {} ", filter.label()),
                theme::filter_button(filter, filter == active),
            ));
        }
        let buttons_block = theme::input_block("Color", false);
        let buttons_inner = buttons_block.inner(buttons_area);
        frame.render_widget(buttons_block, buttons_area);
        frame.render_widget(Paragraph::new(Line::from(buttons)), buttons_inner);

        let (knob, label) = if self.explorer.is_table_view() {
            ("[ ●]", "Table View")
        } else {
            ("[● ]", "Card View")
        };
        let switch_block = theme::input_block("View", false);
        let switch_inner = switch_block.inner(switch_area);
        frame.render_widget(switch_block, switch_area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled(knob, Style::default().fg(theme::PRIMARY_LIGHT)),
                Span::raw(" "),
                Span::styled(label, Style::default().fg(theme::TEXT)),
            ])),
            switch_inner,
        );
    }

    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        if self.explorer.is_table_view() {
            let rows = self.table.rows(self.explorer.filtered());
            let filter_focused = self.focus == InputFocus::NameFilter;
            self.table.render(frame, area, &rows, filter_focused);
        } else {
            let cards = build_cards(self.explorer.filtered());
            self.cards.render(frame, area, &cards);
        }
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let mode = if self.focus.is_editing() {
            Span::styled(format!(" {} ", self.focus.label()), theme::editing_badge())
        } else {
            Span::raw("")
        };

        let mut spans = vec![
            Span::styled(" EXPLORER ", theme::brand_badge()),
            Span::raw(" "),
            mode,
            Span::raw(" "),
            Span::styled(
                format!(
                    "{}/{} characters",
                    self.explorer.filtered_len(),
                    self.explorer.catalog().len()
                ),
                Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" │ "),
        ];

        if let Some(message) = self.status_message() {
            spans.push(Span::styled(message.to_string(), Style::default().fg(theme::ACCENT)));
            spans.push(Span::raw(" │ "));
        }

        spans.extend([
            Span::styled("/", theme::key_hint()),
            Span::raw(":search "),
            Span::styled("v", theme::key_hint()),
            Span::raw(":view "),
            Span::styled("?", theme::key_hint()),
            Span::raw(":help "),
            Span::styled("q", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_help_modal(&self, frame: &mut Frame, area: Rect) {
        let modal = centered_rect(60, 80, area);

        let keybindings = [
            ("Global:", ""),
            ("q / Ctrl+C", "Quit"),
            ("?", "Toggle this help"),
            ("/", "Edit search"),
            ("Esc / Enter / Tab", "Leave the search or filter box"),
            ("Ctrl+U", "Clear the box being edited"),
            ("a / g / d / l", "Color filter All / Green / Dark / Light"),
            ("1-4", "Same as a / g / d / l"),
            ("v", "Switch Card View / Table View"),
            ("j/k", "Scroll cards / move table selection"),
            ("", ""),
            ("Table View:", ""),
            ("f", "Edit name filter"),
            ("s", "Sort by name (asc, desc, off)"),
        ];

        let mut lines = vec![
            Line::raw(""),
            Line::from(Span::styled(" Keybindings", theme::title())),
            Line::raw(""),
        ];

        for (key, desc) in keybindings {
            if key.is_empty() {
                lines.push(Line::raw(""));
            } else if desc.is_empty() {
                lines.push(Line::from(Span::styled(format!("  {key}"), theme::title())));
            } else {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{key:<20}"),
                        Style::default()
                            .fg(theme::PRIMARY_LIGHT)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(desc),
                ]));
            }
        }

        let block = Block::default()
            .title(" Help ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT));

        frame.render_widget(Clear, modal);
        frame.render_widget(Paragraph::new(lines).block(block), modal);
    }
}

/// Calculate a centered rect using percentage of parent area.
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
