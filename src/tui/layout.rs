//! Root layout: title row, controls row, body, status bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the controls row (bordered search box and buttons).
pub const CONTROLS_HEIGHT: u16 = 3;
/// Below this body width the card grid shows a single column.
pub const TWO_COLUMN_THRESHOLD: u16 = 60;
/// Below this body width the card grid shows two columns.
pub const THREE_COLUMN_THRESHOLD: u16 = 100;

/// Computed layout regions for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub header: Rect,
    pub controls: Rect,
    pub body: Rect,
    pub status: Rect,
}

impl AppLayout {
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::vertical([
            Constraint::Length(1),               // Title
            Constraint::Length(CONTROLS_HEIGHT), // Search + filters + view switch
            Constraint::Min(1),                  // Cards or table
            Constraint::Length(1),               // Status bar
        ])
        .split(area);

        AppLayout {
            header: rows[0],
            controls: rows[1],
            body: rows[2],
            status: rows[3],
        }
    }

    /// Split the controls row into search box, color buttons, and view switch.
    pub fn controls_split(controls: Rect) -> (Rect, Rect, Rect) {
        let cols = Layout::horizontal([
            Constraint::Min(20),
            Constraint::Length(34),
            Constraint::Length(18),
        ])
        .split(controls);
        (cols[0], cols[1], cols[2])
    }
}

/// Number of card columns for a given body width.
pub fn card_columns(width: u16) -> usize {
    if width < TWO_COLUMN_THRESHOLD {
        1
    } else if width < THREE_COLUMN_THRESHOLD {
        2
    } else {
        3
    }
}
