use crate::core::filter::ColorFilter;

/// Events flowing through the Elm-architecture event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Periodic tick for status message expiry.
    Tick,
    /// Raw terminal input (keyboard/mouse/resize).
    Input(crossterm::event::Event),
}

/// High-level actions resolved from browse-mode key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // Inputs
    FocusSearch,
    FocusNameFilter,

    // Explorer state
    SetColorFilter(ColorFilter),
    ToggleView,
    CycleNameSort,

    // Navigation
    MoveDown,
    MoveUp,

    // Modals
    ShowHelp,
    CloseHelp,

    Quit,
}

/// Which element receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    /// Keys are commands.
    #[default]
    Browse,
    /// Keys edit the search box.
    Search,
    /// Keys edit the table's name filter box.
    NameFilter,
}

impl InputFocus {
    pub fn label(self) -> &'static str {
        match self {
            InputFocus::Browse => "BROWSE",
            InputFocus::Search => "SEARCH",
            InputFocus::NameFilter => "FILTER",
        }
    }

    pub fn is_editing(self) -> bool {
        self != InputFocus::Browse
    }
}

/// A short-lived message in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    /// Ticks remaining before it disappears.
    pub ttl_ticks: u32,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ttl_ticks: 12,
        }
    }
}
