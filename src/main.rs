use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use character_explorer::config::AppConfig;
use character_explorer::core::catalog::CharacterCatalog;
use character_explorer::core::logging;
use character_explorer::tui::app::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, config_origin) = AppConfig::load();

    // Initialize logging
    let _log_guard = logging::init(&config.log);
    log::info!("{} v{} starting", character_explorer::NAME, character_explorer::VERSION);
    config_origin.report();

    // Load before touching the terminal so errors print normally
    let catalog = CharacterCatalog::load(&config.data).context("failed to load character catalog")?;
    let mut app = AppState::new(Arc::new(catalog));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    if config.tui.mouse_enabled {
        execute!(stdout, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let result = app
        .run(&mut terminal, Duration::from_millis(config.tui.tick_rate_ms))
        .await;

    // Restore terminal
    disable_raw_mode()?;
    if config.tui.mouse_enabled {
        execute!(terminal.backend_mut(), DisableMouseCapture)?;
    }
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("terminal event loop failed")?;
    log::info!("shutting down");
    Ok(())
}
