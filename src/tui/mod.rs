//! Terminal User Interface module

mod app;
mod board;
pub mod chart;
pub mod dialogs;
mod styles;

pub use app::*;
pub use styles::Theme;

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;

use crate::config::Config;
use crate::task::TaskStore;

/// Run the board until the user quits
pub fn run(store: &mut TaskStore, config: &Config) -> Result<()> {
    tracing::debug!("Opening board for {}", store.path().display());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(store, config.board.default_priority());
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}
