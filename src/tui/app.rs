//! Main TUI application

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::prelude::*;
use std::io::Stdout;
use std::time::Duration;

use super::board::BoardView;
use super::styles::Theme;
use crate::task::{Priority, TaskStore};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

pub struct App<'s> {
    board: BoardView<'s>,
    should_quit: bool,
    theme: Theme,
}

impl<'s> App<'s> {
    pub fn new(store: &'s mut TaskStore, default_priority: Priority) -> Self {
        Self {
            board: BoardView::new(store, default_priority),
            should_quit: false,
            theme: Theme::default(),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        terminal.clear()?;
        terminal.draw(|f| self.render(f))?;

        loop {
            if event::poll(POLL_INTERVAL)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key(key);
                        terminal.draw(|f| self.render(f))?;
                    }
                    Event::Resize(_, _) => {
                        terminal.draw(|f| self.render(f))?;
                    }
                    _ => {}
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn render(&mut self, frame: &mut Frame) {
        self.board.render(frame, frame.area(), &self.theme);
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_quit = true;
            return;
        }

        if let Some(action) = self.board.handle_key(key) {
            match action {
                Action::Quit => self.should_quit = true,
                Action::Refresh => {
                    self.board.refresh();
                    let count = self.board.rows().len();
                    self.board.set_info(format!("Refreshed, {} task(s)", count));
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Refresh,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits_even_with_dialog_open() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
        let mut app = App::new(&mut store, Priority::Medium);

        app.handle_key(key(KeyCode::Char('n'), KeyModifiers::NONE));
        assert!(app.board.has_dialog());
        app.handle_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_q_quits() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
        let mut app = App::new(&mut store, Priority::Medium);

        app.handle_key(key(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);
    }

    #[test]
    fn test_refresh_keeps_running() {
        let temp = TempDir::new().unwrap();
        let mut store = TaskStore::open(temp.path().join("tasks.csv")).unwrap();
        store.add_task("Water plants", "", "Low").unwrap();
        let mut app = App::new(&mut store, Priority::Medium);

        app.handle_key(key(KeyCode::Char('r'), KeyModifiers::NONE));
        assert!(!app.should_quit);
        assert_eq!(app.board.rows().len(), 1);
    }
}
