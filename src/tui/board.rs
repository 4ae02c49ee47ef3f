//! Board view - task table, add form, delete confirmation and chart panel

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::app::Action;
use super::chart::priority_bar_chart;
use super::dialogs::{ConfirmDialog, DialogResult, NewTaskData, NewTaskDialog};
use super::styles::Theme;
use crate::task::{Priority, Task, TaskStore};

#[derive(Debug, Clone, PartialEq)]
enum StatusMessage {
    Info(String),
    Error(String),
}

pub struct BoardView<'s> {
    store: &'s mut TaskStore,
    /// Snapshot of `store.list_tasks()`, in display order
    rows: Vec<Task>,
    table_state: TableState,
    default_priority: Priority,

    // Dialogs
    new_dialog: Option<NewTaskDialog>,
    confirm_dialog: Option<ConfirmDialog>,

    show_chart: bool,
    status: Option<StatusMessage>,
}

impl<'s> BoardView<'s> {
    pub fn new(store: &'s mut TaskStore, default_priority: Priority) -> Self {
        let mut view = Self {
            store,
            rows: Vec::new(),
            table_state: TableState::default(),
            default_priority,
            new_dialog: None,
            confirm_dialog: None,
            show_chart: false,
            status: None,
        };
        view.refresh();
        view
    }

    /// Re-read rows from the store, keeping the cursor in range
    pub fn refresh(&mut self) {
        self.rows = self.store.list_tasks().into_iter().cloned().collect();

        let selected = match self.table_state.selected() {
            _ if self.rows.is_empty() => None,
            Some(i) => Some(i.min(self.rows.len() - 1)),
            None => Some(0),
        };
        self.table_state.select(selected);
    }

    pub fn rows(&self) -> &[Task] {
        &self.rows
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.table_state.selected().and_then(|i| self.rows.get(i))
    }

    pub fn has_dialog(&self) -> bool {
        self.new_dialog.is_some() || self.confirm_dialog.is_some()
    }

    pub fn set_info(&mut self, message: impl Into<String>) {
        self.status = Some(StatusMessage::Info(message.into()));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if let Some(dialog) = &mut self.new_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.new_dialog = None;
                }
                DialogResult::Submit(data) => self.create_task(data),
            }
            return None;
        }

        if let Some(dialog) = &mut self.confirm_dialog {
            match dialog.handle_key(key) {
                DialogResult::Continue => {}
                DialogResult::Cancel => {
                    self.confirm_dialog = None;
                }
                DialogResult::Submit(id) => {
                    self.confirm_dialog = None;
                    self.delete_task(id);
                }
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => return Some(Action::Quit),
            KeyCode::Char('n') | KeyCode::Char('a') => {
                self.new_dialog = Some(NewTaskDialog::new(self.default_priority));
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some((id, title)) = self.selected_task().map(|t| (t.id, t.title.clone())) {
                    let message = format!("Delete task {} \"{}\"? This cannot be undone.", id, title);
                    self.confirm_dialog = Some(ConfirmDialog::new("Delete Task", &message, id));
                }
            }
            KeyCode::Char('r') | KeyCode::F(5) => return Some(Action::Refresh),
            KeyCode::Char('c') => {
                self.show_chart = !self.show_chart;
            }
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Home | KeyCode::Char('g') => {
                if !self.rows.is_empty() {
                    self.table_state.select(Some(0));
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                if !self.rows.is_empty() {
                    self.table_state.select(Some(self.rows.len() - 1));
                }
            }
            _ => {}
        }

        None
    }

    fn move_cursor(&mut self, delta: i32) {
        if self.rows.is_empty() {
            return;
        }

        let current = self.table_state.selected().unwrap_or(0);
        let new_cursor = if delta < 0 {
            current.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (current + delta as usize).min(self.rows.len() - 1)
        };
        self.table_state.select(Some(new_cursor));
    }

    fn create_task(&mut self, data: NewTaskData) {
        match self
            .store
            .add_task(&data.title, &data.description, data.priority)
        {
            Ok(id) => {
                self.new_dialog = None;
                self.refresh();
                if let Some(pos) = self.rows.iter().position(|t| t.id == id) {
                    self.table_state.select(Some(pos));
                }
                self.set_info(format!("Added task {}", id));
            }
            Err(e) => {
                tracing::error!("Failed to add task: {}", e);
                if let Some(dialog) = &mut self.new_dialog {
                    dialog.set_error(e.to_string());
                }
            }
        }
    }

    fn delete_task(&mut self, id: u64) {
        match self.store.delete_task(id) {
            Ok(true) => {
                self.refresh();
                self.set_info(format!("Deleted task {}", id));
            }
            Ok(false) => {
                self.refresh();
                self.status = Some(StatusMessage::Error(format!("Task {} no longer exists", id)));
            }
            Err(e) => {
                tracing::error!("Failed to delete task {}: {}", id, e);
                self.status = Some(StatusMessage::Error(e.to_string()));
            }
        }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        if self.show_chart {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(main_chunks[0]);
            self.render_table(frame, chunks[0], theme);
            self.render_chart(frame, chunks[1], theme);
        } else {
            self.render_table(frame, main_chunks[0], theme);
        }

        self.render_status_bar(frame, main_chunks[1], theme);

        if let Some(dialog) = &self.new_dialog {
            dialog.render(frame, area, theme);
        }

        if let Some(dialog) = &self.confirm_dialog {
            dialog.render(frame, area, theme);
        }
    }

    fn render_table(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border))
            .title(format!(" Tasks [{}] ", self.store.path().display()))
            .title_style(Style::default().fg(theme.title).bold());

        if self.rows.is_empty() {
            let inner = block.inner(area);
            frame.render_widget(block, area);
            let empty_text = vec![
                Line::from(""),
                Line::from("No tasks yet").style(Style::default().fg(theme.dimmed)),
                Line::from(""),
                Line::from("Press 'n' to add one").style(Style::default().fg(theme.hint)),
                Line::from("or 'todo add <title>'").style(Style::default().fg(theme.hint)),
            ];
            frame.render_widget(Paragraph::new(empty_text).alignment(Alignment::Center), inner);
            return;
        }

        let header = Row::new(["ID", "Title", "Priority", "Description"])
            .style(Style::default().fg(theme.accent).bold())
            .bottom_margin(1);

        let rows: Vec<Row> = self
            .rows
            .iter()
            .map(|task| {
                let color = theme.priority(task.priority);
                Row::new(vec![
                    Cell::from(task.id.to_string()),
                    Cell::from(task.title.clone()),
                    Cell::from(task.priority.label()).style(Style::default().fg(color).bold()),
                    Cell::from(task.description.clone()),
                ])
                .style(Style::default().fg(theme.text))
            })
            .collect();

        let widths = [
            Constraint::Length(6),
            Constraint::Percentage(35),
            Constraint::Length(9),
            Constraint::Min(10),
        ];

        let table = Table::new(rows, widths)
            .header(header)
            .block(block)
            .row_highlight_style(Style::default().bg(theme.selection).bold())
            .highlight_symbol("▶ ");

        frame.render_stateful_widget(table, area, &mut self.table_state);
    }

    fn render_chart(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let counts = self.store.priority_counts();
        if counts.total() == 0 {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Tasks by priority ");
            let hint = Paragraph::new("Nothing to chart yet")
                .style(Style::default().fg(theme.dimmed))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(hint, area);
            return;
        }
        frame.render_widget(priority_bar_chart(&counts, theme), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_style = Style::default().fg(theme.accent).bold();
        let desc_style = Style::default().fg(theme.dimmed);
        let sep_style = Style::default().fg(theme.border);

        let hints: &[(&str, &str)] = if self.has_dialog() {
            &[("Esc", "Cancel")]
        } else {
            &[
                ("j/k", "Navigate"),
                ("n", "New"),
                ("d", "Delete"),
                ("r", "Refresh"),
                ("c", "Chart"),
                ("q", "Quit"),
            ]
        };

        let mut spans = Vec::new();
        for (i, (key, desc)) in hints.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("│", sep_style));
            }
            spans.push(Span::styled(format!(" {}", key), key_style));
            spans.push(Span::styled(format!(" {} ", desc), desc_style));
        }

        match &self.status {
            Some(StatusMessage::Info(msg)) => {
                spans.push(Span::styled("│ ", sep_style));
                spans.push(Span::styled(msg.clone(), Style::default().fg(theme.success)));
            }
            Some(StatusMessage::Error(msg)) => {
                spans.push(Span::styled("│ ", sep_style));
                spans.push(Span::styled(msg.clone(), Style::default().fg(theme.error)));
            }
            None => {}
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.selection));
        frame.render_widget(status, area);
    }
}
