//! New task form

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::*;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

use super::DialogResult;
use crate::task::Priority;
use crate::tui::styles::Theme;

const FIELD_TITLE: usize = 0;
const FIELD_DESCRIPTION: usize = 1;
const FIELD_PRIORITY: usize = 2;
const FIELD_COUNT: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct NewTaskData {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

pub struct NewTaskDialog {
    title: Input,
    description: Input,
    priority: Priority,
    focused_field: usize,
    error_message: Option<String>,
}

impl NewTaskDialog {
    pub fn new(default_priority: Priority) -> Self {
        Self {
            title: Input::default(),
            description: Input::default(),
            priority: default_priority,
            focused_field: FIELD_TITLE,
            error_message: None,
        }
    }

    pub fn set_error(&mut self, error: String) {
        self.error_message = Some(error);
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogResult<NewTaskData> {
        match key.code {
            KeyCode::Esc => {
                self.error_message = None;
                DialogResult::Cancel
            }
            KeyCode::Enter => {
                let title = self.title.value().trim();
                if title.is_empty() {
                    self.error_message = Some("Please enter a title".to_string());
                    self.focused_field = FIELD_TITLE;
                    return DialogResult::Continue;
                }
                self.error_message = None;
                DialogResult::Submit(NewTaskData {
                    title: title.to_string(),
                    description: self.description.value().trim().to_string(),
                    priority: self.priority,
                })
            }
            KeyCode::Tab | KeyCode::Down => {
                self.focused_field = (self.focused_field + 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.focused_field = (self.focused_field + FIELD_COUNT - 1) % FIELD_COUNT;
                DialogResult::Continue
            }
            KeyCode::Left if self.focused_field == FIELD_PRIORITY => {
                self.priority = self.priority.cycle_prev();
                DialogResult::Continue
            }
            KeyCode::Right | KeyCode::Char(' ') if self.focused_field == FIELD_PRIORITY => {
                self.priority = self.priority.cycle_next();
                DialogResult::Continue
            }
            KeyCode::Char('1') if self.focused_field == FIELD_PRIORITY => {
                self.priority = Priority::High;
                DialogResult::Continue
            }
            KeyCode::Char('2') if self.focused_field == FIELD_PRIORITY => {
                self.priority = Priority::Medium;
                DialogResult::Continue
            }
            KeyCode::Char('3') if self.focused_field == FIELD_PRIORITY => {
                self.priority = Priority::Low;
                DialogResult::Continue
            }
            _ => {
                if let Some(input) = self.current_input_mut() {
                    input.handle_event(&crossterm::event::Event::Key(key));
                    self.error_message = None;
                }
                DialogResult::Continue
            }
        }
    }

    fn current_input_mut(&mut self) -> Option<&mut Input> {
        match self.focused_field {
            FIELD_TITLE => Some(&mut self.title),
            FIELD_DESCRIPTION => Some(&mut self.description),
            _ => None,
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let dialog_area = super::centered_rect(area, 64, 12);
        frame.render_widget(Clear, dialog_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .title(" New Task ")
            .title_style(Style::default().fg(theme.title).bold());

        let inner = block.inner(dialog_area);
        frame.render_widget(block, dialog_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(1),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            "Title:      ",
            &self.title,
            self.focused_field == FIELD_TITLE,
            theme,
        );
        render_text_field(
            frame,
            chunks[1],
            "Description:",
            &self.description,
            self.focused_field == FIELD_DESCRIPTION,
            theme,
        );
        self.render_priority(frame, chunks[2], theme);

        if let Some(error) = &self.error_message {
            let line = Line::from(Span::styled(error.as_str(), Style::default().fg(theme.error)));
            frame.render_widget(Paragraph::new(line), chunks[3]);
        }

        let hint = Line::from(vec![
            Span::styled("Tab", Style::default().fg(theme.hint)),
            Span::raw(" next field  "),
            Span::styled("←/→", Style::default().fg(theme.hint)),
            Span::raw(" priority  "),
            Span::styled("Enter", Style::default().fg(theme.hint)),
            Span::raw(" add  "),
            Span::styled("Esc", Style::default().fg(theme.hint)),
            Span::raw(" cancel"),
        ]);
        frame.render_widget(Paragraph::new(hint), chunks[4]);
    }

    fn render_priority(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let is_focused = self.focused_field == FIELD_PRIORITY;
        let label_style = if is_focused {
            Style::default().fg(theme.accent).underlined()
        } else {
            Style::default().fg(theme.text)
        };

        let mut spans = vec![Span::styled("Priority:   ", label_style), Span::raw(" ")];
        for p in Priority::DISPLAY_ORDER {
            let style = if p == self.priority {
                Style::default()
                    .fg(theme.background)
                    .bg(theme.priority(p))
                    .bold()
            } else {
                Style::default().fg(theme.dimmed)
            };
            spans.push(Span::styled(format!(" {} ", p.label()), style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

/// Label followed by the input value, with an inverse-video cursor when focused
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    input: &Input,
    is_focused: bool,
    theme: &Theme,
) {
    let (label_style, value_style) = if is_focused {
        (
            Style::default().fg(theme.accent).underlined(),
            Style::default().fg(theme.accent),
        )
    } else {
        (Style::default().fg(theme.text), Style::default().fg(theme.text))
    };

    let value = input.value();
    let mut spans = vec![Span::styled(label, label_style), Span::raw(" ")];

    if is_focused {
        let cursor_pos = input.cursor();
        let cursor_style = Style::default().fg(theme.background).bg(theme.accent);

        let before: String = value.chars().take(cursor_pos).collect();
        let at_cursor: String = value
            .chars()
            .nth(cursor_pos)
            .map(|c| c.to_string())
            .unwrap_or_else(|| " ".to_string());
        let after: String = value.chars().skip(cursor_pos + 1).collect();

        spans.push(Span::styled(before, value_style));
        spans.push(Span::styled(at_cursor, cursor_style));
        spans.push(Span::styled(after, value_style));
    } else {
        spans.push(Span::styled(value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
