//! Priority bar chart

use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::*;
use ratatui::{TerminalOptions, Viewport};
use std::io;

use super::styles::Theme;
use crate::task::PriorityCounts;

/// Rows used when drawing the chart below the shell prompt
const INLINE_HEIGHT: u16 = 14;
const BAR_WIDTH: u16 = 9;
const BAR_GAP: u16 = 3;

pub fn priority_bar_chart(counts: &PriorityCounts, theme: &Theme) -> BarChart<'static> {
    let bars: Vec<Bar<'static>> = counts
        .iter()
        .map(|(priority, n)| {
            let color = theme.priority(priority);
            Bar::default()
                .value(n as u64)
                .label(Line::from(priority.label()))
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(theme.background).bg(color).bold())
        })
        .collect();

    BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Tasks by priority ")
                .title_style(Style::default().fg(theme.title).bold()),
        )
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(BAR_GAP)
}

/// Draw the chart inline on stdout, leaving it in the scrollback
pub fn draw_inline(counts: &PriorityCounts) -> Result<()> {
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::with_options(
        backend,
        TerminalOptions {
            viewport: Viewport::Inline(INLINE_HEIGHT),
        },
    )?;

    let theme = Theme::default();
    terminal.draw(|frame| {
        let area = frame.area();
        frame.render_widget(priority_bar_chart(counts, &theme), area);
    })?;
    println!();
    Ok(())
}
