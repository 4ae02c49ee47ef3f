//! Priority aggregation and chart capability detection

use serde::Serialize;
use std::io::IsTerminal;

use super::model::{Priority, Task};

/// Number of tasks per priority
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PriorityCounts {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl PriorityCounts {
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            *counts.slot_mut(task.priority) += 1;
        }
        counts
    }

    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }

    pub fn total(&self) -> usize {
        self.high + self.medium + self.low
    }

    /// Counts in display order: High, Medium, Low
    pub fn iter(&self) -> impl Iterator<Item = (Priority, usize)> + '_ {
        Priority::DISPLAY_ORDER
            .into_iter()
            .map(move |p| (p, self.get(p)))
    }

    fn slot_mut(&mut self, priority: Priority) -> &mut usize {
        match priority {
            Priority::High => &mut self.high,
            Priority::Medium => &mut self.medium,
            Priority::Low => &mut self.low,
        }
    }
}

/// Whether a bar chart can be drawn in the current environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartSupport {
    Available,
    Unavailable(String),
}

impl ChartSupport {
    /// Charts need an interactive terminal on stdout
    pub fn detect() -> Self {
        let term = std::env::var("TERM").ok();
        Self::from_environment(std::io::stdout().is_terminal(), term.as_deref())
    }

    pub fn from_environment(stdout_is_tty: bool, term: Option<&str>) -> Self {
        if !stdout_is_tty {
            return Self::Unavailable("output is not an interactive terminal".to_string());
        }
        if term == Some("dumb") {
            return Self::Unavailable("terminal does not support drawing (TERM=dumb)".to_string());
        }
        Self::Available
    }
}
