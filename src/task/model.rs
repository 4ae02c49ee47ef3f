//! Task data model

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Task priority
///
/// Closed set with total order `High > Medium > Low`. Raw input never fails to
/// convert: anything unrecognized becomes `Low`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    #[default]
    Low,
}

impl Priority {
    /// Fixed display order used by listings and charts
    pub const DISPLAY_ORDER: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parse priority from text, falling back to `Low` for anything unknown
    pub fn normalize(raw: &str) -> Self {
        Self::parse(raw).unwrap_or(Self::Low)
    }

    /// Parse priority from text
    ///
    /// Accepts the canonical labels in any case and the labels written by the
    /// Persian-language version of the tool.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "high" | "بالا" => Some(Self::High),
            "medium" | "متوسط" => Some(Self::Medium),
            "low" | "پایین" => Some(Self::Low),
            _ => None,
        }
    }

    /// Canonical label, as written to the task file
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }

    /// Sort rank (higher sorts first)
    pub fn rank(&self) -> u8 {
        match self {
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }

    /// Next priority in display order, wrapping around
    pub fn cycle_next(&self) -> Self {
        match self {
            Self::High => Self::Medium,
            Self::Medium => Self::Low,
            Self::Low => Self::High,
        }
    }

    /// Previous priority in display order, wrapping around
    pub fn cycle_prev(&self) -> Self {
        match self {
            Self::High => Self::Low,
            Self::Medium => Self::High,
            Self::Low => Self::Medium,
        }
    }
}

impl From<&str> for Priority {
    fn from(raw: &str) -> Self {
        Self::normalize(raw)
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task ID, assigned by the store
    pub id: u64,

    /// Task title
    pub title: String,

    /// Free-form description, may be empty
    pub description: String,

    /// Priority level
    pub priority: Priority,
}

impl Task {
    /// Create a new task, trimming text fields and normalizing the priority
    pub fn new(
        id: u64,
        title: impl AsRef<str>,
        description: impl AsRef<str>,
        priority: impl Into<Priority>,
    ) -> Self {
        Self {
            id,
            title: title.as_ref().trim().to_string(),
            description: description.as_ref().trim().to_string(),
            priority: priority.into(),
        }
    }

    /// Ordering used by listings: priority descending, then id ascending
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.id.cmp(&other.id))
    }
}
