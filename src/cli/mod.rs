//! CLI command implementations

pub mod add;
pub mod chart;
pub mod definition;
pub mod list;
pub mod menu;
pub mod remove;

pub use definition::{Cli, Commands};

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate to at most `max` display columns, marking the cut with `...`
pub fn truncate(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }

    let (budget, suffix) = if max <= 3 { (max, "") } else { (max - 3, "...") };

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str(suffix);
    out
}

/// Left-align `s` in a column of `width` display columns
pub fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}
