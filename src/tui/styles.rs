//! TUI theme and styling

use ratatui::style::Color;

use crate::task::Priority;

#[derive(Debug, Clone)]
pub struct Theme {
    // Background and borders
    pub background: Color,
    pub border: Color,
    pub selection: Color,

    // Text colors
    pub title: Color,
    pub text: Color,
    pub dimmed: Color,
    pub hint: Color,

    // Priority colors
    pub high: Color,
    pub medium: Color,
    pub low: Color,

    // UI elements
    pub error: Color,
    pub success: Color,
    pub accent: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::phosphor()
    }
}

impl Theme {
    pub fn phosphor() -> Self {
        Self {
            background: Color::Rgb(16, 20, 18),
            border: Color::Rgb(45, 70, 55),
            selection: Color::Rgb(30, 50, 40),

            title: Color::Rgb(57, 255, 20),
            text: Color::Rgb(180, 255, 180),
            dimmed: Color::Rgb(80, 120, 90),
            hint: Color::Rgb(100, 160, 120),

            high: Color::Rgb(231, 76, 60),
            medium: Color::Rgb(241, 196, 15),
            low: Color::Rgb(46, 204, 113),

            error: Color::Rgb(255, 100, 80),
            success: Color::Rgb(0, 255, 180),
            accent: Color::Rgb(57, 255, 20),
        }
    }

    pub fn priority(&self, priority: Priority) -> Color {
        match priority {
            Priority::High => self.high,
            Priority::Medium => self.medium,
            Priority::Low => self.low,
        }
    }
}
