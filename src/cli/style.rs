//! Terminal styling for stderr messages
//!
//! Colours are applied only when stderr supports them; stdout carries the
//! rendered graph and is never styled.

use indicatif::ProgressStyle;
use owo_colors::{OwoColorize, Stream, Style};
use std::fmt::Display;

/// Check mark used in completion messages
pub const CHECK: &str = "✓";

fn paint(value: &impl Display, style: Style) -> String {
    value
        .if_supports_color(Stream::Stderr, |v| v.style(style))
        .to_string()
}

/// Semantic colours for anything printable
pub trait Stylize: Display + Sized {
    /// Error prefix
    fn error(&self) -> String {
        paint(self, Style::new().red().bold())
    }

    /// Successful outcome
    fn success(&self) -> String {
        paint(self, Style::new().green())
    }

    /// Names and headings
    fn emphasis(&self) -> String {
        paint(self, Style::new().bold())
    }

    /// Counts and identifiers
    fn accent(&self) -> String {
        paint(self, Style::new().cyan())
    }

    /// Secondary information
    fn muted(&self) -> String {
        paint(self, Style::new().dimmed())
    }
}

impl<T: Display> Stylize for T {}

/// Styled check mark
pub fn check() -> String {
    CHECK.success()
}

/// Spinner style for network waits
pub fn spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
