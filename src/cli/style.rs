//! Terminal styling helpers
//!
//! Styles degrade to plain text when stdout is not a terminal.

use owo_colors::{OwoColorize, Stream::Stdout};

/// Extension trait for styling user-facing output
pub trait Stylize {
    /// Bold emphasis
    fn emphasis(&self) -> String;
    /// Dimmed secondary text
    fn muted(&self) -> String;
    /// Success green
    fn success(&self) -> String;
}

impl<T: std::fmt::Display> Stylize for T {
    fn emphasis(&self) -> String {
        self.if_supports_color(Stdout, |text| text.bold()).to_string()
    }

    fn muted(&self) -> String {
        self.if_supports_color(Stdout, |text| text.dimmed()).to_string()
    }

    fn success(&self) -> String {
        self.if_supports_color(Stdout, |text| text.green()).to_string()
    }
}
