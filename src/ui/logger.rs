//! Console logger
//!
//! One `Logger` is constructed at process start and passed to each pipeline
//! stage; there is no ambient global logger. All lines go to stderr so stdout
//! stays clean for shell composition.

use std::fmt::Display;

use crossterm::style::Stylize;
use is_terminal::IsTerminal;

use super::theme::colors;

/// Colorized stderr logger.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    color: bool,
    silent: bool,
}

impl Logger {
    /// Logger with explicit color control.
    pub fn new(color: bool) -> Self {
        Self {
            color,
            silent: false,
        }
    }

    /// Logger with color enabled when stderr is a terminal and neither
    /// `NO_COLOR` nor `QUAY_NO_COLOR` is set.
    pub fn auto() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some()
            || std::env::var_os("QUAY_NO_COLOR").is_some();
        Self::new(std::io::stderr().is_terminal() && !no_color)
    }

    /// Logger that prints nothing. For tests.
    pub fn disabled() -> Self {
        Self {
            color: false,
            silent: true,
        }
    }

    pub fn info(&self, message: impl Display) {
        self.emit("INFO", colors::INFO, message);
    }

    pub fn warn(&self, message: impl Display) {
        self.emit("WARNING", colors::WARNING, message);
    }

    pub fn error(&self, message: impl Display) {
        self.emit("ERROR", colors::ERROR, message);
    }

    fn emit(&self, level: &str, color: crossterm::style::Color, message: impl Display) {
        if self.silent {
            return;
        }
        // Pad before styling; escape codes would otherwise eat the width.
        let tag = format!("{:<8}", level);
        if self.color {
            eprintln!("{} {}", tag.with(color), message);
        } else {
            eprintln!("{} {}", tag, message);
        }
    }
}
