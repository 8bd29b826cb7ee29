//! Design tokens for Quay CLI output.
//!
//! All colors must be sourced from this module.

pub mod colors {
    use crossterm::style::Color;

    pub const INFO: Color = Color::Green;
    pub const WARNING: Color = Color::Yellow;
    pub const ERROR: Color = Color::Red;
}
