//! Line styling for console output
//!
//! Styling is an explicit value passed to the read action rather than
//! mutated global terminal state, so styled output stays testable.

use colored::{Color, ColoredString, Colorize};

/// The fixed foreground palette accepted by `--fgcolor`
pub const PALETTE: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "bright-black",
    "bright-red",
    "bright-green",
    "bright-yellow",
    "bright-blue",
    "bright-magenta",
    "bright-cyan",
    "bright-white",
];

/// Look up a palette name, returning `None` for anything outside the palette
pub fn color_from_name(name: &str) -> Option<Color> {
    let color = match name {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "bright-black" => Color::BrightBlack,
        "bright-red" => Color::BrightRed,
        "bright-green" => Color::BrightGreen,
        "bright-yellow" => Color::BrightYellow,
        "bright-blue" => Color::BrightBlue,
        "bright-magenta" => Color::BrightMagenta,
        "bright-cyan" => Color::BrightCyan,
        "bright-white" => Color::BrightWhite,
        _ => return None,
    };
    Some(color)
}

/// Foreground and background applied to every displayed line
#[derive(Debug, Clone, Copy)]
pub struct LineStyle {
    pub fg: Color,
    pub bg: Color,
}

impl LineStyle {
    /// Create a style from a foreground color and the light-mode flag
    ///
    /// The background is black unless light mode is on, then white.
    pub fn new(fg: Color, light_mode: bool) -> Self {
        let bg = if light_mode {
            Color::White
        } else {
            Color::Black
        };
        LineStyle { fg, bg }
    }

    /// Apply the style to a single line
    pub fn paint(&self, line: &str) -> ColoredString {
        line.color(self.fg).on_color(self.bg)
    }
}
