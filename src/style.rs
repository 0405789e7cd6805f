//! Terminal text styling.
//!
//! Everything printed in color goes through [`Style`], so output can be made
//! plain for pipes, logs, and tests.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};

use crate::card::Card;

/// Text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Red suits and error messages.
    Red,
    /// Winning announcements.
    Green,
    /// Black suits.
    White,
}

impl Color {
    const fn ansi_code(self) -> &'static str {
        match self {
            Self::Red => "31",
            Self::Green => "32",
            Self::White => "37",
        }
    }
}

/// How text is styled when rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// ANSI escape sequences.
    #[default]
    Ansi,
    /// No styling.
    Plain,
}

impl Style {
    /// Wraps `text` in `color`.
    ///
    /// ```
    /// use rankdraw::{Color, Style};
    ///
    /// assert_eq!(Style::Plain.paint("hi", Color::Red), "hi");
    /// assert_eq!(Style::Ansi.paint("hi", Color::Red), "\u{1b}[31mhi\u{1b}[0m");
    /// ```
    #[must_use]
    pub fn paint(self, text: &str, color: Color) -> String {
        match self {
            Self::Ansi => format!("\u{1b}[{}m{text}\u{1b}[0m", color.ansi_code()),
            Self::Plain => text.to_string(),
        }
    }

    /// Renders a card with its suit glyph colored by suit.
    #[must_use]
    pub fn card(self, card: Card) -> String {
        let color = if card.suit.is_red() {
            Color::Red
        } else {
            Color::White
        };
        let mut glyph = [0; 4];
        let glyph = card.suit.glyph().encode_utf8(&mut glyph);
        format!("{}{}", card.rank, self.paint(glyph, color))
    }
}
