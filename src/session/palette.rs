//! Console colours selectable with the `color` command.

use std::fmt;

use console::Color;

/// One of the sixteen console colours, addressed by identifier or name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShellColor {
    Black,
    Blue,
    Green,
    Cyan,
    Red,
    Purple,
    Yellow,
    Silver,
    Gray,
    Gold,
    Magenta,
    Teal,
    DarkBlue,
    DarkGreen,
    DarkRed,
    White,
}

impl ShellColor {
    /// Every colour in identifier order.
    pub const ALL: [ShellColor; 16] = [
        Self::Black,
        Self::Blue,
        Self::Green,
        Self::Cyan,
        Self::Red,
        Self::Purple,
        Self::Yellow,
        Self::Silver,
        Self::Gray,
        Self::Gold,
        Self::Magenta,
        Self::Teal,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkRed,
        Self::White,
    ];

    /// Single hex digit identifier, `0` through `F`.
    pub fn identifier(&self) -> char {
        let index = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        char::from_digit(index as u32, 16)
            .unwrap_or('0')
            .to_ascii_uppercase()
    }

    /// Lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Black => "black",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Cyan => "cyan",
            Self::Red => "red",
            Self::Purple => "purple",
            Self::Yellow => "yellow",
            Self::Silver => "silver",
            Self::Gray => "gray",
            Self::Gold => "gold",
            Self::Magenta => "magenta",
            Self::Teal => "teal",
            Self::DarkBlue => "dark_blue",
            Self::DarkGreen => "dark_green",
            Self::DarkRed => "dark_red",
            Self::White => "white",
        }
    }

    /// Find a colour by name or identifier, ignoring ASCII case.
    pub fn parse(name_or_identifier: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| {
            c.name().eq_ignore_ascii_case(name_or_identifier)
                || c.identifier().to_string().eq_ignore_ascii_case(name_or_identifier)
        })
    }

    /// The matching 256-colour console value.
    pub fn console_color(&self) -> Color {
        let index = match self {
            Self::Black => 0,
            Self::DarkRed => 1,
            Self::DarkGreen => 2,
            Self::Gold => 3,
            Self::DarkBlue => 4,
            Self::Purple => 5,
            Self::Teal => 6,
            Self::Silver => 7,
            Self::Gray => 8,
            Self::Red => 9,
            Self::Green => 10,
            Self::Yellow => 11,
            Self::Blue => 12,
            Self::Magenta => 13,
            Self::Cyan => 14,
            Self::White => 15,
        };
        Color::Color256(index)
    }
}

impl fmt::Display for ShellColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.identifier(), self.name())
    }
}
