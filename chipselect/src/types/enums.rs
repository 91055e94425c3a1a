use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

impl FromStr for TextAlign {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "start" => Ok(Self::Left),
            "center" | "centre" => Ok(Self::Center),
            "right" | "end" => Ok(Self::Right),
            _ => Err(Error::InvalidTextAlign(s.to_string())),
        }
    }
}

impl fmt::Display for TextAlign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Border {
    #[default]
    None,
    Single,
    Double,
    Rounded,
    Thick,
}

impl Border {
    /// Cells taken by the border on each side.
    pub const fn size(self) -> u16 {
        match self {
            Border::None => 0,
            _ => 1,
        }
    }

    /// Corner and line glyphs: (top-left, top-right, bottom-left, bottom-right, horizontal, vertical).
    pub(crate) const fn glyphs(self) -> Option<(char, char, char, char, char, char)> {
        match self {
            Border::None => None,
            Border::Single => Some(('┌', '┐', '└', '┘', '─', '│')),
            Border::Double => Some(('╔', '╗', '╚', '╝', '═', '║')),
            Border::Rounded => Some(('╭', '╮', '╰', '╯', '─', '│')),
            Border::Thick => Some(('┏', '┓', '┗', '┛', '━', '┃')),
        }
    }
}

/// Resolved text attributes of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub dim: bool,
}

impl TextStyle {
    pub const fn new() -> Self {
        Self {
            bold: false,
            italic: false,
            underline: false,
            dim: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }
}
