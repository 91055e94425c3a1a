use std::fmt;
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
    /// Named theme color, resolved at render time.
    Var(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Var(name.into())
    }

    /// Convert a concrete color to sRGB. Theme variables need [`crate::Theme::resolve`].
    pub fn to_rgb(&self) -> Option<Rgb> {
        match self {
            Self::Rgb { r, g, b } => Some(Rgb::new(*r, *g, *b)),
            Self::Oklch { l, c, h } => Some(oklch_to_rgb(*l, *c, *h)),
            Self::Var(_) => None,
        }
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let invalid = || Error::InvalidColor(s.to_string());

        if let Some(hex) = input.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        if let Some(args) = function_args(input, "rgb") {
            let parts: Vec<u8> = args
                .iter()
                .map(|p| p.parse::<u8>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?;
            return match parts.as_slice() {
                [r, g, b] => Ok(Color::rgb(*r, *g, *b)),
                _ => Err(invalid()),
            };
        }

        if let Some(args) = function_args(input, "oklch") {
            let parts: Vec<f32> = args
                .iter()
                .map(|p| p.parse::<f32>())
                .collect::<Result<_, _>>()
                .map_err(|_| invalid())?;
            return match parts.as_slice() {
                [l, c, h] => Ok(Color::oklch(*l, *c, *h)),
                _ => Err(invalid()),
            };
        }

        let is_name = input.starts_with(|ch: char| ch.is_ascii_alphabetic())
            && input
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '-');
        if is_name {
            Ok(Color::var(input))
        } else {
            Err(invalid())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Oklch { l, c, h } => write!(f, "oklch({l}, {c}, {h})"),
            Self::Rgb { r, g, b } => write!(f, "#{r:02x}{g:02x}{b:02x}"),
            Self::Var(name) => f.write_str(name),
        }
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Color::rgb(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Split `name(a, b, c)` into trimmed argument strings.
fn function_args<'a>(input: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let rest = input.strip_prefix(name)?.trim_start();
    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}
