//! Colour type and normalization.
//!
//! Every colour accepted by a symbolizer passes through [`Colour::normalize`],
//! which turns a hex string, a named colour, or an RGB triple into a single
//! canonical value. The canonical text form is `#RRGGBB` (uppercase), or
//! `#RRGGBBAA` when the colour is not fully opaque.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StyleError};

/// An RGBA colour value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Raw colour input as supplied by a caller, before normalization.
#[derive(Debug, Clone, PartialEq)]
pub enum ColourInput {
    /// `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
    Hex(String),
    /// A CSS/SVG colour name such as `red` or `steelblue`.
    Named(String),
    /// A numeric RGB triple.
    Rgb(u8, u8, u8),
}

impl Colour {
    /// Create a new colour from RGBA components.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a new opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Normalize any accepted colour input into a canonical colour.
    pub fn normalize(input: &ColourInput) -> Result<Self> {
        match input {
            ColourInput::Hex(hex) => Self::from_hex(hex),
            ColourInput::Named(name) => {
                Self::from_name(name).ok_or_else(|| StyleError::invalid_colour(name.as_str()))
            }
            ColourInput::Rgb(r, g, b) => Ok(Self::rgb(*r, *g, *b)),
        }
    }

    /// Parse a colour string that may be either a hex value or a name.
    ///
    /// A leading `#` always means hex. Otherwise the name table is consulted
    /// first and a bare hex string is only tried when no name matches.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with('#') {
            return Self::from_hex(s);
        }
        if let Some(colour) = Self::from_name(s) {
            return Ok(colour);
        }
        Self::from_hex(s)
    }

    /// Look up a CSS/SVG named colour (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        palette::named::from_str(&name).map(|c| Self::rgb(c.red, c.green, c.blue))
    }

    /// Parse a hex colour string.
    ///
    /// Supports formats:
    /// - `#RGB` (3 digits, expanded to 6)
    /// - `#RGBA` (4 digits, expanded to 8)
    /// - `#RRGGBB` (6 digits)
    /// - `#RRGGBBAA` (8 digits)
    pub fn from_hex(s: &str) -> Result<Self> {
        let s = s.trim();
        let hex = s.strip_prefix('#').unwrap_or(s);

        // from_str_radix alone would let a leading '+' through
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(StyleError::invalid_colour(s));
        }
        let digits: Vec<u8> = hex.bytes().map(hex_value).collect();

        match digits.len() {
            3 | 4 => {
                // #RGB(A) -> #RRGGBB(AA)
                let expand = |d: u8| d << 4 | d;
                let a = digits.get(3).map_or(255, |&d| expand(d));
                Ok(Self::new(expand(digits[0]), expand(digits[1]), expand(digits[2]), a))
            }
            6 | 8 => {
                let byte = |i: usize| digits[i] << 4 | digits[i + 1];
                let a = if digits.len() == 8 { byte(6) } else { 255 };
                Ok(Self::new(byte(0), byte(2), byte(4), a))
            }
            _ => Err(StyleError::invalid_colour(s)),
        }
    }

    /// Canonical hex form.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl FromStr for Colour {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

impl From<&str> for ColourInput {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.starts_with('#') || Colour::from_name(trimmed).is_none() {
            ColourInput::Hex(trimmed.to_string())
        } else {
            ColourInput::Named(trimmed.to_string())
        }
    }
}

impl From<String> for ColourInput {
    fn from(s: String) -> Self {
        ColourInput::from(s.as_str())
    }
}

impl From<(u8, u8, u8)> for ColourInput {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        ColourInput::Rgb(r, g, b)
    }
}

impl From<[u8; 3]> for ColourInput {
    fn from([r, g, b]: [u8; 3]) -> Self {
        ColourInput::Rgb(r, g, b)
    }
}

impl From<Colour> for ColourInput {
    fn from(colour: Colour) -> Self {
        ColourInput::Hex(colour.to_hex())
    }
}

/// Value of an ASCII hex digit already checked with `is_ascii_hexdigit`.
fn hex_value(b: u8) -> u8 {
    match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        _ => b - b'A' + 10,
    }
}
