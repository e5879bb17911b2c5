//! Color values as written in a palette.
//!
//! Hash colors are decoded so they can be previewed; keywords and any other
//! CSS value (functions, variables) pass through untouched since the build
//! tool is the one that interprets them.

use cssparser::{Parser, ParserInput, Token};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::error::ConfigError;

/// An 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Converts to the nearest ANSI 256-color palette index, ignoring alpha.
    ///
    /// ```rust
    /// use themecell::config::Rgba;
    ///
    /// assert_eq!(Rgba::rgb(255, 0, 0).to_ansi256(), 196);
    /// assert_eq!(Rgba::rgb(0, 255, 0).to_ansi256(), 46);
    /// ```
    pub fn to_ansi256(self) -> u8 {
        let Rgba { r, g, b, .. } = self;
        if r == g && g == b {
            if r < 8 {
                16
            } else if r > 248 {
                231
            } else {
                232 + ((r as u16 - 8) * 24 / 247) as u8
            }
        } else {
            let red = (r as u16 * 5 / 255) as u8;
            let green = (g as u16 * 5 / 255) as u8;
            let blue = (b as u16 * 5 / 255) as u8;
            16 + 36 * red + 6 * green + blue
        }
    }

    /// Relative luminance in `0.0..=1.0` (sRGB weights, no gamma correction).
    pub fn luminance(self) -> f32 {
        (0.2126 * self.r as f32 + 0.7152 * self.g as f32 + 0.0722 * self.b as f32) / 255.0
    }

    fn from_hex(digits: &str) -> Result<Self, String> {
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err("non-hexadecimal digit".to_string());
        }
        let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).map(|n| n * 17);
        let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16);
        let parsed = match digits.len() {
            3 => (nibble(0), nibble(1), nibble(2), Ok(255)),
            4 => (nibble(0), nibble(1), nibble(2), nibble(3)),
            6 => (byte(0), byte(2), byte(4), Ok(255)),
            8 => (byte(0), byte(2), byte(4), byte(6)),
            n => return Err(format!("expected 3, 4, 6 or 8 hex digits, found {}", n)),
        };
        match parsed {
            (Ok(r), Ok(g), Ok(b), Ok(a)) => Ok(Rgba { r, g, b, a }),
            _ => Err("non-hexadecimal digit".to_string()),
        }
    }
}

/// A single palette entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ColorValue {
    /// A `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` color.
    Hex { source: String, rgba: Rgba },
    /// A bare identifier such as `transparent` or `currentColor`.
    Keyword(String),
    /// Any other CSS value, kept verbatim.
    Css(String),
}

impl ColorValue {
    /// Parses a palette entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidColor`] for empty input or a malformed
    /// hash color.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let trimmed = text.trim();
        let invalid = |reason: String| ConfigError::InvalidColor {
            value: text.to_string(),
            reason,
        };
        if trimmed.is_empty() {
            return Err(invalid("empty color value".to_string()));
        }

        let mut input = ParserInput::new(trimmed);
        let mut parser = Parser::new(&mut input);
        let first = match parser.next() {
            Ok(token) => token.clone(),
            Err(_) => return Ok(ColorValue::Css(trimmed.to_string())),
        };
        let exhausted = parser.is_exhausted();

        match first {
            Token::Hash(ref digits) | Token::IDHash(ref digits) => {
                if !exhausted {
                    return Err(invalid("unexpected input after hash color".to_string()));
                }
                let rgba = Rgba::from_hex(digits).map_err(invalid)?;
                Ok(ColorValue::Hex {
                    source: trimmed.to_string(),
                    rgba,
                })
            }
            Token::Delim('#') => Err(invalid("missing hex digits".to_string())),
            Token::Ident(_) if exhausted => Ok(ColorValue::Keyword(trimmed.to_string())),
            _ => Ok(ColorValue::Css(trimmed.to_string())),
        }
    }

    /// The value as written in the configuration.
    pub fn as_str(&self) -> &str {
        match self {
            ColorValue::Hex { source, .. } => source,
            ColorValue::Keyword(s) | ColorValue::Css(s) => s,
        }
    }

    /// The decoded color, for hash colors.
    pub fn rgba(&self) -> Option<Rgba> {
        match self {
            ColorValue::Hex { rgba, .. } => Some(*rgba),
            _ => None,
        }
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for ColorValue {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        ColorValue::parse(&value)
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        match value {
            ColorValue::Hex { source, .. } => source,
            ColorValue::Keyword(s) | ColorValue::Css(s) => s,
        }
    }
}
