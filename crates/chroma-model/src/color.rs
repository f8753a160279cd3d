//! The 24-bit RGB color type and its canonical `#RRGGBB` form.
//!
//! Parsing accepts upper- or lowercase digits with an optional leading `#`.
//! Output is always uppercase with the `#` prefix.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ChromaError;

static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$")
        .unwrap_or_else(|error| panic!("hex color pattern must compile: {error}"))
});

/// A 24-bit RGB color. Channel range is enforced by the `u8` storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Ordered palette, most dominant color first.
pub type Palette = Vec<Color>;

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#RRGGBB` / `RRGGBB` string.
    pub fn from_hex(input: &str) -> Result<Self, ChromaError> {
        let captures = HEX_COLOR
            .captures(input)
            .ok_or_else(|| ChromaError::invalid_color(input))?;
        let channel = |index: usize| {
            u8::from_str_radix(&captures[index], 16).map_err(|_| ChromaError::invalid_color(input))
        };
        Ok(Self::new(channel(1)?, channel(2)?, channel(3)?))
    }

    /// Canonical uppercase `#RRGGBB`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Parse a list of hex strings into a palette, failing on the first bad entry.
pub fn parse_palette<S: AsRef<str>>(values: &[S]) -> Result<Palette, ChromaError> {
    values
        .iter()
        .map(|value| Color::from_hex(value.as_ref()))
        .collect()
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ChromaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Color::from_hex("#ff8000").unwrap(), Color::new(255, 128, 0));
        assert_eq!(Color::from_hex("FF8000").unwrap(), Color::new(255, 128, 0));
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "#fff", "#12345", "#1234567", "#GG0000", "##000000", "red"] {
            let err = Color::from_hex(input).unwrap_err();
            assert!(
                matches!(err, ChromaError::InvalidColorFormat { .. }),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn hex_output_is_uppercase() {
        assert_eq!(Color::new(10, 171, 205).to_hex(), "#0AABCD");
    }

    #[test]
    fn serde_uses_hex_string() {
        let json = serde_json::to_string(&Color::new(0, 0, 255)).unwrap();
        assert_eq!(json, "\"#0000FF\"");
        let back: Color = serde_json::from_str("\"#00ff00\"").unwrap();
        assert_eq!(back, Color::new(0, 255, 0));
        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
    }
}
