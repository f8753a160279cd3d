//! Conversions between hex strings and RGB channels.

use chroma_model::{Color, Result};

/// Parse a hex string into a color.
///
/// Accepts exactly six hex digits with an optional leading `#`; anything else
/// is an `InvalidColorFormat` error.
pub fn hex_to_rgb(hex: &str) -> Result<Color> {
    Color::from_hex(hex)
}

/// Round and clamp a computed channel value into `0..=255`.
pub fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Build a color from unbounded channel values.
pub fn rgb_to_color(r: f64, g: f64, b: f64) -> Color {
    Color::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
}

/// Encode channel values as uppercase `#RRGGBB`, rounding and clamping first.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    rgb_to_color(r, g, b).to_hex()
}
