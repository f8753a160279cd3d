//! WCAG relative luminance and contrast ratio.

use chroma_model::Color;

/// Channel threshold below which the sRGB curve is linear.
const LINEAR_THRESHOLD: f64 = 0.03928;

/// Convert an sRGB channel (0-255) to linear light.
fn channel_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= LINEAR_THRESHOLD {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance: `L = 0.2126 R + 0.7152 G + 0.0722 B` on linear channels.
pub fn relative_luminance(color: Color) -> f64 {
    0.2126 * channel_to_linear(color.r)
        + 0.7152 * channel_to_linear(color.g)
        + 0.0722 * channel_to_linear(color.b)
}

/// Contrast ratio `(L_lighter + 0.05) / (L_darker + 0.05)`.
///
/// Symmetric in its arguments and always in `[1.0, 21.0]`.
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Contrast ratio as displayed, rounded to two decimals.
///
/// Classification thresholds are always applied to this value.
pub fn rounded_contrast(a: Color, b: Color) -> f64 {
    round2(contrast_ratio(a, b))
}

/// Perceived brightness `(0.299 R + 0.587 G + 0.114 B) / 255`, in `[0, 1]`.
pub fn perceived_brightness(color: Color) -> f64 {
    (0.299 * f64::from(color.r) + 0.587 * f64::from(color.g) + 0.114 * f64::from(color.b))
        / 255.0
}
