//! Deterministic color math.
//!
//! Everything in this crate is a pure function on [`Color`] values:
//!
//! - **convert**: hex strings to channels and back
//! - **similarity**: Euclidean RGB distance mapped to a percentage
//! - **contrast**: WCAG relative luminance and contrast ratio
//! - **simulate**: linear color vision deficiency transforms
//!
//! [`Color`]: chroma_model::Color

mod contrast;
mod convert;
mod similarity;
mod simulate;

pub use contrast::{
    contrast_ratio, perceived_brightness, relative_luminance, round2, rounded_contrast,
};
pub use convert::{clamp_channel, hex_to_rgb, rgb_to_color, rgb_to_hex};
pub use similarity::{SIMILARITY_SCALE, rank_similarities, rgb_distance, similarity};
pub use simulate::{simulate_color_blindness, simulate_palette};
