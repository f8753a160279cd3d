use serde::{Deserialize, Serialize};

use crate::color::{Color, Palette};
use crate::enums::VisionMode;

/// Text longer than this many characters, whitespace included, counts as large text.
pub const LARGE_TEXT_MIN_CHARS: usize = 20;

/// A line of OCR text together with its sampled colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
    pub text_color: Color,
    pub background_color: Color,
    /// Explicit size flag; inferred from the text length when absent.
    #[serde(default)]
    pub large_text: Option<bool>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>, text_color: Color, background_color: Color) -> Self {
        Self {
            text: text.into(),
            text_color,
            background_color,
            large_text: None,
        }
    }

    #[must_use]
    pub fn with_large_text(mut self, large: bool) -> Self {
        self.large_text = Some(large);
        self
    }

    pub fn is_large_text(&self) -> bool {
        self.large_text
            .unwrap_or_else(|| self.text.chars().count() > LARGE_TEXT_MIN_CHARS)
    }
}

/// Inputs gathered from the palette and OCR collaborators for one image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    #[serde(default)]
    pub image_name: Option<String>,
    #[serde(default)]
    pub palette: Palette,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub text_blocks: Vec<TextBlock>,
    #[serde(default)]
    pub simulation_modes: Vec<VisionMode>,
}

impl AnalysisRequest {
    pub fn new(palette: Palette) -> Self {
        Self {
            palette,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_image_name(mut self, name: impl Into<String>) -> Self {
        self.image_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    #[must_use]
    pub fn with_text_blocks(mut self, blocks: Vec<TextBlock>) -> Self {
        self.text_blocks = blocks;
        self
    }

    #[must_use]
    pub fn with_simulation_modes(mut self, modes: Vec<VisionMode>) -> Self {
        self.simulation_modes = modes;
        self
    }

    /// Background is the most dominant color.
    pub fn background(&self) -> Option<Color> {
        self.palette.first().copied()
    }

    /// True when OCR returned any non-whitespace text or any text block.
    pub fn has_text(&self) -> bool {
        !self.text_blocks.is_empty()
            || self
                .text
                .as_deref()
                .is_some_and(|text| !text.trim().is_empty())
    }

    /// Requested modes that alter colors, deduplicated in request order.
    pub fn deficiency_modes(&self) -> Vec<VisionMode> {
        let mut modes = Vec::new();
        for mode in &self.simulation_modes {
            if !mode.is_normal() && !modes.contains(mode) {
                modes.push(*mode);
            }
        }
        modes
    }
}
