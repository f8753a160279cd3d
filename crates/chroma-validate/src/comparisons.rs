//! Contrast comparisons over a palette and OCR text blocks.
//!
//! Two families exist:
//!
//! - **pairwise**: every palette position against every other position,
//!   used for the per-color report rows and the WCAG summary
//! - **text-relevant**: the comparisons that decide whether text is readable,
//!   i.e. each palette color after the first against the background
//!   (`palette[0]`), plus each OCR text block against its own background.
//!   Only these feed the compliance score and failure penalties.

use serde::Serialize;

use chroma_math::rounded_contrast;
use chroma_model::{Color, ContrastEntry, ContrastFeedback, FailureSeverity, TextBlock};

use crate::rules::{
    NORMAL_TEXT_THRESHOLD, classify_contrast, classify_failure_severity, classify_text_contrast,
    text_threshold,
};

/// Where a text-relevant comparison came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "index", rename_all = "snake_case")]
pub enum ComparisonSource {
    /// Palette position compared against the background.
    Palette(usize),
    /// OCR text block by position.
    TextBlock(usize),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextComparison {
    pub source: ComparisonSource,
    pub foreground: Color,
    pub background: Color,
    pub ratio: f64,
    pub threshold: f64,
    pub large_text: bool,
    pub feedback: ContrastFeedback,
}

impl TextComparison {
    pub fn passes(&self) -> bool {
        self.feedback.is_pass()
    }

    /// Severity when the comparison fails, `None` when it passes.
    pub fn failure_severity(&self) -> Option<FailureSeverity> {
        if self.passes() {
            None
        } else {
            Some(classify_failure_severity(self.ratio))
        }
    }
}

/// Contrast entries of `palette[index]` against every other position.
pub fn contrasts_for(palette: &[Color], index: usize) -> Vec<ContrastEntry> {
    let Some(color) = palette.get(index).copied() else {
        return Vec::new();
    };
    palette
        .iter()
        .enumerate()
        .filter(|(other_index, _)| *other_index != index)
        .map(|(_, other)| {
            let ratio = rounded_contrast(color, *other);
            ContrastEntry {
                other: *other,
                ratio,
                feedback: classify_contrast(ratio),
            }
        })
        .collect()
}

/// Palette colors after the first, each against `palette[0]`.
pub fn palette_text_comparisons(palette: &[Color]) -> Vec<TextComparison> {
    let Some(background) = palette.first().copied() else {
        return Vec::new();
    };
    palette
        .iter()
        .enumerate()
        .skip(1)
        .map(|(index, foreground)| {
            let ratio = rounded_contrast(*foreground, background);
            TextComparison {
                source: ComparisonSource::Palette(index),
                foreground: *foreground,
                background,
                ratio,
                threshold: NORMAL_TEXT_THRESHOLD,
                large_text: false,
                feedback: classify_contrast(ratio),
            }
        })
        .collect()
}

/// Each OCR block against its sampled background.
pub fn block_text_comparisons(blocks: &[TextBlock]) -> Vec<TextComparison> {
    blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            let large_text = block.is_large_text();
            let ratio = rounded_contrast(block.text_color, block.background_color);
            TextComparison {
                source: ComparisonSource::TextBlock(index),
                foreground: block.text_color,
                background: block.background_color,
                ratio,
                threshold: text_threshold(large_text),
                large_text,
                feedback: classify_text_contrast(ratio, large_text),
            }
        })
        .collect()
}

/// All text-relevant comparisons: palette first, then text blocks.
pub fn text_comparisons(palette: &[Color], blocks: &[TextBlock]) -> Vec<TextComparison> {
    let mut comparisons = palette_text_comparisons(palette);
    comparisons.extend(block_text_comparisons(blocks));
    comparisons
}
