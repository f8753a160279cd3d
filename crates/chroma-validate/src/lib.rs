//! Contrast classification, color suggestions, and the weighted score.

mod comparisons;
mod rules;
mod scoring;
mod simulation;
mod text;

pub use comparisons::{
    ComparisonSource, TextComparison, block_text_comparisons, contrasts_for,
    palette_text_comparisons, text_comparisons,
};
pub use rules::{
    CRITICAL_THRESHOLD, LARGE_TEXT_THRESHOLD, NORMAL_TEXT_THRESHOLD, classify_contrast,
    classify_failure_severity, classify_risk, classify_text_contrast, suggest_better_color,
    suggest_better_colors, text_threshold,
};
pub use scoring::{
    COLOR_BLINDNESS_WEIGHT, CONTRAST_WEIGHT, DEFAULT_COLOR_BLINDNESS_SCORE,
    DEFAULT_CONTRAST_SCORE, DEFAULT_TEXT_SCORE, PALETTE_WEIGHT, ScoringInput, TEXT_WEIGHT,
    color_blindness_safety, compute_score, palette_quality, text_readability,
};
pub use simulation::{safety_score, simulate_mode, simulate_modes};
pub use text::{analyze_text, analyze_text_blocks};
