//! Weighted accessibility score.
//!
//! Four components are combined with fixed weights, then failure penalties
//! are subtracted:
//!
//! | component              | weight | default without data |
//! |------------------------|--------|----------------------|
//! | contrast compliance    | 0.50   | 85                   |
//! | text readability       | 0.25   | 80                   |
//! | color blindness safety | 0.15   | 85                   |
//! | palette quality        | 0.10   | 0 (empty palette)    |
//!
//! The final score is clamped to `[0, 100]` and rounded. It is never NaN.

use tracing::debug;

use chroma_math::perceived_brightness;
use chroma_model::{Color, FailureSeverity, ModeSimulation, ScoreBreakdown};
use chroma_standards::ScoringSettings;

use crate::comparisons::TextComparison;

pub const CONTRAST_WEIGHT: f64 = 0.50;
pub const TEXT_WEIGHT: f64 = 0.25;
pub const COLOR_BLINDNESS_WEIGHT: f64 = 0.15;
pub const PALETTE_WEIGHT: f64 = 0.10;

/// Contrast compliance (and text pass rate) when nothing was compared.
pub const DEFAULT_CONTRAST_SCORE: f64 = 85.0;
/// Text readability when no text was detected.
pub const DEFAULT_TEXT_SCORE: f64 = 80.0;
/// Color blindness safety when no deficiency mode was simulated.
pub const DEFAULT_COLOR_BLINDNESS_SCORE: f64 = 85.0;

const TEXT_PASS_SHARE: f64 = 0.70;
const OCR_CONFIDENCE_SHARE: f64 = 0.30;

/// Perceived brightness band a well-balanced color sits strictly inside.
const BALANCED_BRIGHTNESS: (f64, f64) = (0.2, 0.8);

/// Everything the score depends on besides configuration.
#[derive(Debug, Clone, Copy)]
pub struct ScoringInput<'a> {
    pub palette: &'a [Color],
    pub text_comparisons: &'a [TextComparison],
    pub has_text: bool,
    /// Simulations of non-normal modes; `Normal` entries are ignored.
    pub simulations: &'a [ModeSimulation],
}

/// Percentage of comparisons that pass, `None` when there are none.
fn pass_rate(comparisons: &[TextComparison]) -> Option<f64> {
    if comparisons.is_empty() {
        return None;
    }
    let passes = comparisons.iter().filter(|c| c.passes()).count();
    Some(passes as f64 / comparisons.len() as f64 * 100.0)
}

pub fn text_readability(has_text: bool, text_pass_rate: Option<f64>, ocr_confidence: f64) -> f64 {
    if !has_text {
        return DEFAULT_TEXT_SCORE;
    }
    let pass_rate = text_pass_rate.unwrap_or(DEFAULT_CONTRAST_SCORE);
    TEXT_PASS_SHARE * pass_rate + OCR_CONFIDENCE_SHARE * ocr_confidence.clamp(0.0, 100.0)
}

pub fn color_blindness_safety(simulations: &[ModeSimulation]) -> f64 {
    let scores: Vec<f64> = simulations
        .iter()
        .filter(|simulation| !simulation.mode.is_normal())
        .map(|simulation| simulation.safety_score)
        .collect();
    if scores.is_empty() {
        DEFAULT_COLOR_BLINDNESS_SCORE
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    }
}

/// Share of colors that are neither too dark nor too light.
pub fn palette_quality(palette: &[Color]) -> f64 {
    if palette.is_empty() {
        return 0.0;
    }
    let (low, high) = BALANCED_BRIGHTNESS;
    let balanced = palette
        .iter()
        .map(|color| perceived_brightness(*color))
        .filter(|brightness| *brightness > low && *brightness < high)
        .count();
    balanced as f64 / palette.len() as f64 * 100.0
}

/// Compute the score breakdown.
pub fn compute_score(input: &ScoringInput<'_>, settings: &ScoringSettings) -> ScoreBreakdown {
    let text_pass_rate = pass_rate(input.text_comparisons);
    let contrast_compliance = text_pass_rate.unwrap_or(DEFAULT_CONTRAST_SCORE);
    let text_readability =
        text_readability(input.has_text, text_pass_rate, settings.ocr_confidence);
    let color_blindness_safety = color_blindness_safety(input.simulations);
    let palette_quality = palette_quality(input.palette);

    let weighted_score = contrast_compliance * CONTRAST_WEIGHT
        + text_readability * TEXT_WEIGHT
        + color_blindness_safety * COLOR_BLINDNESS_WEIGHT
        + palette_quality * PALETTE_WEIGHT;

    let mut critical_failures = 0;
    let mut moderate_failures = 0;
    let mut minor_failures = 0;
    for severity in input
        .text_comparisons
        .iter()
        .filter_map(TextComparison::failure_severity)
    {
        match severity {
            FailureSeverity::Critical => critical_failures += 1,
            FailureSeverity::Moderate => moderate_failures += 1,
            FailureSeverity::Minor => minor_failures += 1,
        }
    }
    let penalty = FailureSeverity::Critical.penalty() * critical_failures as f64
        + FailureSeverity::Moderate.penalty() * moderate_failures as f64
        + FailureSeverity::Minor.penalty() * minor_failures as f64;

    let overall_score = final_score(weighted_score - penalty);

    debug!(
        contrast_compliance,
        text_readability,
        color_blindness_safety,
        palette_quality,
        weighted_score,
        penalty,
        overall_score,
        "computed accessibility score"
    );

    ScoreBreakdown {
        contrast_compliance,
        text_readability,
        color_blindness_safety,
        palette_quality,
        weighted_score,
        text_comparisons: input.text_comparisons.len(),
        text_passes: input.text_comparisons.iter().filter(|c| c.passes()).count(),
        critical_failures,
        moderate_failures,
        minor_failures,
        penalty,
        overall_score,
    }
}

/// Clamp to [0, 100] and round; NaN maps to 0.
fn final_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    // in range after the clamp, so the cast cannot truncate
    raw.clamp(0.0, 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_model::{RiskLevel, VisionMode};

    fn simulation(mode: VisionMode, safety_score: f64) -> ModeSimulation {
        ModeSimulation {
            mode,
            colors: Vec::new(),
            worst_ratio: None,
            impact: RiskLevel::Low,
            safety_score,
        }
    }

    #[test]
    fn final_score_is_clamped() {
        assert_eq!(final_score(-12.0), 0);
        assert_eq!(final_score(140.0), 100);
        assert_eq!(final_score(f64::NAN), 0);
        assert_eq!(final_score(82.75), 83);
        assert_eq!(final_score(85.25), 85);
    }

    #[test]
    fn text_readability_blends_pass_rate_and_confidence() {
        assert_eq!(text_readability(false, Some(0.0), 85.0), 80.0);
        assert!((text_readability(true, Some(100.0), 85.0) - 95.5).abs() < 1e-9);
        assert!((text_readability(true, None, 85.0) - 85.0).abs() < 1e-9);
    }

    #[test]
    fn normal_mode_does_not_count_for_safety() {
        assert_eq!(color_blindness_safety(&[]), 85.0);
        assert_eq!(
            color_blindness_safety(&[simulation(VisionMode::Normal, 55.0)]),
            85.0
        );
        let mixed = [
            simulation(VisionMode::Protanopia, 95.0),
            simulation(VisionMode::Tritanopia, 55.0),
        ];
        assert_eq!(color_blindness_safety(&mixed), 75.0);
    }

    #[test]
    fn palette_quality_uses_open_brightness_band() {
        assert_eq!(palette_quality(&[]), 0.0);
        assert_eq!(palette_quality(&[Color::WHITE, Color::BLACK]), 0.0);
        assert_eq!(
            palette_quality(&[Color::new(0x80, 0x80, 0x80), Color::WHITE]),
            50.0
        );
    }

    #[test]
    fn weights_sum_to_one() {
        let sum = CONTRAST_WEIGHT + TEXT_WEIGHT + COLOR_BLINDNESS_WEIGHT + PALETTE_WEIGHT;
        assert!((sum - 1.0).abs() < 1e-12);
    }
}
