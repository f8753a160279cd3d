//! Color vision deficiency impact.
//!
//! Each mode re-runs the text-relevant comparisons on simulated colors. The
//! worst simulated ratio decides the impact, unless configuration pins it.
//! A mode with nothing to compare keeps the cold-start safety score.

use tracing::debug;

use chroma_math::{simulate_color_blindness, simulate_palette};
use chroma_model::{Color, ModeSimulation, RiskLevel, TextBlock, VisionMode};
use chroma_standards::ScoringSettings;

use crate::comparisons::text_comparisons;
use crate::rules::classify_risk;
use crate::scoring::DEFAULT_COLOR_BLINDNESS_SCORE;

/// Per-mode safety score for an impact level.
pub fn safety_score(impact: RiskLevel) -> f64 {
    match impact {
        RiskLevel::Low => 95.0,
        RiskLevel::Medium => 75.0,
        RiskLevel::High => 55.0,
    }
}

/// Simulate one mode over the palette and text blocks.
pub fn simulate_mode(
    palette: &[Color],
    blocks: &[TextBlock],
    mode: VisionMode,
    settings: &ScoringSettings,
) -> ModeSimulation {
    let colors = simulate_palette(palette, mode);
    let simulated_palette: Vec<Color> = colors.iter().map(|c| c.simulated).collect();
    let simulated_blocks: Vec<TextBlock> = blocks
        .iter()
        .map(|block| TextBlock {
            text_color: simulate_color_blindness(block.text_color, mode),
            background_color: simulate_color_blindness(block.background_color, mode),
            ..block.clone()
        })
        .collect();

    let worst_ratio = text_comparisons(&simulated_palette, &simulated_blocks)
        .iter()
        .map(|comparison| comparison.ratio)
        .min_by(f64::total_cmp);
    let (impact, safety) = match (settings.impact_override(mode), worst_ratio) {
        (Some(impact), _) => (impact, safety_score(impact)),
        (None, Some(ratio)) => {
            let impact = classify_risk(ratio);
            (impact, safety_score(impact))
        }
        (None, None) => (RiskLevel::Low, DEFAULT_COLOR_BLINDNESS_SCORE),
    };

    debug!(
        mode = mode.as_str(),
        worst_ratio = ?worst_ratio,
        impact = %impact,
        safety,
        "simulated vision mode"
    );

    ModeSimulation {
        mode,
        colors,
        worst_ratio,
        impact,
        safety_score: safety,
    }
}

/// Simulate every requested mode, in request order.
pub fn simulate_modes(
    palette: &[Color],
    blocks: &[TextBlock],
    modes: &[VisionMode],
    settings: &ScoringSettings,
) -> Vec<ModeSimulation> {
    modes
        .iter()
        .map(|mode| simulate_mode(palette, blocks, *mode, settings))
        .collect()
}
