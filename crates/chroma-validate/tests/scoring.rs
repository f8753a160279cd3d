use chroma_math::rounded_contrast;
use chroma_model::{
    Color, FailureSeverity, Recommendation, RiskLevel, ScoreBreakdown, TextBlock, VisionMode,
};
use chroma_standards::ScoringSettings;
use chroma_validate::{
    ScoringInput, compute_score, simulate_modes, suggest_better_color, text_comparisons,
};
use proptest::prelude::*;

fn score_palette(
    palette: &[Color],
    blocks: &[TextBlock],
    modes: &[VisionMode],
    has_text: bool,
) -> ScoreBreakdown {
    let settings = ScoringSettings::default();
    let comparisons = text_comparisons(palette, blocks);
    let simulations = simulate_modes(palette, blocks, modes, &settings);
    compute_score(
        &ScoringInput {
            palette,
            text_comparisons: &comparisons,
            has_text,
            simulations: &simulations,
        },
        &settings,
    )
}

#[test]
fn black_on_white_without_text() {
    let breakdown = score_palette(&[Color::WHITE, Color::BLACK], &[], &[], false);
    assert_eq!(breakdown.contrast_compliance, 100.0);
    assert_eq!(breakdown.text_readability, 80.0);
    assert_eq!(breakdown.color_blindness_safety, 85.0);
    assert_eq!(breakdown.palette_quality, 0.0);
    assert!((breakdown.weighted_score - 82.75).abs() < 1e-9);
    assert_eq!(breakdown.penalty, 0.0);
    assert_eq!(breakdown.overall_score, 83);
}

#[test]
fn single_gray_uses_cold_start_defaults() {
    let breakdown = score_palette(&[Color::new(0x80, 0x80, 0x80)], &[], &[], false);
    assert_eq!(breakdown.contrast_compliance, 85.0);
    assert_eq!(breakdown.text_readability, 80.0);
    assert_eq!(breakdown.color_blindness_safety, 85.0);
    assert_eq!(breakdown.palette_quality, 100.0);
    assert!((breakdown.weighted_score - 85.25).abs() < 1e-9);
    assert_eq!(breakdown.text_comparisons, 0);
    assert_eq!(breakdown.overall_score, 85);
}

#[test]
fn empty_palette_does_not_panic() {
    let breakdown = score_palette(&[], &[], &VisionMode::DEFICIENCIES, false);
    assert_eq!(breakdown.palette_quality, 0.0);
    // no pairs to compare in any mode
    assert_eq!(breakdown.color_blindness_safety, 85.0);
    // 85*.5 + 80*.25 + 85*.15 + 0 = 75.25
    assert_eq!(breakdown.overall_score, 75);
}

#[test]
fn failures_are_penalized_by_severity() {
    // white on white: critical; #AAAAAA on white (~2.32): moderate
    let palette = [Color::WHITE, Color::WHITE, Color::new(0xAA, 0xAA, 0xAA)];
    let breakdown = score_palette(&palette, &[], &[], false);
    assert_eq!(breakdown.critical_failures, 1);
    assert_eq!(breakdown.moderate_failures, 1);
    assert_eq!(breakdown.minor_failures, 0);
    assert_eq!(breakdown.penalty, 8.0);
    assert_eq!(breakdown.contrast_compliance, 0.0);
}

#[test]
fn near_miss_pair_costs_one_point() {
    // #949494 on white is 3.03: passes large text, not normal text
    let palette = [Color::WHITE, Color::new(0x94, 0x94, 0x94)];
    let breakdown = score_palette(&palette, &[], &[], false);
    assert_eq!(breakdown.critical_failures, 0);
    assert_eq!(breakdown.moderate_failures, 0);
    assert_eq!(breakdown.minor_failures, 1);
    assert_eq!(breakdown.count_for(FailureSeverity::Minor), 1);
    assert_eq!(breakdown.failure_count(), 1);
    assert_eq!(breakdown.penalty, 1.0);
    assert_eq!(breakdown.contrast_compliance, 0.0);
    // 0*.5 + 80*.25 + 85*.15 + 50*.1 = 37.75, less 1
    assert!((breakdown.weighted_score - 37.75).abs() < 1e-9);
    assert_eq!(breakdown.overall_score, 37);
}

#[test]
fn text_blocks_feed_readability() {
    let blocks = [TextBlock::new("Order now", Color::BLACK, Color::WHITE)];
    let breakdown = score_palette(&[Color::WHITE], &blocks, &[], true);
    assert_eq!(breakdown.text_comparisons, 1);
    assert_eq!(breakdown.text_passes, 1);
    // 0.7 * 100 + 0.3 * 85
    assert!((breakdown.text_readability - 95.5).abs() < 1e-9);
}

#[test]
fn configured_confidence_changes_readability() {
    let palette = [Color::WHITE, Color::BLACK];
    let comparisons = text_comparisons(&palette, &[]);
    let settings = ScoringSettings::default()
        .with_ocr_confidence(50.0)
        .with_impact(VisionMode::Protanopia, RiskLevel::High);
    let simulations = simulate_modes(&palette, &[], &[VisionMode::Protanopia], &settings);
    let breakdown = compute_score(
        &ScoringInput {
            palette: &palette,
            text_comparisons: &comparisons,
            has_text: true,
            simulations: &simulations,
        },
        &settings,
    );
    assert!((breakdown.text_readability - 85.0).abs() < 1e-9);
    assert_eq!(breakdown.color_blindness_safety, 55.0);
}

fn arb_color() -> impl Strategy<Value = Color> {
    any::<(u8, u8, u8)>().prop_map(|(r, g, b)| Color::new(r, g, b))
}

fn arb_mode() -> impl Strategy<Value = VisionMode> {
    prop::sample::select(VisionMode::ALL.to_vec())
}

proptest! {
    #[test]
    fn score_stays_in_range(
        palette in prop::collection::vec(arb_color(), 0..8),
        blocks in prop::collection::vec((arb_color(), arb_color(), any::<bool>()), 0..4),
        modes in prop::collection::vec(arb_mode(), 0..5),
        has_text in any::<bool>(),
    ) {
        let blocks: Vec<TextBlock> = blocks
            .into_iter()
            .map(|(fg, bg, large)| TextBlock::new("text", fg, bg).with_large_text(large))
            .collect();
        let breakdown = score_palette(&palette, &blocks, &modes, has_text);
        prop_assert!(breakdown.overall_score <= 100);
        prop_assert!(!breakdown.weighted_score.is_nan());
        prop_assert!(breakdown.weighted_score <= 100.0 + 1e-9);
    }

    #[test]
    fn readable_colors_need_no_change(
        color in arb_color(),
        background in arb_color(),
        brand in prop::collection::vec(arb_color(), 0..6),
    ) {
        let suggestion = suggest_better_color(color, background, &brand);
        if rounded_contrast(color, background) >= 3.0 {
            prop_assert_eq!(suggestion.recommendation, Recommendation::NoChange);
        } else {
            prop_assert_ne!(suggestion.recommendation, Recommendation::NoChange);
        }
    }
}
