use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info_span};

use chroma_math::rank_similarities;
use chroma_model::{AccessibilityReport, AnalysisRequest, ColorReportRow};
use chroma_standards::ChromaConfig;
use chroma_validate::{
    ScoringInput, analyze_text, analyze_text_blocks, compute_score, contrasts_for,
    simulate_modes, suggest_better_colors, text_comparisons,
};

use crate::image_name::extract_image_name;
use crate::summary::{contrast_statistics, recommendations, wcag_summary};

/// One row per palette color: brand similarity and pairwise contrast.
pub fn color_rows(request: &AnalysisRequest, config: &ChromaConfig) -> Vec<ColorReportRow> {
    request
        .palette
        .iter()
        .enumerate()
        .map(|(index, color)| ColorReportRow {
            color: *color,
            similarities: rank_similarities(*color, &config.brand_palette),
            contrasts: contrasts_for(&request.palette, index),
        })
        .collect()
}

/// Build the full report, stamped with the current time.
pub fn compute_report(request: &AnalysisRequest, config: &ChromaConfig) -> AccessibilityReport {
    compute_report_at(request, config, Utc::now())
}

/// Build the full report with a fixed timestamp.
pub fn compute_report_at(
    request: &AnalysisRequest,
    config: &ChromaConfig,
    timestamp: DateTime<Utc>,
) -> AccessibilityReport {
    let span = info_span!("compute_report", colors = request.palette.len());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = color_rows(request, config);
    let suggestions = suggest_better_colors(&request.palette, &config.brand_palette);
    let text_analysis = analyze_text(request.text.as_deref(), &request.text_blocks);
    let text_contrast = analyze_text_blocks(&request.text_blocks);
    let simulations = simulate_modes(
        &request.palette,
        &request.text_blocks,
        &request.deficiency_modes(),
        &config.scoring,
    );
    let comparisons = text_comparisons(&request.palette, &request.text_blocks);
    debug!(
        rows = rows.len(),
        text_comparisons = comparisons.len(),
        simulations = simulations.len(),
        "assembled report inputs"
    );

    let breakdown = compute_score(
        &ScoringInput {
            palette: &request.palette,
            text_comparisons: &comparisons,
            has_text: text_analysis.has_text,
            simulations: &simulations,
        },
        &config.scoring,
    );
    let statistics = contrast_statistics(&rows);
    let wcag = wcag_summary(&rows, breakdown);
    let recommendations = recommendations(wcag.overall_score);

    debug!(
        score = wcag.overall_score,
        grade = %wcag.grade,
        duration_ms = start.elapsed().as_millis(),
        "computed report"
    );

    AccessibilityReport {
        image_name: extract_image_name(request.image_name.as_deref()),
        palette: request.palette.clone(),
        brand_palette: config.brand_palette.clone(),
        rows,
        suggestions,
        text_analysis,
        text_contrast,
        simulations,
        statistics,
        wcag,
        recommendations,
        timestamp,
    }
}
