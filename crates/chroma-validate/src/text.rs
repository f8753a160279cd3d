use chroma_math::round2;
use chroma_model::{RiskLevel, TextAnalysis, TextBlock, TextBlockResult, TextContrastAnalysis};

use crate::comparisons::block_text_comparisons;
use crate::rules::classify_risk;

/// Summarize OCR output. Absent text is reported as empty, not as an error.
///
/// Text counts as detected when the OCR string is non-blank or any text
/// block was supplied.
pub fn analyze_text(text: Option<&str>, blocks: &[TextBlock]) -> TextAnalysis {
    let text = text.unwrap_or_default();
    TextAnalysis {
        text: text.to_string(),
        has_text: !blocks.is_empty() || !text.trim().is_empty(),
        length: text.chars().count(),
    }
}

/// Judge every OCR text block against its background.
///
/// Overall risk is the highest block risk, `Low` when there are no blocks.
pub fn analyze_text_blocks(blocks: &[TextBlock]) -> TextContrastAnalysis {
    let results: Vec<TextBlockResult> = blocks
        .iter()
        .zip(block_text_comparisons(blocks))
        .map(|(block, comparison)| TextBlockResult {
            text: block.text.trim().to_string(),
            text_color: comparison.foreground,
            background_color: comparison.background,
            ratio: comparison.ratio,
            threshold: comparison.threshold,
            large_text: comparison.large_text,
            feedback: comparison.feedback,
            risk: classify_risk(comparison.ratio),
        })
        .collect();

    let passed = results.iter().filter(|r| r.feedback.is_pass()).count();
    let overall_risk = results
        .iter()
        .map(|r| r.risk)
        .max()
        .unwrap_or(RiskLevel::Low);
    let worst_ratio = results.iter().map(|r| r.ratio).min_by(f64::total_cmp);
    let average_ratio = if results.is_empty() {
        None
    } else {
        Some(round2(
            results.iter().map(|r| r.ratio).sum::<f64>() / results.len() as f64,
        ))
    };

    TextContrastAnalysis {
        failed: results.len() - passed,
        passed,
        blocks: results,
        overall_risk,
        worst_ratio,
        average_ratio,
    }
}
