//! Classification rules: numeric contrast to categorical judgments.
//!
//! Thresholds follow WCAG 2.1 AA: 4.5:1 for normal text, 3:1 for large text.
//! Ratios passed in here are expected to be the two-decimal display value
//! (see [`chroma_math::rounded_contrast`]).

use chroma_math::rounded_contrast;
use chroma_model::{
    Color, ContrastFeedback, FailureSeverity, Recommendation, RiskLevel, Suggestion,
};

/// AA threshold for normal text.
pub const NORMAL_TEXT_THRESHOLD: f64 = 4.5;
/// AA threshold for large text; also the warning floor for normal text.
pub const LARGE_TEXT_THRESHOLD: f64 = 3.0;
/// Below this a failing ratio is critical.
pub const CRITICAL_THRESHOLD: f64 = 2.0;

/// Palette-pair ladder: Pass / PassWarning / Fail.
pub fn classify_contrast(ratio: f64) -> ContrastFeedback {
    if ratio >= NORMAL_TEXT_THRESHOLD {
        ContrastFeedback::Pass
    } else if ratio >= LARGE_TEXT_THRESHOLD {
        ContrastFeedback::PassWarning
    } else {
        ContrastFeedback::Fail
    }
}

/// Pass threshold for text of the given size.
pub fn text_threshold(is_large_text: bool) -> f64 {
    if is_large_text {
        LARGE_TEXT_THRESHOLD
    } else {
        NORMAL_TEXT_THRESHOLD
    }
}

/// Text-on-background judgment. Large text passes at 3.0 and has no
/// warning band; normal text uses the palette ladder.
pub fn classify_text_contrast(ratio: f64, is_large_text: bool) -> ContrastFeedback {
    if !is_large_text {
        return classify_contrast(ratio);
    }
    if ratio >= LARGE_TEXT_THRESHOLD {
        ContrastFeedback::Pass
    } else {
        ContrastFeedback::Fail
    }
}

pub fn classify_risk(ratio: f64) -> RiskLevel {
    if ratio >= NORMAL_TEXT_THRESHOLD {
        RiskLevel::Low
    } else if ratio >= LARGE_TEXT_THRESHOLD {
        RiskLevel::Medium
    } else {
        RiskLevel::High
    }
}

/// Severity band of a ratio that already failed its pass threshold.
pub fn classify_failure_severity(ratio: f64) -> FailureSeverity {
    if ratio < CRITICAL_THRESHOLD {
        FailureSeverity::Critical
    } else if ratio < LARGE_TEXT_THRESHOLD {
        FailureSeverity::Moderate
    } else {
        FailureSeverity::Minor
    }
}

/// Suggest a replacement for `color` when it is hard to read on `background`.
///
/// The first brand color (in order) that reaches 4.5 against the background
/// wins, even if a later one would contrast more.
pub fn suggest_better_color(color: Color, background: Color, brand: &[Color]) -> Suggestion {
    let recommendation = if rounded_contrast(color, background) >= LARGE_TEXT_THRESHOLD {
        Recommendation::NoChange
    } else {
        brand
            .iter()
            .find(|candidate| rounded_contrast(**candidate, background) >= NORMAL_TEXT_THRESHOLD)
            .map_or(Recommendation::NoCandidate, |candidate| {
                Recommendation::Replace(*candidate)
            })
    };
    Suggestion {
        color,
        recommendation,
    }
}

/// Suggestions for every palette color, using the first color as background.
pub fn suggest_better_colors(palette: &[Color], brand: &[Color]) -> Vec<Suggestion> {
    let Some(background) = palette.first().copied() else {
        return Vec::new();
    };
    palette
        .iter()
        .map(|color| suggest_better_color(*color, background, brand))
        .collect()
}
