//! The accessibility report and the records it is assembled from.
//!
//! Every type here is a plain value. Exporters format these structures; they
//! never recompute or adjust the scores they carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color::{Color, Palette};
use crate::enums::{
    ComplianceLevel, ContrastFeedback, ExperienceRating, FailureSeverity, Grade, RiskLevel,
    VisionMode,
};

/// Similarity of one extracted color to one brand color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub reference: Color,
    /// Percentage in [0, 100].
    pub similarity: f64,
}

/// Contrast of one extracted color against another color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastEntry {
    pub other: Color,
    /// Ratio rounded to two decimals, always >= 1.0.
    pub ratio: f64,
    pub feedback: ContrastFeedback,
}

/// One row per extracted palette color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorReportRow {
    pub color: Color,
    /// Most similar brand color first.
    pub similarities: Vec<SimilarityEntry>,
    /// One entry per other palette position.
    pub contrasts: Vec<ContrastEntry>,
}

impl ColorReportRow {
    pub fn closest_match(&self) -> Option<&SimilarityEntry> {
        self.similarities.first()
    }
}

/// What to do about a color with weak contrast against the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "color", rename_all = "snake_case")]
pub enum Recommendation {
    /// Contrast is already at least 3.0.
    NoChange,
    /// First brand color reaching 4.5 against the background.
    Replace(Color),
    /// No brand color reaches 4.5 against the background.
    NoCandidate,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::NoChange => write!(f, "Good contrast"),
            Recommendation::Replace(color) => write!(f, "{color}"),
            Recommendation::NoCandidate => write!(f, "Consider a higher contrast color"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub color: Color,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatedColor {
    pub mode: VisionMode,
    pub original: Color,
    pub simulated: Color,
}

/// Result of simulating the palette under one vision mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeSimulation {
    pub mode: VisionMode,
    pub colors: Vec<SimulatedColor>,
    /// Worst text-relevant ratio after simulation, `None` without pairs.
    pub worst_ratio: Option<f64>,
    pub impact: RiskLevel,
    pub safety_score: f64,
}

/// OCR text summary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub text: String,
    pub has_text: bool,
    /// Length in characters.
    pub length: usize,
}

/// Contrast judgment of one OCR text block on its background.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlockResult {
    pub text: String,
    pub text_color: Color,
    pub background_color: Color,
    pub ratio: f64,
    pub threshold: f64,
    pub large_text: bool,
    pub feedback: ContrastFeedback,
    pub risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextContrastAnalysis {
    pub blocks: Vec<TextBlockResult>,
    pub passed: usize,
    pub failed: usize,
    pub overall_risk: RiskLevel,
    pub worst_ratio: Option<f64>,
    pub average_ratio: Option<f64>,
}

impl TextContrastAnalysis {
    pub fn total_blocks(&self) -> usize {
        self.blocks.len()
    }
}

/// Distribution of all pairwise palette contrasts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContrastStatistics {
    pub total: usize,
    /// Ratios >= 4.5.
    pub good: usize,
    /// Ratios in [3.0, 4.5).
    pub medium: usize,
    /// Ratios < 3.0.
    pub poor: usize,
    pub worst: Option<f64>,
    pub best: Option<f64>,
    pub average: Option<f64>,
}

/// A failing palette pair in the WCAG summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContrastFailure {
    pub color: Color,
    pub other: Color,
    pub ratio: f64,
    pub feedback: ContrastFeedback,
    pub issue: String,
}

/// Component scores and penalties behind the overall score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub contrast_compliance: f64,
    pub text_readability: f64,
    pub color_blindness_safety: f64,
    pub palette_quality: f64,
    pub weighted_score: f64,
    pub text_comparisons: usize,
    pub text_passes: usize,
    pub critical_failures: usize,
    pub moderate_failures: usize,
    pub minor_failures: usize,
    pub penalty: f64,
    /// Final score in [0, 100].
    pub overall_score: u8,
}

impl ScoreBreakdown {
    pub fn failure_count(&self) -> usize {
        self.critical_failures + self.moderate_failures + self.minor_failures
    }

    pub fn count_for(&self, severity: FailureSeverity) -> usize {
        match severity {
            FailureSeverity::Critical => self.critical_failures,
            FailureSeverity::Moderate => self.moderate_failures,
            FailureSeverity::Minor => self.minor_failures,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub legal: RiskLevel,
    pub user_experience: ExperienceRating,
    pub brand: RiskLevel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WcagSummary {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    /// Rounded percentage of passed pairwise tests.
    pub pass_rate: u8,
    pub failures: Vec<ContrastFailure>,
    pub overall_score: u8,
    pub grade: Grade,
    pub level: ComplianceLevel,
    pub breakdown: ScoreBreakdown,
    pub risk: RiskAssessment,
}

impl WcagSummary {
    pub fn is_compliant(&self) -> bool {
        self.total_tests > 0 && self.failed_tests == 0
    }
}

/// Full report for one analyzed image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    pub image_name: String,
    pub palette: Palette,
    pub brand_palette: Palette,
    pub rows: Vec<ColorReportRow>,
    pub suggestions: Vec<Suggestion>,
    pub text_analysis: TextAnalysis,
    pub text_contrast: TextContrastAnalysis,
    pub simulations: Vec<ModeSimulation>,
    pub statistics: ContrastStatistics,
    pub wcag: WcagSummary,
    pub recommendations: Recommendations,
    pub timestamp: DateTime<Utc>,
}

impl AccessibilityReport {
    pub fn overall_score(&self) -> u8 {
        self.wcag.overall_score
    }

    pub fn grade(&self) -> Grade {
        self.wcag.grade
    }

    pub fn failure_count(&self) -> usize {
        self.wcag.failed_tests
    }

    /// Suggestions that actually propose a change.
    pub fn actionable_suggestions(&self) -> impl Iterator<Item = &Suggestion> {
        self.suggestions
            .iter()
            .filter(|suggestion| suggestion.recommendation != Recommendation::NoChange)
    }
}
