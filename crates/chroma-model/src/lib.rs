pub mod color;
pub mod enums;
pub mod error;
pub mod report;
pub mod request;

pub use color::{Color, Palette, parse_palette};
pub use enums::{
    ComplianceLevel, ContrastFeedback, ExperienceRating, FailureSeverity, Grade, RiskLevel,
    VisionMode,
};
pub use error::{ChromaError, Result};
pub use report::{
    AccessibilityReport, ColorReportRow, ContrastEntry, ContrastFailure, ContrastStatistics,
    ModeSimulation, Recommendation, Recommendations, RiskAssessment, ScoreBreakdown,
    SimilarityEntry, SimulatedColor, Suggestion, TextAnalysis, TextBlockResult,
    TextContrastAnalysis, WcagSummary,
};
pub use request::{AnalysisRequest, LARGE_TEXT_MIN_CHARS, TextBlock};
