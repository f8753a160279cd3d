use std::path::PathBuf;

use chroma_model::{AccessibilityReport, SimulatedColor, VisionMode};

#[derive(Debug)]
pub struct AnalyzeResult {
    pub report: AccessibilityReport,
    /// Config file in effect, `None` for built-in defaults.
    pub config_source: Option<PathBuf>,
    pub json_path: Option<PathBuf>,
}

impl AnalyzeResult {
    /// Failing grades make the command exit non-zero.
    pub fn has_failed(&self) -> bool {
        self.report.grade().is_failing()
    }
}

#[derive(Debug)]
pub struct SimulationResult {
    pub mode: VisionMode,
    pub colors: Vec<SimulatedColor>,
}
