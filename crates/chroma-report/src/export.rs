use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use chroma_model::AccessibilityReport;

/// Pretty-printed JSON of a report.
pub fn to_json_string(report: &AccessibilityReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize accessibility report")
}

/// Write a report as pretty JSON, creating parent directories as needed.
pub fn write_json_report(report: &AccessibilityReport, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
    }
    let json = to_json_string(report)?;
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    info!(path = %path.display(), "wrote JSON report");
    Ok(())
}
