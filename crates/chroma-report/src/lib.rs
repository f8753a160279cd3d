//! Accessibility report assembly.
//!
//! - **assemble**: runs every analysis stage over a request
//! - **summary**: WCAG pass/fail summary, grade and compliance bands
//! - **export**: JSON output

mod assemble;
mod export;
mod image_name;
mod summary;

pub use assemble::{color_rows, compute_report, compute_report_at};
pub use export::{to_json_string, write_json_report};
pub use image_name::{UNKNOWN_IMAGE, UPLOADED_IMAGE, extract_image_name};
pub use summary::{
    FAILED_ISSUE, compliance_level, contrast_statistics, grade, recommendations,
    risk_assessment, wcag_summary,
};

pub use chroma_validate::analyze_text_blocks as text_contrast_analysis;
