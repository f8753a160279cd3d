//! Build an analysis request from an input file and command-line values.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use chroma_model::{AnalysisRequest, VisionMode, parse_palette};

/// Where the pieces of a request come from.
#[derive(Debug, Clone, Default)]
pub struct RequestSources {
    pub input: Option<PathBuf>,
    pub palette: Vec<String>,
    pub text: Option<String>,
    pub text_file: Option<PathBuf>,
    pub simulate: Vec<VisionMode>,
    pub all_modes: bool,
    pub image_name: Option<String>,
}

pub fn read_request_file(path: &Path) -> Result<AnalysisRequest> {
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parse {}", path.display()))
}

/// Merge the sources into one request.
///
/// The input file is the base; a non-empty `--palette`, text options and
/// `--image-name` replace its fields. Modes are appended.
pub fn build_request(sources: &RequestSources) -> Result<AnalysisRequest> {
    let mut request = match &sources.input {
        Some(path) => read_request_file(path)?,
        None => AnalysisRequest::default(),
    };

    if !sources.palette.is_empty() {
        request.palette = parse_palette(&sources.palette).context("parse --palette")?;
    }
    if let Some(text) = &sources.text {
        request.text = Some(text.clone());
    } else if let Some(path) = &sources.text_file {
        let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        request.text = Some(text);
    }
    if let Some(name) = &sources.image_name {
        request.image_name = Some(name.clone());
    } else if request.image_name.is_none() {
        request.image_name = sources
            .input
            .as_ref()
            .map(|path| path.display().to_string());
    }

    request.simulation_modes.extend(sources.simulate.iter().copied());
    if sources.all_modes {
        request.simulation_modes.extend(VisionMode::DEFICIENCIES);
    }

    if request.palette.is_empty() {
        warn!("no palette colors supplied; scores fall back to defaults");
    }
    if !request.has_text() {
        warn!("no OCR text or text blocks supplied; text readability uses its default");
    }
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chroma_model::Color;

    #[test]
    fn palette_flag_builds_request() {
        let sources = RequestSources {
            palette: vec!["#ffffff".to_string(), "000000".to_string()],
            simulate: vec![VisionMode::Protanopia],
            all_modes: true,
            ..RequestSources::default()
        };
        let request = build_request(&sources).unwrap();
        assert_eq!(request.palette, vec![Color::WHITE, Color::BLACK]);
        assert_eq!(request.simulation_modes.len(), 5);
        assert_eq!(request.deficiency_modes().len(), 4);
        assert_eq!(request.image_name, None);
    }

    #[test]
    fn blank_text_is_reported_as_missing() {
        let palette_only = RequestSources {
            palette: vec!["#ffffff".to_string()],
            ..RequestSources::default()
        };
        assert!(!build_request(&palette_only).unwrap().has_text());

        let blank = RequestSources {
            text: Some("  \n".to_string()),
            ..palette_only.clone()
        };
        assert!(!build_request(&blank).unwrap().has_text());

        let with_text = RequestSources {
            text: Some("Summer sale".to_string()),
            ..palette_only
        };
        assert!(build_request(&with_text).unwrap().has_text());
    }

    #[test]
    fn invalid_palette_color_is_an_error() {
        let sources = RequestSources {
            palette: vec!["#fff".to_string()],
            ..RequestSources::default()
        };
        let err = build_request(&sources).unwrap_err();
        assert!(format!("{err:#}").contains("#fff"));
    }
}
