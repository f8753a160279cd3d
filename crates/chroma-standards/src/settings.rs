#![deny(unsafe_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use chroma_model::{Color, Palette, RiskLevel, VisionMode};

use crate::config_file::{ConfigFile, PaletteSection, ScoringSection};
use crate::error::ConfigError;
use crate::paths::config_path;

/// Brand colors compared against every extracted color, in suggestion order.
pub const DEFAULT_BRAND_PALETTE: [Color; 6] = [
    Color::new(0xFF, 0x00, 0x00), // red
    Color::new(0x00, 0x00, 0xFF), // blue
    Color::new(0xFF, 0xA5, 0x00), // orange
    Color::new(0x80, 0x00, 0x80), // purple
    Color::new(0xFF, 0xFF, 0x00), // yellow
    Color::new(0x00, 0x80, 0x00), // green
];

/// Assumed OCR confidence (percent). Not measured from the OCR engine.
pub const DEFAULT_OCR_CONFIDENCE: f64 = 85.0;

/// Externally supplied inputs to the scoring engine.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringSettings {
    /// Percentage in [0, 100].
    pub ocr_confidence: f64,
    /// Replaces the computed simulation impact for the listed modes.
    pub impact_overrides: BTreeMap<VisionMode, RiskLevel>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            ocr_confidence: DEFAULT_OCR_CONFIDENCE,
            impact_overrides: BTreeMap::new(),
        }
    }
}

impl ScoringSettings {
    #[must_use]
    pub fn with_ocr_confidence(mut self, confidence: f64) -> Self {
        self.ocr_confidence = confidence;
        self
    }

    #[must_use]
    pub fn with_impact(mut self, mode: VisionMode, impact: RiskLevel) -> Self {
        self.impact_overrides.insert(mode, impact);
        self
    }

    pub fn impact_override(&self, mode: VisionMode) -> Option<RiskLevel> {
        self.impact_overrides.get(&mode).copied()
    }
}

/// Validated configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ChromaConfig {
    pub brand_palette: Palette,
    pub scoring: ScoringSettings,
    /// File the config was loaded from, `None` for built-in defaults.
    pub source: Option<PathBuf>,
}

impl Default for ChromaConfig {
    fn default() -> Self {
        Self {
            brand_palette: DEFAULT_BRAND_PALETTE.to_vec(),
            scoring: ScoringSettings::default(),
            source: None,
        }
    }
}

impl ChromaConfig {
    /// Load from an explicit path, `CHROMA_CONFIG`, or fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match config_path(explicit) {
            Some(path) => Self::load(&path),
            None => {
                debug!("no config file given, using built-in defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, e))?;
        let file: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })?;
        let mut config = Self::from_file(file)?;
        config.source = Some(path.to_path_buf());
        debug!(
            path = %path.display(),
            brand_colors = config.brand_palette.len(),
            "loaded config"
        );
        Ok(config)
    }

    pub fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let brand_palette = match file.palette {
            Some(section) => parse_brand(&section)?,
            None => DEFAULT_BRAND_PALETTE.to_vec(),
        };
        let scoring = match file.scoring {
            Some(section) => parse_scoring(&section)?,
            None => ScoringSettings::default(),
        };
        Ok(Self {
            brand_palette,
            scoring,
            source: None,
        })
    }

    #[must_use]
    pub fn with_brand_palette(mut self, palette: Palette) -> Self {
        self.brand_palette = palette;
        self
    }

    #[must_use]
    pub fn with_scoring(mut self, scoring: ScoringSettings) -> Self {
        self.scoring = scoring;
        self
    }
}

fn parse_brand(section: &PaletteSection) -> Result<Palette, ConfigError> {
    if section.brand.is_empty() {
        return Err(ConfigError::invalid(
            "palette.brand must list at least one color",
        ));
    }
    section
        .brand
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Color::from_hex(value).map_err(|source| ConfigError::InvalidColor {
                field: format!("palette.brand[{index}]"),
                source,
            })
        })
        .collect()
}

fn parse_scoring(section: &ScoringSection) -> Result<ScoringSettings, ConfigError> {
    let mut settings = ScoringSettings::default();
    if let Some(confidence) = section.ocr_confidence {
        if !(0.0..=100.0).contains(&confidence) {
            return Err(ConfigError::invalid(format!(
                "scoring.ocr_confidence must be within 0..=100, got {confidence}"
            )));
        }
        settings.ocr_confidence = confidence;
    }
    for (mode_name, impact_name) in &section.impact {
        let mode: VisionMode = mode_name.parse().map_err(ConfigError::invalid)?;
        if mode.is_normal() {
            return Err(ConfigError::invalid(
                "scoring.impact cannot override normal vision",
            ));
        }
        let impact: RiskLevel = impact_name.parse().map_err(ConfigError::invalid)?;
        settings.impact_overrides.insert(mode, impact);
    }
    Ok(settings)
}
