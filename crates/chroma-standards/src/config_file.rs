#![deny(unsafe_code)]

//! On-disk TOML schema. Values stay raw strings until validated.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub palette: Option<PaletteSection>,
    #[serde(default)]
    pub scoring: Option<ScoringSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaletteSection {
    pub brand: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoringSection {
    #[serde(default)]
    pub ocr_confidence: Option<f64>,
    /// Vision mode name -> risk level name.
    #[serde(default)]
    pub impact: BTreeMap<String, String>,
}
