//! Type-safe enumerations for accessibility judgments.
//!
//! These replace the free-form feedback strings ("Pass ✅", "High", "AA")
//! that report consumers used to match on.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Contrast feedback on the WCAG ladder (4.5 / 3.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContrastFeedback {
    /// Ratio meets the pass threshold.
    Pass,
    /// Ratio is at least 3.0 but below 4.5; usable for large text only.
    PassWarning,
    /// Ratio is below 3.0.
    Fail,
}

impl ContrastFeedback {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContrastFeedback::Pass => "Pass",
            ContrastFeedback::PassWarning => "Pass (warning)",
            ContrastFeedback::Fail => "Fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ContrastFeedback::Pass)
    }

    /// Passing with or without a warning.
    pub fn is_acceptable(&self) -> bool {
        !matches!(self, ContrastFeedback::Fail)
    }
}

impl fmt::Display for ContrastFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Accessibility risk derived from a contrast ratio or an overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LOW" => Ok(RiskLevel::Low),
            "MEDIUM" => Ok(RiskLevel::Medium),
            "HIGH" => Ok(RiskLevel::High),
            _ => Err(format!("Unknown risk level: {s}")),
        }
    }
}

/// Severity band of a failing text-relevant contrast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureSeverity {
    /// Ratio below 2.0.
    Critical,
    /// Ratio in [2.0, 3.0).
    Moderate,
    /// Ratio at or above 3.0 but under the pass threshold.
    Minor,
}

impl FailureSeverity {
    /// Score points deducted per failure of this severity.
    pub fn penalty(&self) -> f64 {
        match self {
            FailureSeverity::Critical => 5.0,
            FailureSeverity::Moderate => 3.0,
            FailureSeverity::Minor => 1.0,
        }
    }
}

/// Simulated color vision.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum VisionMode {
    #[default]
    Normal,
    /// Red-blind.
    Protanopia,
    /// Green-blind.
    Deuteranopia,
    /// Blue-blind.
    Tritanopia,
    /// Complete color blindness (grayscale).
    Achromatopsia,
}

impl VisionMode {
    pub const ALL: [VisionMode; 5] = [
        VisionMode::Normal,
        VisionMode::Protanopia,
        VisionMode::Deuteranopia,
        VisionMode::Tritanopia,
        VisionMode::Achromatopsia,
    ];

    /// Every mode that actually alters colors.
    pub const DEFICIENCIES: [VisionMode; 4] = [
        VisionMode::Protanopia,
        VisionMode::Deuteranopia,
        VisionMode::Tritanopia,
        VisionMode::Achromatopsia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VisionMode::Normal => "normal",
            VisionMode::Protanopia => "protanopia",
            VisionMode::Deuteranopia => "deuteranopia",
            VisionMode::Tritanopia => "tritanopia",
            VisionMode::Achromatopsia => "achromatopsia",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            VisionMode::Normal => "Normal Vision",
            VisionMode::Protanopia => "Protanopia",
            VisionMode::Deuteranopia => "Deuteranopia",
            VisionMode::Tritanopia => "Tritanopia",
            VisionMode::Achromatopsia => "Achromatopsia",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            VisionMode::Normal => "Standard color perception",
            VisionMode::Protanopia => "Red color blindness (affects ~1% of males)",
            VisionMode::Deuteranopia => "Green color blindness (affects ~1% of males)",
            VisionMode::Tritanopia => {
                "Blue color blindness (rare, affects <0.01% of population)"
            }
            VisionMode::Achromatopsia => "Complete color blindness (very rare)",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, VisionMode::Normal)
    }
}

impl fmt::Display for VisionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VisionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(VisionMode::Normal),
            "protanopia" | "protan" => Ok(VisionMode::Protanopia),
            "deuteranopia" | "deutan" => Ok(VisionMode::Deuteranopia),
            "tritanopia" | "tritan" => Ok(VisionMode::Tritanopia),
            "achromatopsia" | "grayscale" => Ok(VisionMode::Achromatopsia),
            _ => Err(format!("Unknown vision mode: {s}")),
        }
    }
}

/// Letter grade for the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Grade::APlus => "Excellent - Exceeds WCAG AAA standards",
            Grade::A => "Excellent - Meets WCAG AAA standards",
            Grade::B => "Good - Meets WCAG AA standards",
            Grade::C => "Fair - Partial WCAG compliance",
            Grade::D => "Poor - Major accessibility issues",
            Grade::F => "Fail - Does not meet accessibility standards",
        }
    }

    pub fn is_failing(&self) -> bool {
        matches!(self, Grade::F)
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// WCAG conformance level implied by the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceLevel {
    #[serde(rename = "AAA")]
    Aaa,
    #[serde(rename = "AA")]
    Aa,
    A,
    #[serde(rename = "Not Compliant")]
    NotCompliant,
}

impl ComplianceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceLevel::Aaa => "AAA",
            ComplianceLevel::Aa => "AA",
            ComplianceLevel::A => "A",
            ComplianceLevel::NotCompliant => "Not Compliant",
        }
    }
}

impl fmt::Display for ComplianceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// User experience rating in the risk assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceRating {
    Poor,
    Moderate,
    Good,
}

impl ExperienceRating {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceRating::Poor => "Poor",
            ExperienceRating::Moderate => "Moderate",
            ExperienceRating::Good => "Good",
        }
    }
}

impl fmt::Display for ExperienceRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
