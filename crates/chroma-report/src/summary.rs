//! Score bands and the WCAG summary over pairwise palette contrasts.

use chroma_math::round2;
use chroma_model::{
    ColorReportRow, ComplianceLevel, ContrastFailure, ContrastFeedback, ContrastStatistics,
    ExperienceRating, Grade, Recommendations, RiskAssessment, RiskLevel, ScoreBreakdown,
    WcagSummary,
};
use chroma_validate::{LARGE_TEXT_THRESHOLD, NORMAL_TEXT_THRESHOLD};

pub const FAILED_ISSUE: &str = "WCAG AA compliance failed";

pub fn grade(score: u8) -> Grade {
    match score {
        95.. => Grade::APlus,
        90..=94 => Grade::A,
        80..=89 => Grade::B,
        70..=79 => Grade::C,
        60..=69 => Grade::D,
        _ => Grade::F,
    }
}

pub fn compliance_level(score: u8) -> ComplianceLevel {
    match score {
        95.. => ComplianceLevel::Aaa,
        80..=94 => ComplianceLevel::Aa,
        60..=79 => ComplianceLevel::A,
        _ => ComplianceLevel::NotCompliant,
    }
}

pub fn risk_assessment(score: u8) -> RiskAssessment {
    let legal = match score {
        0..=59 => RiskLevel::High,
        60..=79 => RiskLevel::Medium,
        _ => RiskLevel::Low,
    };
    let user_experience = match score {
        0..=79 => ExperienceRating::Poor,
        80..=94 => ExperienceRating::Moderate,
        _ => ExperienceRating::Good,
    };
    let brand = if score < 80 {
        RiskLevel::High
    } else {
        RiskLevel::Low
    };
    RiskAssessment {
        legal,
        user_experience,
        brand,
    }
}

/// Action items for a score band. Lower bands get more urgent advice.
pub fn recommendations(score: u8) -> Recommendations {
    let [immediate, short_term, long_term] = match score {
        0..=59 => [
            "Critical: Fix all contrast failures immediately for basic accessibility",
            "Implement comprehensive color palette review",
            "Consider accessibility audit by certified professional",
        ],
        60..=79 => [
            "Address medium contrast issues for improved readability",
            "Test with actual users with varying vision abilities",
            "Implement automated accessibility testing in CI/CD pipeline",
        ],
        80..=94 => [
            "Optimize remaining contrast issues for AAA compliance",
            "Consider implementing dark mode variants",
            "Develop accessibility-first design system",
        ],
        _ => [
            "Maintain current accessibility standards",
            "Regular accessibility audits and user testing",
            "Explore advanced accessibility features like voice navigation",
        ],
    };
    Recommendations {
        immediate: vec![immediate.to_string()],
        short_term: vec![short_term.to_string()],
        long_term: vec![long_term.to_string()],
    }
}

/// Distribution of every pairwise ratio in the rows.
pub fn contrast_statistics(rows: &[ColorReportRow]) -> ContrastStatistics {
    let ratios: Vec<f64> = rows
        .iter()
        .flat_map(|row| row.contrasts.iter().map(|entry| entry.ratio))
        .collect();
    if ratios.is_empty() {
        return ContrastStatistics::default();
    }
    ContrastStatistics {
        total: ratios.len(),
        good: ratios.iter().filter(|r| **r >= NORMAL_TEXT_THRESHOLD).count(),
        medium: ratios
            .iter()
            .filter(|r| (LARGE_TEXT_THRESHOLD..NORMAL_TEXT_THRESHOLD).contains(*r))
            .count(),
        poor: ratios.iter().filter(|r| **r < LARGE_TEXT_THRESHOLD).count(),
        worst: ratios.iter().copied().min_by(f64::total_cmp),
        best: ratios.iter().copied().max_by(f64::total_cmp),
        average: Some(round2(ratios.iter().sum::<f64>() / ratios.len() as f64)),
    }
}

/// WCAG summary over all pairwise contrasts.
///
/// A pair passes when its feedback is `Pass` or `PassWarning`; only `Fail`
/// pairs become failure records.
pub fn wcag_summary(rows: &[ColorReportRow], breakdown: ScoreBreakdown) -> WcagSummary {
    let mut total_tests = 0;
    let mut passed_tests = 0;
    let mut failures = Vec::new();
    for row in rows {
        for entry in &row.contrasts {
            total_tests += 1;
            if entry.feedback.is_acceptable() {
                passed_tests += 1;
            } else {
                failures.push(ContrastFailure {
                    color: row.color,
                    other: entry.other,
                    ratio: entry.ratio,
                    feedback: ContrastFeedback::Fail,
                    issue: FAILED_ISSUE.to_string(),
                });
            }
        }
    }
    let pass_rate = if total_tests == 0 {
        0
    } else {
        // a percentage, so the cast stays within u8
        (passed_tests as f64 / total_tests as f64 * 100.0).round() as u8
    };
    let overall_score = breakdown.overall_score;
    WcagSummary {
        total_tests,
        passed_tests,
        failed_tests: total_tests - passed_tests,
        pass_rate,
        failures,
        overall_score,
        grade: grade(overall_score),
        level: compliance_level(overall_score),
        breakdown,
        risk: risk_assessment(overall_score),
    }
}
