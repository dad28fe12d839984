//! Risk assessment result types.
//!
//! Represents the output of the additive heart disease risk heuristic.

use serde::{Deserialize, Serialize};

/// Highest score reachable for a plausible profile, used for display.
pub const NOMINAL_MAX_SCORE: i32 = 25;

/// Highest score still classified as low risk.
pub const LOW_RISK_MAX_SCORE: i32 = 8;

/// Highest score still classified as moderate risk.
pub const MODERATE_RISK_MAX_SCORE: i32 = 15;

/// Risk level classification for heart disease.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    /// Low risk of heart disease
    Low,
    /// Moderate risk, monitoring recommended
    Moderate,
    /// High risk, consultation recommended
    High,
}

impl RiskLevel {
    /// Classify a risk score.
    ///
    /// Step function with no gap or overlap: `..=8` low, `9..=15` moderate,
    /// `16..` high.
    #[must_use]
    pub fn from_score(score: i32) -> Self {
        if score <= LOW_RISK_MAX_SCORE {
            Self::Low
        } else if score <= MODERATE_RISK_MAX_SCORE {
            Self::Moderate
        } else {
            Self::High
        }
    }

    /// Get a human-readable description.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::Low => "Low risk - Few contributing factors",
            Self::Moderate => "Moderate risk - Follow-up recommended",
            Self::High => "High risk - Consultation advised",
        }
    }

    /// Get the associated color for TUI display (RGB).
    #[must_use]
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Low => (16, 185, 129),      // Emerald (#10B981)
            Self::Moderate => (251, 191, 36), // Amber (#FBBF24)
            Self::High => (244, 63, 94),      // Rose (#F43F5E)
        }
    }

    /// Lowercase word used inside the narrative.
    #[must_use]
    pub fn as_word(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Moderate => write!(f, "MODERATE"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Scored factors, in scoring table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RiskFactor {
    Age,
    Sex,
    ChestPain,
    BloodPressure,
    Cholesterol,
    MaxHeartRate,
    Thalassemia,
    Diabetes,
    Smoking,
    Obesity,
}

impl RiskFactor {
    /// All factors in the order they are scored.
    pub const ALL: [RiskFactor; 10] = [
        Self::Age,
        Self::Sex,
        Self::ChestPain,
        Self::BloodPressure,
        Self::Cholesterol,
        Self::MaxHeartRate,
        Self::Thalassemia,
        Self::Diabetes,
        Self::Smoking,
        Self::Obesity,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Age => "Age",
            Self::Sex => "Sex",
            Self::ChestPain => "Chest pain",
            Self::BloodPressure => "Blood pressure",
            Self::Cholesterol => "Cholesterol",
            Self::MaxHeartRate => "Max heart rate",
            Self::Thalassemia => "Thalassemia",
            Self::Diabetes => "Diabetes",
            Self::Smoking => "Smoking",
            Self::Obesity => "Obesity",
        }
    }
}

/// Points one factor added to the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactorContribution {
    pub factor: RiskFactor,
    pub points: i32,
}

/// Result of scoring one health profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Sum of all factor contributions (not clamped)
    pub risk_score: i32,

    /// Classification of `risk_score`
    pub risk_level: RiskLevel,

    /// Narrative built from the profile
    pub analysis: String,

    /// Advisories in fixed check order
    pub recommendations: Vec<String>,

    /// Per-factor breakdown, one entry per factor in scoring order
    pub contributions: Vec<FactorContribution>,
}

impl RiskAssessment {
    /// Points contributed by a single factor.
    #[must_use]
    pub fn points_for(&self, factor: RiskFactor) -> i32 {
        self.contributions
            .iter()
            .filter(|c| c.factor == factor)
            .map(|c| c.points)
            .sum()
    }

    /// Score as a fraction of the nominal maximum, clamped to `[0, 1]` for gauges.
    #[must_use]
    pub fn score_ratio(&self) -> f64 {
        (f64::from(self.risk_score) / f64::from(NOMINAL_MAX_SCORE)).clamp(0.0, 1.0)
    }
}
