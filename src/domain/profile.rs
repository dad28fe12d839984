//! Health profile types for heart disease risk screening.
//!
//! A profile is the typed record the form hands to the scorer. Values are
//! stored as entered; plausibility checks belong to the form layer, so the
//! scorer can stay total over every representable profile.

use serde::{Deserialize, Serialize};

/// Biological sex as selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Form order; the first entry is the form default.
    pub const ALL: [Sex; 2] = [Self::Male, Self::Female];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// Reported chest pain character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChestPainType {
    /// Typical angina
    Typical,
    /// Atypical angina
    Atypical,
    /// Non-anginal pain
    NonAnginal,
    /// No chest pain
    Asymptomatic,
}

impl ChestPainType {
    /// Form order; the first entry is the form default.
    pub const ALL: [ChestPainType; 4] = [
        Self::Typical,
        Self::Atypical,
        Self::NonAnginal,
        Self::Asymptomatic,
    ];

    /// Short tag used in the analysis narrative and on the wire.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Typical => "typical",
            Self::Atypical => "atypical",
            Self::NonAnginal => "nonanginal",
            Self::Asymptomatic => "asymptomatic",
        }
    }

    /// Form label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Typical => "Typical Angina",
            Self::Atypical => "Atypical Angina",
            Self::NonAnginal => "Non-anginal Pain",
            Self::Asymptomatic => "Asymptomatic",
        }
    }
}

/// Thalassemia test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Thalassemia {
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "fixed")]
    FixedDefect,
    #[serde(rename = "reversible")]
    ReversibleDefect,
}

impl Thalassemia {
    /// Form order; the first entry is the form default.
    pub const ALL: [Thalassemia; 3] = [Self::Normal, Self::FixedDefect, Self::ReversibleDefect];

    /// Form label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::FixedDefect => "Fixed Defect",
            Self::ReversibleDefect => "Reversible Defect",
        }
    }
}

/// Health inputs for one risk assessment.
///
/// Integer fields are signed on purpose: nonsensical values such as a negative
/// age are representable and still score without failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in years
    pub age: i32,

    pub sex: Sex,

    pub chest_pain_type: ChestPainType,

    /// Resting blood pressure in mmHg
    pub resting_blood_pressure: i32,

    /// Second blood pressure reading in mmHg.
    ///
    /// Named after the fasting measurement convention, but scored as a
    /// blood pressure value.
    pub fasting_blood_pressure: i32,

    /// Serum cholesterol in mg/dL
    pub cholesterol: i32,

    /// Maximum heart rate achieved, beats/min
    pub max_heart_rate: i32,

    pub thalassemia: Thalassemia,

    pub has_diabetes: bool,
    pub is_smoker: bool,
    pub is_obese: bool,
}

impl HealthProfile {
    /// Age-predicted maximum heart rate (`220 - age`).
    ///
    /// Saturates instead of overflowing for extreme ages.
    #[must_use]
    pub fn predicted_max_heart_rate(&self) -> i32 {
        220_i32.saturating_sub(self.age)
    }

    /// Whether the recorded maximum heart rate exceeds the age-predicted one.
    #[must_use]
    pub fn exceeds_predicted_max_heart_rate(&self) -> bool {
        self.max_heart_rate > self.predicted_max_heart_rate()
    }
}

/// Field names in form order, as they appear on the wire.
pub const FIELD_NAMES: [&str; 11] = [
    "age",
    "sex",
    "chestPainType",
    "restingBloodPressure",
    "fastingBloodPressure",
    "cholesterol",
    "maxHeartRate",
    "thalassemia",
    "hasDiabetes",
    "isSmoker",
    "isObese",
];
