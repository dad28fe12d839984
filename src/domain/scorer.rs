//! Additive heart disease risk heuristic.
//!
//! Each factor adds a fixed number of points; tiers within a factor are
//! checked top-down and the first match wins. No normalization, no negative
//! points. The function is total: every `HealthProfile` scores.

use super::assessment::{FactorContribution, RiskAssessment, RiskFactor, RiskLevel};
use super::profile::{ChestPainType, HealthProfile, Sex, Thalassemia};

const CHOLESTEROL_ADVISORY: &str = "Consider dietary changes to lower cholesterol levels";
const BLOOD_PRESSURE_ADVISORY: &str =
    "Monitor blood pressure regularly and maintain a healthy lifestyle";
const SMOKING_ADVISORY: &str = "Quit smoking to significantly reduce heart disease risk";
const WEIGHT_ADVISORY: &str = "Work on weight management through diet and exercise";
const STRESS_TEST_ADVISORY: &str =
    "Consider a cardiac stress test to evaluate your heart rate response";
const CARDIOLOGIST_ADVISORY: &str =
    "Regular follow-up with a cardiologist for thalassemia management";

/// Advisory strings in check order.
pub const ADVISORIES: [&str; 6] = [
    CHOLESTEROL_ADVISORY,
    BLOOD_PRESSURE_ADVISORY,
    SMOKING_ADVISORY,
    WEIGHT_ADVISORY,
    STRESS_TEST_ADVISORY,
    CARDIOLOGIST_ADVISORY,
];

/// Score a health profile.
#[must_use]
pub fn assess(profile: &HealthProfile) -> RiskAssessment {
    let contributions: Vec<FactorContribution> = RiskFactor::ALL
        .iter()
        .map(|&factor| FactorContribution {
            factor,
            points: factor_points(factor, profile),
        })
        .collect();

    let risk_score = contributions
        .iter()
        .fold(0_i32, |acc, c| acc.saturating_add(c.points));
    let risk_level = RiskLevel::from_score(risk_score);

    RiskAssessment {
        risk_score,
        risk_level,
        analysis: narrative(profile, risk_level),
        recommendations: recommendations(profile),
        contributions,
    }
}

/// Points a single factor adds for `profile`.
#[must_use]
pub fn factor_points(factor: RiskFactor, profile: &HealthProfile) -> i32 {
    match factor {
        RiskFactor::Age => {
            if profile.age > 60 {
                3
            } else if profile.age > 40 {
                2
            } else {
                1
            }
        }
        RiskFactor::Sex => match profile.sex {
            Sex::Male => 1,
            Sex::Female => 0,
        },
        RiskFactor::ChestPain => match profile.chest_pain_type {
            ChestPainType::Typical => 3,
            ChestPainType::Atypical => 2,
            ChestPainType::NonAnginal => 1,
            ChestPainType::Asymptomatic => 0,
        },
        RiskFactor::BloodPressure => {
            let resting = profile.resting_blood_pressure;
            let fasting = profile.fasting_blood_pressure;
            if resting > 140 || fasting > 130 {
                3
            } else if resting > 120 || fasting > 110 {
                2
            } else {
                0
            }
        }
        RiskFactor::Cholesterol => {
            if profile.cholesterol > 240 {
                3
            } else if profile.cholesterol > 200 {
                2
            } else {
                0
            }
        }
        RiskFactor::MaxHeartRate => {
            if profile.exceeds_predicted_max_heart_rate() {
                2
            } else {
                0
            }
        }
        RiskFactor::Thalassemia => match profile.thalassemia {
            Thalassemia::FixedDefect => 3,
            Thalassemia::ReversibleDefect => 2,
            Thalassemia::Normal => 0,
        },
        RiskFactor::Diabetes => flag_points(profile.has_diabetes),
        RiskFactor::Smoking => flag_points(profile.is_smoker),
        RiskFactor::Obesity => flag_points(profile.is_obese),
    }
}

fn flag_points(flag: bool) -> i32 {
    if flag {
        2
    } else {
        0
    }
}

/// Advisories for `profile`, in fixed check order (not ranked by severity).
#[must_use]
pub fn recommendations(profile: &HealthProfile) -> Vec<String> {
    let checks = [
        profile.cholesterol > 200,
        profile.resting_blood_pressure > 120,
        profile.is_smoker,
        profile.is_obese,
        profile.exceeds_predicted_max_heart_rate(),
        profile.thalassemia != Thalassemia::Normal,
    ];

    checks
        .iter()
        .zip(ADVISORIES)
        .filter(|(hit, _)| **hit)
        .map(|(_, advisory)| advisory.to_string())
        .collect()
}

/// Analysis narrative: fixed clauses joined by single spaces.
#[must_use]
pub fn narrative(profile: &HealthProfile, level: RiskLevel) -> String {
    let mut clauses = vec![
        format!(
            "Based on your health data, you show a {} risk of heart disease.",
            level.as_word()
        ),
        format!(
            "Your cholesterol level of {} mg/dL {} the recommended range.",
            profile.cholesterol,
            if profile.cholesterol > 200 {
                "is above"
            } else {
                "is within"
            }
        ),
        format!(
            "Resting blood pressure of {} mmHg {}.",
            profile.resting_blood_pressure,
            if profile.resting_blood_pressure > 120 {
                "indicates prehypertension"
            } else {
                "is normal"
            }
        ),
    ];

    if profile.chest_pain_type != ChestPainType::Asymptomatic {
        clauses.push(format!(
            "The presence of {} chest pain requires attention.",
            profile.chest_pain_type.tag()
        ));
    }
    if profile.thalassemia != Thalassemia::Normal {
        clauses.push("Your thalassemia status requires monitoring.".to_string());
    }
    if profile.is_smoker {
        clauses.push("Smoking significantly increases your risk.".to_string());
    }
    if profile.has_diabetes {
        clauses.push(
            "Having diabetes is a significant risk factor that requires careful management."
                .to_string(),
        );
    }

    clauses.join(" ")
}
