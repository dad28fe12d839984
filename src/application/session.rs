//! Prediction session: the form/result two-state machine.
//!
//! The session either collects input or shows the result of the last
//! submission. Transitions are explicit; there is no nullable result to keep
//! in sync with a flag.

use chrono::{DateTime, Local};

use crate::domain::{assess, HealthProfile, RiskAssessment, RiskLevel};

/// A result being shown, with the local time it was produced.
#[derive(Debug, Clone)]
pub struct ShownAssessment {
    pub assessment: RiskAssessment,
    pub assessed_at: DateTime<Local>,
}

/// State of the prediction page.
#[derive(Debug, Clone, Default)]
pub enum PredictionSession {
    /// Form is being filled in
    #[default]
    Collecting,
    /// Result of the last submission is displayed
    Showing(ShownAssessment),
}

impl PredictionSession {
    /// Score `profile` and move to `Showing`.
    ///
    /// Submitting while already showing replaces the previous result.
    /// Returns the level of the new result.
    pub fn submit(&mut self, profile: &HealthProfile) -> RiskLevel {
        let assessment = assess(profile);

        // Level and score only; raw health values stay out of the log.
        tracing::info!(
            "Assessment complete: score={}, risk={}, recommendations={}",
            assessment.risk_score,
            assessment.risk_level,
            assessment.recommendations.len()
        );

        let level = assessment.risk_level;
        *self = Self::Showing(ShownAssessment {
            assessment,
            assessed_at: Local::now(),
        });
        level
    }

    /// Return to `Collecting`, dropping any shown result.
    pub fn reset(&mut self) {
        if self.is_showing() {
            tracing::debug!("Prediction session reset");
        }
        *self = Self::Collecting;
    }

    #[must_use]
    pub fn is_showing(&self) -> bool {
        matches!(self, Self::Showing(_))
    }

    /// The shown assessment, if any.
    #[must_use]
    pub fn assessment(&self) -> Option<&RiskAssessment> {
        match self {
            Self::Showing(shown) => Some(&shown.assessment),
            Self::Collecting => None,
        }
    }

    #[must_use]
    pub fn shown(&self) -> Option<&ShownAssessment> {
        match self {
            Self::Showing(shown) => Some(shown),
            Self::Collecting => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChestPainType, Sex, Thalassemia};

    fn profile(age: i32) -> HealthProfile {
        HealthProfile {
            age,
            sex: Sex::Male,
            chest_pain_type: ChestPainType::Atypical,
            resting_blood_pressure: 125,
            fasting_blood_pressure: 100,
            cholesterol: 210,
            max_heart_rate: 140,
            thalassemia: Thalassemia::Normal,
            has_diabetes: false,
            is_smoker: false,
            is_obese: false,
        }
    }

    #[test]
    fn test_starts_collecting() {
        let session = PredictionSession::default();
        assert!(!session.is_showing());
        assert!(session.assessment().is_none());
    }

    #[test]
    fn test_submit_then_reset() {
        let mut session = PredictionSession::default();
        let level = session.submit(&profile(50));

        assert_eq!(level, RiskLevel::Moderate);
        assert!(session.is_showing());
        // 2 age + 1 sex + 2 pain + 2 bp + 2 cholesterol
        assert_eq!(session.assessment().map(|a| a.risk_score), Some(9));

        session.reset();
        assert!(!session.is_showing());
        assert!(session.shown().is_none());
    }

    #[test]
    fn test_resubmit_replaces_result() {
        let mut session = PredictionSession::default();
        session.submit(&profile(30));
        session.submit(&profile(70));
        assert_eq!(session.assessment().map(|a| a.risk_score), Some(10));
    }
}
