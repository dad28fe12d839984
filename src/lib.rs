//! # Heartcheck
//!
//! Local heart disease risk screening.
//!
//! This crate provides:
//! - A fixed additive scoring heuristic over a health profile
//! - Risk tiers, a narrative analysis and lifestyle advisories
//! - Terminal UI for local-only use, plus a headless JSON assessor
//!
//! ## Architecture
//!
//! - `domain`: Core types (HealthProfile, RiskAssessment) and the scorer
//! - `application`: The prediction session (collecting vs showing a result)
//! - `adapters`: Log sanitization
//! - `config`: Environment configuration
//! - `content`: Static informational text
//! - `tui`: Terminal user interface

pub mod adapters;
pub mod application;
pub mod config;
pub mod content;
pub mod domain;
pub mod tui;

pub use domain::{assess, HealthProfile, RiskAssessment, RiskLevel};

/// Result type for Heartcheck operations
pub type Result<T> = std::result::Result<T, HeartcheckError>;

/// Main error type for Heartcheck
#[derive(Debug, thiserror::Error)]
pub enum HeartcheckError {
    #[error("Invalid health profile: {0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_maps_to_serialization() {
        let err: HeartcheckError = serde_json::from_str::<HealthProfile>("{")
            .map_err(HeartcheckError::from)
            .unwrap_err();
        assert!(matches!(err, HeartcheckError::Serialization(_)));
    }
}
