//! Domain layer: Core types and the risk heuristic.
//!
//! Pure Rust with no I/O. All types are serializable; the scorer is a total
//! function over every representable profile.

mod assessment;
mod profile;
pub mod scorer;

pub use assessment::{
    FactorContribution, RiskAssessment, RiskFactor, RiskLevel, LOW_RISK_MAX_SCORE,
    MODERATE_RISK_MAX_SCORE, NOMINAL_MAX_SCORE,
};
pub use profile::{ChestPainType, HealthProfile, Sex, Thalassemia, FIELD_NAMES};
pub use scorer::assess;
