//! Application layer: the prediction page workflow.
//!
//! Drives the domain scorer from user submissions and holds the
//! currently shown result.

mod session;

pub use session::{PredictionSession, ShownAssessment};
