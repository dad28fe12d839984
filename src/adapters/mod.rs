//! Adapters layer: integration with the outside world.
//!
//! - `sanitize`: PII filtering for logs

pub mod sanitize;
