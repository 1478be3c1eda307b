//! Risk Engine for RiskPulse
//!
//! Computes a personalized risk index from categorized, weighted
//! questionnaire answers: per-category sub-scores, a weight-normalized
//! overall score, a low/medium/high classification, and human-readable
//! insights. Pure and synchronous; callers own all I/O.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod insights;
pub mod scoring;
pub mod types;

pub use config::ScoringConfig;
pub use error::{Error, Result};
pub use scoring::RiskScorer;
pub use types::*;
