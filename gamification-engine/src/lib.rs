//! Gamification Engine for RiskPulse
//!
//! Drives the engagement layer: levels, badges, and missions. Holds static
//! catalogs loaded once at construction and, given a user's accumulated
//! progress plus contextual facts, determines level, unlock eligibility,
//! and points. Pure and synchronous; all durable state lives with the
//! persistence collaborator.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod catalog;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

pub use catalog::Catalog;
pub use engine::GamificationEngine;
pub use error::{Error, Result};
pub use types::*;
