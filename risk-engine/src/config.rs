//! Scoring configuration

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Scoring configuration
///
/// Component weights combine the four per-category sub-scores into a
/// category score; category weights combine category scores into the
/// overall score. The defaults are the product formula:
/// score = probability*0.3 + impact*0.4 + vulnerability*0.2 - insurance*0.1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Weight of the probability sub-score
    pub probability_weight: f64,

    /// Weight of the impact sub-score
    pub impact_weight: f64,

    /// Weight of the vulnerability sub-score
    pub vulnerability_weight: f64,

    /// Weight of the insurance sub-score (subtracted from the raw score)
    pub insurance_weight: f64,

    /// Per-category weights used in the overall score
    pub category_weights: HashMap<String, f64>,

    /// Weight applied to categories missing from `category_weights`
    pub default_category_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let category_weights = [
            ("health", 0.25),
            ("financial", 0.30),
            ("auto", 0.15),
            ("home", 0.20),
            ("insurance", 0.10),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            probability_weight: 0.3,
            impact_weight: 0.4,
            vulnerability_weight: 0.2,
            insurance_weight: 0.1,
            category_weights,
            default_category_weight: 0.2,
        }
    }
}

impl ScoringConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let components = [
            ("probability_weight", self.probability_weight),
            ("impact_weight", self.impact_weight),
            ("vulnerability_weight", self.vulnerability_weight),
            ("insurance_weight", self.insurance_weight),
            ("default_category_weight", self.default_category_weight),
        ];
        for (name, weight) in components {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "{} must be a positive number, got {}",
                    name, weight
                )));
            }
        }

        for (category, weight) in &self.category_weights {
            if !weight.is_finite() || *weight <= 0.0 {
                return Err(Error::InvalidConfig(format!(
                    "Category weight for '{}' must be a positive number, got {}",
                    category, weight
                )));
            }
        }

        Ok(())
    }

    /// Weight of a category in the overall score.
    ///
    /// Unknown categories fall back to the default weight so the engine
    /// degrades gracefully when the questionnaire catalog evolves.
    pub fn category_weight(&self, category: &str) -> f64 {
        self.category_weights
            .get(category)
            .copied()
            .unwrap_or(self.default_category_weight)
    }
}
