//! Core types for risk engine

use serde::{Deserialize, Serialize};

/// A single resolved questionnaire answer.
///
/// Weights arrive already resolved to the unit interval by the
/// questionnaire catalog; the engine never sees raw question definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// Question identifier (e.g., "health_insurance_coverage")
    pub question_id: String,

    /// Questionnaire category (e.g., "health", "financial")
    pub category: String,

    /// The option the user picked, verbatim
    pub value: String,

    /// Risk weight of the picked option, in [0, 1]
    pub risk_weight: f64,

    /// Optional impact weight in [0, 1]; falls back to `risk_weight`
    pub impact_weight: Option<f64>,
}

/// Risk level classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Overall score below 40
    Low,
    /// Overall score in [40, 70)
    Medium,
    /// Overall score of 70 or above
    High,
}

impl RiskLevel {
    /// Classify an overall score (0-100).
    pub fn from_score(score: f64) -> Self {
        if score < 40.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}

/// Computed risk breakdown for one category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Category identifier
    pub category: String,

    /// Weighted category score (0-100, 1 decimal)
    pub score: f64,

    /// Weight of this category in the overall score
    pub weight: f64,

    /// Potential impact sub-score (0-100)
    pub impact: f64,

    /// Probability sub-score (0-100)
    pub probability: f64,

    /// Vulnerability sub-score (0-100)
    pub vulnerability: f64,

    /// Insurance coverage sub-score (0-100)
    pub insurance_level: f64,
}

/// Full risk assessment result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskResult {
    /// Weight-normalized overall score (0-100, 1 decimal)
    pub overall_score: f64,

    /// Risk level classification
    pub level: RiskLevel,

    /// Per-category breakdown, in first-seen category order
    pub categories: Vec<CategoryScore>,

    /// Human-readable insights, in deterministic order
    pub insights: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_thresholds() {
        assert_eq!(RiskLevel::from_score(0.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(39.9), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(40.0), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(69.9), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(70.0), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(100.0), RiskLevel::High);
    }

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&RiskLevel::Medium).unwrap();
        assert_eq!(json, "\"medium\"");
    }
}
