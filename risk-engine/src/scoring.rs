//! Risk scoring engine

use crate::insights;
use crate::{Answer, CategoryScore, Error, Result, RiskLevel, RiskResult, ScoringConfig};

/// Substrings of `question_id` that mark an answer as insurance-related
const INSURANCE_MARKERS: [&str; 2] = ["insurance", "policy"];

/// Risk scorer
pub struct RiskScorer {
    config: ScoringConfig,
}

impl RiskScorer {
    /// Create a new risk scorer with the given configuration.
    pub fn new(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Compute the full risk assessment for a set of answers.
    ///
    /// Fails with `InvalidInput` when `answers` is empty; the caller must
    /// have confirmed that at least one questionnaire was completed.
    pub fn compute_risk_score(&self, answers: &[Answer]) -> Result<RiskResult> {
        if answers.is_empty() {
            return Err(Error::InvalidInput(
                "No answers to score; complete at least one questionnaire".to_string(),
            ));
        }

        let categories: Vec<CategoryScore> = group_by_category(answers)
            .into_iter()
            .map(|(category, group)| self.score_category(category, &group))
            .collect();

        let overall_score = round1(self.overall_score(&categories));
        let level = RiskLevel::from_score(overall_score);
        let insights = insights::generate(&categories, overall_score);

        tracing::debug!(
            overall_score,
            categories = categories.len(),
            "Computed risk score"
        );

        Ok(RiskResult {
            overall_score,
            level,
            categories,
            insights,
        })
    }

    /// Score one category from its answers (always at least one).
    fn score_category(&self, category: String, answers: &[&Answer]) -> CategoryScore {
        let probability = probability(answers);
        let impact = impact(answers);
        let vulnerability = vulnerability(answers);
        let insurance_level = insurance_level(answers);

        let raw_score = probability * self.config.probability_weight
            + impact * self.config.impact_weight
            + vulnerability * self.config.vulnerability_weight
            - insurance_level * self.config.insurance_weight;

        let score = round1(raw_score.clamp(0.0, 100.0));
        let weight = self.config.category_weight(&category);

        CategoryScore {
            category,
            score,
            weight,
            impact,
            probability,
            vulnerability,
            insurance_level,
        }
    }

    /// Weighted average of category scores, normalized by the weights of
    /// the categories actually present.
    fn overall_score(&self, categories: &[CategoryScore]) -> f64 {
        let total_weight: f64 = categories.iter().map(|c| c.weight).sum();
        let weighted_score: f64 = categories.iter().map(|c| c.score * c.weight).sum();
        weighted_score / total_weight
    }
}

impl Default for RiskScorer {
    fn default() -> Self {
        Self {
            config: ScoringConfig::default(),
        }
    }
}

/// Group answers by category, preserving first-seen category order.
fn group_by_category(answers: &[Answer]) -> Vec<(String, Vec<&Answer>)> {
    let mut groups: Vec<(String, Vec<&Answer>)> = Vec::new();
    for answer in answers {
        match groups.iter_mut().find(|(cat, _)| *cat == answer.category) {
            Some((_, group)) => group.push(answer),
            None => groups.push((answer.category.clone(), vec![answer])),
        }
    }
    groups
}

/// Probability of loss (0-100): mean risk weight.
fn probability(answers: &[&Answer]) -> f64 {
    let sum: f64 = answers.iter().map(|a| a.risk_weight).sum();
    sum / answers.len() as f64 * 100.0
}

/// Potential impact (0-100): mean impact weight, falling back to the
/// risk weight when an answer carries no dedicated impact weight.
fn impact(answers: &[&Answer]) -> f64 {
    let sum: f64 = answers
        .iter()
        .map(|a| a.impact_weight.unwrap_or(a.risk_weight))
        .sum();
    sum / answers.len() as f64 * 100.0
}

/// Personal vulnerability (0-100): fraction of answers that are not
/// protective. Answers with risk weight below 0.5 count as protection.
fn vulnerability(answers: &[&Answer]) -> f64 {
    let protection_factors = answers.iter().filter(|a| a.risk_weight < 0.5).count();
    (answers.len() - protection_factors) as f64 / answers.len() as f64 * 100.0
}

/// Current insurance coverage (0-100): mean inverted risk weight over the
/// insurance-related answers. No insurance-related answers means zero
/// coverage, not "unknown".
fn insurance_level(answers: &[&Answer]) -> f64 {
    let insurance_answers: Vec<&&Answer> = answers
        .iter()
        .filter(|a| INSURANCE_MARKERS.iter().any(|m| a.question_id.contains(m)))
        .collect();

    if insurance_answers.is_empty() {
        return 0.0;
    }

    let sum: f64 = insurance_answers.iter().map(|a| 1.0 - a.risk_weight).sum();
    sum / insurance_answers.len() as f64 * 100.0
}

/// Round to one decimal place.
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
