//! Insight generation for risk assessments

use crate::CategoryScore;

/// Category score above which a high-risk warning is emitted
const HIGH_RISK_THRESHOLD: f64 = 70.0;

/// Insurance sub-score below which a coverage suggestion is emitted
const LOW_COVERAGE_THRESHOLD: f64 = 30.0;

/// Mean vulnerability above which the closing warning is emitted
const HIGH_VULNERABILITY_THRESHOLD: f64 = 70.0;

/// Build the ordered insight list for an assessment.
///
/// Order is deterministic: one overall-tier message, then per-category
/// warnings and coverage suggestions in category order, then a closing
/// vulnerability warning when it applies.
pub fn generate(categories: &[CategoryScore], overall_score: f64) -> Vec<String> {
    let mut insights = Vec::new();

    if overall_score > 70.0 {
        insights.push(
            "Your risk level is high. It is time to take action to protect what you have built."
                .to_string(),
        );
    } else if overall_score > 40.0 {
        insights.push(
            "Your risk level is moderate. A few improvements can make a big difference."
                .to_string(),
        );
    } else {
        insights.push(
            "Well done! Your risk level is low, but there is always room to improve.".to_string(),
        );
    }

    for category in categories {
        let name = category_name(&category.category);

        if category.score > HIGH_RISK_THRESHOLD {
            insights.push(format!("Your risk in {} is high.", name));
        }

        if category.insurance_level < LOW_COVERAGE_THRESHOLD {
            insights.push(format!("Consider improving your coverage in {}.", name));
        }
    }

    let avg_vulnerability: f64 =
        categories.iter().map(|c| c.vulnerability).sum::<f64>() / categories.len() as f64;
    if avg_vulnerability > HIGH_VULNERABILITY_THRESHOLD {
        insights.push(
            "Your vulnerability is high. An unexpected event could have a major impact."
                .to_string(),
        );
    }

    insights
}

/// Human-readable category name; unknown categories render their raw id.
pub fn category_name(category: &str) -> &str {
    match category {
        "health" => "Health",
        "financial" => "Finances",
        "auto" => "Auto",
        "home" => "Home",
        "insurance" => "Insurance",
        other => other,
    }
}
