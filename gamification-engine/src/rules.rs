//! Data-driven unlock and completion rules
//!
//! Badge and mission eligibility is a fixed table mapping id to a
//! predicate over [`ProgressContext`]. Ids missing from the table never
//! unlock, so the engine degrades gracefully when catalogs evolve ahead
//! of the rule set.

use crate::ProgressContext;

/// Eligibility predicate over a user's progress context
pub type Predicate = fn(&ProgressContext) -> bool;

/// Badge id → unlock condition
const BADGE_RULES: &[(&str, Predicate)] = &[
    ("first_step", |ctx| !ctx.completed_questionnaires.is_empty()),
    ("risk_aware", |ctx| ctx.total_risks >= 5),
    ("health_conscious", |ctx| ctx.completed_questionnaires.contains("health")),
    ("finance_guru", |ctx| ctx.completed_questionnaires.contains("financial")),
    ("full_profile", |ctx| ctx.completed_questionnaires.len() >= 4),
    // Only invoked on a results-viewed event, so eligibility is unconditional
    ("insight_seeker", |_| true),
    ("level_3", |ctx| ctx.current_level >= 3),
    ("level_5", |ctx| ctx.current_level >= 5),
    ("max_level", |ctx| ctx.current_level >= 6),
    ("shared_results", |ctx| ctx.shared_results),
];

/// Mission id → completion condition
const MISSION_RULES: &[(&str, Predicate)] = &[
    ("complete_profile", |ctx| ctx.has_profile),
    ("assess_health", |ctx| ctx.completed_questionnaires.contains("health")),
    ("assess_financial", |ctx| ctx.completed_questionnaires.contains("financial")),
    ("assess_auto", |ctx| ctx.completed_questionnaires.contains("auto")),
    ("assess_home", |ctx| ctx.completed_questionnaires.contains("home")),
    ("view_results", |ctx| ctx.viewed_results),
    ("reach_level_3", |ctx| ctx.current_level >= 3),
    ("unlock_5_badges", |ctx| ctx.total_badges >= 5),
];

/// Look up the unlock condition for a badge id.
pub fn badge_rule(badge_id: &str) -> Option<Predicate> {
    BADGE_RULES
        .iter()
        .find(|(id, _)| *id == badge_id)
        .map(|(_, predicate)| *predicate)
}

/// Look up the completion condition for a mission id.
pub fn mission_rule(mission_id: &str) -> Option<Predicate> {
    MISSION_RULES
        .iter()
        .find(|(id, _)| *id == mission_id)
        .map(|(_, predicate)| *predicate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Catalog;

    fn ctx_with_questionnaires(categories: &[&str]) -> ProgressContext {
        ProgressContext {
            completed_questionnaires: categories.iter().map(|c| c.to_string()).collect(),
            ..ProgressContext::default()
        }
    }

    #[test]
    fn test_every_catalog_badge_has_a_rule() {
        for badge in &Catalog::default().badges {
            assert!(badge_rule(&badge.id).is_some(), "no rule for {}", badge.id);
        }
    }

    #[test]
    fn test_every_catalog_mission_has_a_rule() {
        for mission in &Catalog::default().missions {
            assert!(
                mission_rule(&mission.id).is_some(),
                "no rule for {}",
                mission.id
            );
        }
    }

    #[test]
    fn test_unknown_ids_have_no_rule() {
        assert!(badge_rule("time_traveler").is_none());
        assert!(mission_rule("assess_spaceship").is_none());
    }

    #[test]
    fn test_first_step_needs_one_questionnaire() {
        let rule = badge_rule("first_step").unwrap();
        assert!(!rule(&ProgressContext::default()));
        assert!(rule(&ctx_with_questionnaires(&["health"])));
    }

    #[test]
    fn test_risk_aware_needs_five_risks() {
        let rule = badge_rule("risk_aware").unwrap();
        let mut ctx = ProgressContext::default();

        ctx.total_risks = 4;
        assert!(!rule(&ctx));
        ctx.total_risks = 5;
        assert!(rule(&ctx));
    }

    #[test]
    fn test_category_badges_check_membership() {
        let health = badge_rule("health_conscious").unwrap();
        let finance = badge_rule("finance_guru").unwrap();
        let ctx = ctx_with_questionnaires(&["health"]);

        assert!(health(&ctx));
        assert!(!finance(&ctx));
    }

    #[test]
    fn test_full_profile_needs_four_categories() {
        let rule = badge_rule("full_profile").unwrap();

        assert!(!rule(&ctx_with_questionnaires(&["health", "financial", "auto"])));
        assert!(rule(&ctx_with_questionnaires(&[
            "health",
            "financial",
            "auto",
            "home"
        ])));
    }

    #[test]
    fn test_insight_seeker_is_unconditional() {
        let rule = badge_rule("insight_seeker").unwrap();
        assert!(rule(&ProgressContext::default()));
    }

    #[test]
    fn test_level_badges() {
        let mut ctx = ProgressContext::default();
        ctx.current_level = 5;

        assert!(badge_rule("level_3").unwrap()(&ctx));
        assert!(badge_rule("level_5").unwrap()(&ctx));
        assert!(!badge_rule("max_level").unwrap()(&ctx));

        ctx.current_level = 6;
        assert!(badge_rule("max_level").unwrap()(&ctx));
    }

    #[test]
    fn test_shared_results_badge() {
        let rule = badge_rule("shared_results").unwrap();
        let mut ctx = ProgressContext::default();

        assert!(!rule(&ctx));
        ctx.shared_results = true;
        assert!(rule(&ctx));
    }

    #[test]
    fn test_assess_missions_check_membership() {
        let ctx = ctx_with_questionnaires(&["auto", "home"]);

        assert!(mission_rule("assess_auto").unwrap()(&ctx));
        assert!(mission_rule("assess_home").unwrap()(&ctx));
        assert!(!mission_rule("assess_health").unwrap()(&ctx));
        assert!(!mission_rule("assess_financial").unwrap()(&ctx));
    }

    #[test]
    fn test_profile_and_results_missions() {
        let mut ctx = ProgressContext::default();
        assert!(!mission_rule("complete_profile").unwrap()(&ctx));
        assert!(!mission_rule("view_results").unwrap()(&ctx));

        ctx.has_profile = true;
        ctx.viewed_results = true;
        assert!(mission_rule("complete_profile").unwrap()(&ctx));
        assert!(mission_rule("view_results").unwrap()(&ctx));
    }

    #[test]
    fn test_progress_missions() {
        let mut ctx = ProgressContext::default();
        ctx.current_level = 3;
        ctx.total_badges = 5;

        assert!(mission_rule("reach_level_3").unwrap()(&ctx));
        assert!(mission_rule("unlock_5_badges").unwrap()(&ctx));
    }
}
