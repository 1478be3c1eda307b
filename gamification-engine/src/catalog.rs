//! Static level, badge, and mission catalogs

use crate::{BadgeDef, Error, Level, MissionDef, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Immutable catalog of levels, badges, and missions.
///
/// Constructed once at process start (built-in default or deserialized
/// from configuration) and passed to the engine by reference. Never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    /// Progression ladder, ascending by `min_points`
    pub levels: Vec<Level>,

    /// Badge definitions, in display order
    pub badges: Vec<BadgeDef>,

    /// Mission definitions, in display order
    pub missions: Vec<MissionDef>,
}

impl Catalog {
    /// Validate catalog shape.
    ///
    /// Level numbers must be sequential from 1 with strictly ascending
    /// thresholds and a base level at 0 points; badge and mission ids
    /// must be unique and mission points positive.
    pub fn validate(&self) -> Result<()> {
        if self.levels.is_empty() {
            return Err(Error::InvalidConfig("Catalog has no levels".to_string()));
        }
        if self.levels[0].min_points != 0 {
            return Err(Error::InvalidConfig(
                "Base level must start at 0 points".to_string(),
            ));
        }
        for (index, level) in self.levels.iter().enumerate() {
            if level.level != index as u32 + 1 {
                return Err(Error::InvalidConfig(format!(
                    "Level numbers must be sequential from 1; position {} has level {}",
                    index, level.level
                )));
            }
            if index > 0 && level.min_points <= self.levels[index - 1].min_points {
                return Err(Error::InvalidConfig(format!(
                    "Level thresholds must be strictly ascending; level {} breaks the order",
                    level.level
                )));
            }
        }

        let mut badge_ids = HashSet::new();
        for badge in &self.badges {
            if !badge_ids.insert(badge.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "Duplicate badge id '{}'",
                    badge.id
                )));
            }
        }

        let mut mission_ids = HashSet::new();
        for mission in &self.missions {
            if !mission_ids.insert(mission.id.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "Duplicate mission id '{}'",
                    mission.id
                )));
            }
            if mission.points == 0 {
                return Err(Error::InvalidConfig(format!(
                    "Mission '{}' must award positive points",
                    mission.id
                )));
            }
        }

        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        fn level(level: u32, name: &str, min_points: u64, icon: &str) -> Level {
            Level {
                level,
                name: name.to_string(),
                min_points,
                icon: icon.to_string(),
            }
        }
        fn badge(id: &str, name: &str, description: &str, icon: &str) -> BadgeDef {
            BadgeDef {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
            }
        }
        fn mission(id: &str, name: &str, description: &str, points: u32) -> MissionDef {
            MissionDef {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
                points,
            }
        }

        Self {
            levels: vec![
                level(1, "Unaware", 0, "🤷"),
                level(2, "Curious", 100, "🤔"),
                level(3, "Aware", 300, "💡"),
                level(4, "Prepared", 600, "🛡️"),
                level(5, "Insured", 1000, "✅"),
                level(6, "Shielded", 1500, "🏆"),
            ],
            badges: vec![
                badge("first_step", "First Step", "Completed your first questionnaire", "👣"),
                badge("risk_aware", "Risk Discoverer", "Identified 5 personal risks", "🔍"),
                badge("health_conscious", "Health Conscious", "Completed the health questionnaire", "❤️"),
                badge("finance_guru", "Savings Master", "Completed the financial questionnaire", "💰"),
                badge("full_profile", "Full Profile", "Completed every questionnaire", "📋"),
                badge("insight_seeker", "Insight Seeker", "Reviewed your full results", "💡"),
                badge("level_3", "Level 3 Aware", "Reached level 3", "⭐"),
                badge("level_5", "Level 5 Insured", "Reached level 5", "🌟"),
                badge("max_level", "Fully Shielded", "Reached the maximum level", "👑"),
                badge("shared_results", "Sharer", "Shared your results with an advisor", "🤝"),
            ],
            missions: vec![
                mission("complete_profile", "Complete your profile", "Create an account or continue as a guest", 50),
                mission("assess_health", "Assess your health risks", "Complete the health questionnaire", 100),
                mission("assess_financial", "Assess your finances", "Complete the financial questionnaire", 100),
                mission("assess_auto", "Assess your car", "Complete the auto questionnaire", 80),
                mission("assess_home", "Assess your home", "Complete the home questionnaire", 80),
                mission("view_results", "Review your results", "See your full risk dashboard", 50),
                mission("reach_level_3", "Reach level 3", "Climb to the Aware level", 150),
                mission("unlock_5_badges", "Collector", "Unlock 5 different badges", 200),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        assert!(Catalog::default().validate().is_ok());
    }

    #[test]
    fn test_default_catalog_shape() {
        let catalog = Catalog::default();

        assert_eq!(catalog.levels.len(), 6);
        assert_eq!(catalog.badges.len(), 10);
        assert_eq!(catalog.missions.len(), 8);
        assert_eq!(catalog.levels.last().unwrap().min_points, 1500);
    }

    #[test]
    fn test_rejects_empty_levels() {
        let catalog = Catalog {
            levels: vec![],
            ..Catalog::default()
        };
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_non_zero_base_level() {
        let mut catalog = Catalog::default();
        catalog.levels[0].min_points = 50;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_non_sequential_level_numbers() {
        let mut catalog = Catalog::default();
        catalog.levels[2].level = 7;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_non_ascending_thresholds() {
        let mut catalog = Catalog::default();
        catalog.levels[3].min_points = catalog.levels[2].min_points;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_duplicate_badge_id() {
        let mut catalog = Catalog::default();
        let duplicate = catalog.badges[0].clone();
        catalog.badges.push(duplicate);
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_point_mission() {
        let mut catalog = Catalog::default();
        catalog.missions[0].points = 0;
        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_catalog_round_trips_through_json() {
        let catalog = Catalog::default();
        let json = serde_json::to_string(&catalog).unwrap();
        let parsed: Catalog = serde_json::from_str(&json).unwrap();

        assert!(parsed.validate().is_ok());
        assert_eq!(parsed.levels, catalog.levels);
        assert_eq!(parsed.badges.len(), catalog.badges.len());
        assert_eq!(parsed.missions.len(), catalog.missions.len());
    }
}
