//! Gamification engine

use crate::rules;
use crate::{
    Badge, Catalog, CompletionLog, Error, GamificationState, Level, Mission, ProgressContext,
    Result, UnlockLog,
};

/// Gamification engine
///
/// Wraps an immutable [`Catalog`] and answers pure queries about level,
/// unlock eligibility, and points. Safe to share across threads; every
/// call is independently reentrant.
pub struct GamificationEngine {
    catalog: Catalog,
}

impl GamificationEngine {
    /// Create a new engine over a validated catalog.
    pub fn new(catalog: Catalog) -> Result<Self> {
        catalog.validate()?;
        Ok(Self { catalog })
    }

    /// The catalog this engine serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Highest level whose threshold the points meet.
    ///
    /// Falls back to the base level, which always qualifies since its
    /// threshold is 0.
    pub fn current_level(&self, points: u64) -> &Level {
        self.catalog
            .levels
            .iter()
            .rev()
            .find(|level| points >= level.min_points)
            .unwrap_or(&self.catalog.levels[0])
    }

    /// The level immediately after `current`; `None` at the top.
    pub fn next_level(&self, current: &Level) -> Option<&Level> {
        let index = self
            .catalog
            .levels
            .iter()
            .position(|level| level.level == current.level)?;
        self.catalog.levels.get(index + 1)
    }

    /// Progress toward the next level as an integer percentage (0-100).
    pub fn progress_to_next_level(
        &self,
        points: u64,
        current: &Level,
        next: Option<&Level>,
    ) -> u8 {
        let Some(next) = next else {
            return 100;
        };

        let range = (next.min_points - current.min_points) as f64;
        let progress = points.saturating_sub(current.min_points) as f64;
        (progress / range * 100.0).round().min(100.0) as u8
    }

    /// Whether a badge should be unlocked now.
    ///
    /// Idempotent over the unlock log: an already-unlocked badge is never
    /// eligible again, so re-running a trigger cannot duplicate the record.
    /// Unknown badge ids are never eligible.
    pub fn check_badge_unlock(
        &self,
        badge_id: &str,
        unlocked: &UnlockLog,
        context: &ProgressContext,
    ) -> bool {
        if unlocked.contains_key(badge_id) {
            return false;
        }
        rules::badge_rule(badge_id).is_some_and(|rule| rule(context))
    }

    /// Whether a mission is completed now. Same idempotence guard as
    /// [`check_badge_unlock`](Self::check_badge_unlock).
    pub fn check_mission_completion(
        &self,
        mission_id: &str,
        completed: &CompletionLog,
        context: &ProgressContext,
    ) -> bool {
        if completed.contains_key(mission_id) {
            return false;
        }
        rules::mission_rule(mission_id).is_some_and(|rule| rule(context))
    }

    /// Points awarded for a mission; 0 for unknown ids, which callers
    /// must treat as a no-op rather than an error.
    pub fn mission_points(&self, mission_id: &str) -> u32 {
        self.catalog
            .missions
            .iter()
            .find(|mission| mission.id == mission_id)
            .map(|mission| mission.points)
            .unwrap_or(0)
    }

    /// Apply a manual point award to a running total.
    ///
    /// Rejects non-positive awards; totals only ever increase. The caller
    /// persists the returned total.
    pub fn award_points(&self, total_points: u64, points: i64) -> Result<u64> {
        if points <= 0 {
            return Err(Error::InvalidInput(format!(
                "Point award must be positive, got {}",
                points
            )));
        }
        Ok(total_points + points as u64)
    }

    /// Unlocked badges in catalog order, annotated with the persisted
    /// unlock time from the log.
    pub fn unlocked_badges(&self, unlocked: &UnlockLog) -> Vec<Badge> {
        self.catalog
            .badges
            .iter()
            .filter_map(|def| {
                unlocked.get(&def.id).map(|unlocked_at| Badge {
                    id: def.id.clone(),
                    name: def.name.clone(),
                    description: def.description.clone(),
                    icon: def.icon.clone(),
                    unlocked_at: *unlocked_at,
                })
            })
            .collect()
    }

    /// All missions in catalog order with the user's completion state.
    pub fn missions(&self, completed: &CompletionLog) -> Vec<Mission> {
        self.catalog
            .missions
            .iter()
            .map(|def| {
                let completed_at = completed.get(&def.id).copied();
                Mission {
                    id: def.id.clone(),
                    name: def.name.clone(),
                    description: def.description.clone(),
                    points: def.points,
                    completed: completed_at.is_some(),
                    completed_at,
                }
            })
            .collect()
    }

    /// Compose the full gamification snapshot for presentation.
    pub fn gamification_state(
        &self,
        total_points: u64,
        unlocked: &UnlockLog,
        completed: &CompletionLog,
    ) -> GamificationState {
        let current_level = self.current_level(total_points);
        let next_level = self.next_level(current_level);
        let progress_to_next_level =
            self.progress_to_next_level(total_points, current_level, next_level);

        tracing::debug!(
            total_points,
            level = current_level.level,
            progress_to_next_level,
            "Composed gamification state"
        );

        GamificationState {
            total_points,
            current_level: current_level.clone(),
            next_level: next_level.cloned(),
            progress_to_next_level,
            badges: self.unlocked_badges(unlocked),
            missions: self.missions(completed),
        }
    }
}

impl Default for GamificationEngine {
    fn default() -> Self {
        Self {
            catalog: Catalog::default(),
        }
    }
}
