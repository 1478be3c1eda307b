//! Core types for gamification engine

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Persisted badge unlock times, keyed by badge id.
///
/// The key set doubles as the "already unlocked" set for idempotence
/// checks; the engine never generates timestamps itself.
pub type UnlockLog = HashMap<String, DateTime<Utc>>;

/// Persisted mission completion times, keyed by mission id.
pub type CompletionLog = HashMap<String, DateTime<Utc>>;

/// A level in the progression ladder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Level number, sequential from 1
    pub level: u32,

    /// Display name
    pub name: String,

    /// Minimum total points to hold this level
    pub min_points: u64,

    /// Display icon
    pub icon: String,
}

/// Static badge definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BadgeDef {
    /// Badge identifier (e.g., "first_step")
    pub id: String,

    /// Display name
    pub name: String,

    /// What the user did to earn it
    pub description: String,

    /// Display icon
    pub icon: String,
}

/// A badge the user has unlocked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Badge {
    /// Badge identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// What the user did to earn it
    pub description: String,

    /// Display icon
    pub icon: String,

    /// When the unlock was recorded, as supplied by the caller
    pub unlocked_at: DateTime<Utc>,
}

/// Static mission definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissionDef {
    /// Mission identifier (e.g., "assess_health")
    pub id: String,

    /// Display name
    pub name: String,

    /// What the user has to do
    pub description: String,

    /// Points awarded on completion (always positive)
    pub points: u32,
}

/// A mission together with the user's completion state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mission {
    /// Mission identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// What the user has to do
    pub description: String,

    /// Points awarded on completion
    pub points: u32,

    /// Whether the user has completed it
    pub completed: bool,

    /// When the completion was recorded, as supplied by the caller
    pub completed_at: Option<DateTime<Utc>>,
}

/// Full gamification snapshot for presentation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GamificationState {
    /// Accumulated points (monotonically increasing)
    pub total_points: u64,

    /// Highest level whose threshold is met
    pub current_level: Level,

    /// Next level, if any
    pub next_level: Option<Level>,

    /// Progress toward the next level (0-100)
    pub progress_to_next_level: u8,

    /// Unlocked badges, in catalog order
    pub badges: Vec<Badge>,

    /// All missions with completion state, in catalog order
    pub missions: Vec<Mission>,
}

/// Contextual facts badge and mission predicates evaluate over.
///
/// The trigger layer fills in whatever it knows at the call site; the
/// default is the all-empty context, which no predicate except
/// `insight_seeker` accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressContext {
    /// Categories with a completed questionnaire
    pub completed_questionnaires: HashSet<String>,

    /// Total individual risks identified so far
    pub total_risks: u32,

    /// Current level number
    pub current_level: u32,

    /// Number of badges already unlocked
    pub total_badges: u32,

    /// User shared their results with an advisor
    pub shared_results: bool,

    /// User viewed their results dashboard
    pub viewed_results: bool,

    /// User has a profile (account or guest)
    pub has_profile: bool,
}
