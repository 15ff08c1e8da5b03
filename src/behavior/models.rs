//! User behavior data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::queue::BoundedQueue;
use crate::activity::MoodLabel;

/// Maximum number of mood patterns kept in the behavior record
pub const MOOD_PATTERN_CAPACITY: usize = 100;

/// Part of the day the user tends to be active in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum TimeOfDay {
    #[default]
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// All buckets, in tie-break order
    pub const ALL: [TimeOfDay; 4] = [
        TimeOfDay::Morning,
        TimeOfDay::Afternoon,
        TimeOfDay::Evening,
        TimeOfDay::Night,
    ];

    /// Bucket an hour of the day (0-23)
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }
}

/// Coarse engagement classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum EngagementLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl EngagementLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            EngagementLevel::Low => "low",
            EngagementLevel::Medium => "medium",
            EngagementLevel::High => "high",
        }
    }
}

/// A mood observation recorded by the tracker
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodPattern {
    pub mood: MoodLabel,
    pub time: DateTime<Utc>,
    #[serde(default)]
    pub factors: Vec<String>,
}

/// Incrementally updated record of how the user interacts with the app
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserBehavior {
    #[serde(default)]
    pub preferred_time_of_day: TimeOfDay,
    /// Unique feature names in first-use order
    #[serde(default)]
    pub most_used_features: Vec<String>,
    #[serde(default)]
    pub mood_patterns: BoundedQueue<MoodPattern, MOOD_PATTERN_CAPACITY>,
    #[serde(default)]
    pub engagement_level: EngagementLevel,
    #[serde(default)]
    pub streak_days: u32,
    /// None until the first tracked interaction
    #[serde(default)]
    pub last_active_date: Option<DateTime<Utc>>,
    /// User's offset from UTC, used to read pattern times as wall-clock hours
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl UserBehavior {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_used(&self, feature: &str) -> bool {
        self.most_used_features.iter().any(|f| f == feature)
    }

    /// Number of negative moods among the `n` newest patterns
    pub fn recent_negative_moods(&self, n: usize) -> usize {
        self.mood_patterns
            .latest(n)
            .filter(|p| p.mood.is_negative())
            .count()
    }

    /// Patterns plus distinct features, the interaction volume used for
    /// engagement classification
    pub fn interaction_volume(&self) -> usize {
        self.mood_patterns.len() + self.most_used_features.len()
    }
}
