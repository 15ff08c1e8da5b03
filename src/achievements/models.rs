//! Achievement data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::progress::UserProgress;

/// Stable achievement identifiers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum AchievementId {
    #[serde(rename = "first_mood")]
    FirstMood,
    #[serde(rename = "mood_streak_7")]
    MoodStreak7,
    #[serde(rename = "mood_streak_30")]
    MoodStreak30,
    #[serde(rename = "journal_entries_10")]
    JournalEntries10,
    #[serde(rename = "mindfulness_sessions_5")]
    MindfulnessSessions5,
    #[serde(rename = "mood_entries_100")]
    MoodEntries100,
    #[serde(rename = "feature_explorer")]
    FeatureExplorer,
    #[serde(rename = "wellness_warrior")]
    WellnessWarrior,
}

impl AchievementId {
    pub const ALL: [AchievementId; 8] = [
        AchievementId::FirstMood,
        AchievementId::MoodStreak7,
        AchievementId::MoodStreak30,
        AchievementId::JournalEntries10,
        AchievementId::MindfulnessSessions5,
        AchievementId::MoodEntries100,
        AchievementId::FeatureExplorer,
        AchievementId::WellnessWarrior,
    ];

    /// The progress counter this achievement is measured against
    pub fn progress_value(&self, progress: &UserProgress) -> u32 {
        match self {
            AchievementId::FirstMood | AchievementId::MoodEntries100 => progress.mood_entries,
            AchievementId::MoodStreak7 | AchievementId::MoodStreak30 => progress.current_streak,
            AchievementId::JournalEntries10 => progress.journal_entries,
            AchievementId::MindfulnessSessions5 => progress.mindfulness_sessions,
            AchievementId::FeatureExplorer => progress.features_used.len() as u32,
            AchievementId::WellnessWarrior => progress.total_days,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AchievementId::FirstMood => "first_mood",
            AchievementId::MoodStreak7 => "mood_streak_7",
            AchievementId::MoodStreak30 => "mood_streak_30",
            AchievementId::JournalEntries10 => "journal_entries_10",
            AchievementId::MindfulnessSessions5 => "mindfulness_sessions_5",
            AchievementId::MoodEntries100 => "mood_entries_100",
            AchievementId::FeatureExplorer => "feature_explorer",
            AchievementId::WellnessWarrior => "wellness_warrior",
        }
    }
}

/// Achievement grouping
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum AchievementCategory {
    Streak,
    Milestone,
    Engagement,
    Progress,
}

/// An achievement and the user's progress towards it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub title: String,
    pub description: String,
    pub category: AchievementCategory,
    /// Threshold, always greater than zero
    pub requirement: u32,
    /// Never exceeds `requirement`
    pub current_progress: u32,
    /// Once set, never cleared
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_date: Option<NaiveDate>,
    pub badge_color: String,
}

impl Achievement {
    /// Progress as a percentage of the requirement
    pub fn percent(&self) -> u32 {
        if self.requirement == 0 {
            return 100;
        }
        (self.current_progress.min(self.requirement) * 100) / self.requirement
    }
}

/// Message the caller shows when an achievement unlocks
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UnlockNotice {
    pub id: AchievementId,
    pub title: String,
    pub message: String,
}

/// Completion overview of the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AchievementSummary {
    pub completed: usize,
    pub total: usize,
    /// 0-100
    pub completion_percent: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_serialization_matches_as_str() {
        for id in AchievementId::ALL {
            let json = serde_json::to_string(&id).unwrap();
            assert_eq!(json, format!("\"{}\"", id.as_str()));
        }
    }

    #[test]
    fn test_progress_dispatch() {
        let progress = UserProgress {
            mood_entries: 12,
            journal_entries: 3,
            mindfulness_sessions: 4,
            current_streak: 6,
            longest_streak: 9,
            total_days: 20,
            features_used: vec!["mood".to_string(), "journal".to_string()],
        };

        assert_eq!(AchievementId::FirstMood.progress_value(&progress), 12);
        assert_eq!(AchievementId::MoodEntries100.progress_value(&progress), 12);
        assert_eq!(AchievementId::MoodStreak7.progress_value(&progress), 6);
        assert_eq!(AchievementId::MoodStreak30.progress_value(&progress), 6);
        assert_eq!(AchievementId::JournalEntries10.progress_value(&progress), 3);
        assert_eq!(AchievementId::MindfulnessSessions5.progress_value(&progress), 4);
        assert_eq!(AchievementId::FeatureExplorer.progress_value(&progress), 2);
        assert_eq!(AchievementId::WellnessWarrior.progress_value(&progress), 20);
    }
}
