//! Achievement definitions
//!
//! This list is the canonical source of the catalog. Persisted catalogs are
//! created from it once and never re-initialized.

use super::models::{Achievement, AchievementCategory, AchievementId};

/// Static definition of an achievement
#[derive(Debug, Clone, Copy)]
pub struct AchievementDefinition {
    pub id: AchievementId,
    pub title: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    pub requirement: u32,
    pub badge_color: &'static str,
}

impl AchievementDefinition {
    /// Fresh, not-yet-started achievement
    pub fn instantiate(&self) -> Achievement {
        Achievement {
            id: self.id,
            title: self.title.to_string(),
            description: self.description.to_string(),
            category: self.category,
            requirement: self.requirement,
            current_progress: 0,
            completed: false,
            unlocked_date: None,
            badge_color: self.badge_color.to_string(),
        }
    }
}

/// Definition for an id
pub fn definition(id: AchievementId) -> AchievementDefinition {
    let (title, description, category, requirement, badge_color) = match id {
        AchievementId::FirstMood => (
            "First Step",
            "Log your first mood entry",
            AchievementCategory::Milestone,
            1,
            "bg-green-500",
        ),
        AchievementId::MoodStreak7 => (
            "Week Warrior",
            "Track your mood 7 days in a row",
            AchievementCategory::Streak,
            7,
            "bg-blue-500",
        ),
        AchievementId::MoodStreak30 => (
            "Monthly Master",
            "Track your mood 30 days in a row",
            AchievementCategory::Streak,
            30,
            "bg-purple-500",
        ),
        AchievementId::JournalEntries10 => (
            "Reflective Writer",
            "Write 10 journal entries",
            AchievementCategory::Engagement,
            10,
            "bg-yellow-500",
        ),
        AchievementId::MindfulnessSessions5 => (
            "Mindful Moments",
            "Complete 5 mindfulness sessions",
            AchievementCategory::Engagement,
            5,
            "bg-teal-500",
        ),
        AchievementId::MoodEntries100 => (
            "Century Club",
            "Log 100 mood entries",
            AchievementCategory::Milestone,
            100,
            "bg-orange-500",
        ),
        AchievementId::FeatureExplorer => (
            "Explorer",
            "Try 5 different features",
            AchievementCategory::Engagement,
            5,
            "bg-pink-500",
        ),
        AchievementId::WellnessWarrior => (
            "Wellness Warrior",
            "Check in on 30 different days",
            AchievementCategory::Progress,
            30,
            "bg-red-500",
        ),
    };

    AchievementDefinition {
        id,
        title,
        description,
        category,
        requirement,
        badge_color,
    }
}

/// All definitions in catalog order
pub fn all_definitions() -> Vec<AchievementDefinition> {
    AchievementId::ALL.iter().map(|id| definition(*id)).collect()
}

/// Fresh catalog with no progress
pub fn default_achievements() -> Vec<Achievement> {
    all_definitions().iter().map(|d| d.instantiate()).collect()
}
