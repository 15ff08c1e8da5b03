//! Progress snapshot models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::streak::calculate_streaks;
use crate::activity::{JournalEntry, MindfulnessProgress, MoodEntry};

/// Progress snapshot recomputed from the activity stores (not stored)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub mood_entries: u32,
    pub journal_entries: u32,
    pub mindfulness_sessions: u32,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_days: u32,
    pub features_used: Vec<String>,
}

impl UserProgress {
    /// Build a snapshot from raw activity records
    pub fn from_activity(
        moods: &[MoodEntry],
        journal: &[JournalEntry],
        mindfulness: &MindfulnessProgress,
        features_used: &[String],
        today: NaiveDate,
    ) -> Self {
        let streaks = calculate_streaks(moods, today);

        Self {
            mood_entries: moods.len() as u32,
            journal_entries: journal.len() as u32,
            mindfulness_sessions: mindfulness.sessions.len() as u32,
            current_streak: streaks.current_streak,
            longest_streak: streaks.longest_streak,
            total_days: streaks.total_days,
            features_used: features_used.to_vec(),
        }
    }
}
