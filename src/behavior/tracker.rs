//! Incremental behavior tracking
//!
//! Every tracked interaction updates the day streak and engagement level,
//! and stamps `last_active_date`.

use chrono::{DateTime, Duration, FixedOffset, Timelike, Utc};

use super::models::*;
use crate::activity::MoodLabel;

/// Patterns required before the preferred time of day is inferred
const MIN_PATTERNS_FOR_TIME_PREFERENCE: usize = 5;

impl UserBehavior {
    /// Record use of a feature (set semantics, first-use order)
    pub fn track_feature_usage(&mut self, feature: &str, now: DateTime<Utc>) {
        if !self.has_used(feature) {
            log::debug!("First use of feature '{}'", feature);
            self.most_used_features.push(feature.to_string());
        }
        self.update_engagement(now);
    }

    /// Record a mood observation
    pub fn track_mood_entry(&mut self, mood: MoodLabel, factors: Vec<String>, now: DateTime<Utc>) {
        self.mood_patterns.push(MoodPattern {
            mood,
            time: now,
            factors,
        });

        if self.mood_patterns.len() >= MIN_PATTERNS_FOR_TIME_PREFERENCE {
            self.preferred_time_of_day = self.infer_preferred_time();
        }

        self.update_engagement(now);
    }

    /// Reset to a fresh record, keeping the user's UTC offset
    pub fn reset_preferences(&mut self) {
        let utc_offset_minutes = self.utc_offset_minutes;
        *self = UserBehavior::default();
        self.utc_offset_minutes = utc_offset_minutes;
    }

    /// Set the user's offset from UTC and re-bucket recorded patterns
    pub fn set_utc_offset(&mut self, minutes: i32) {
        if self.utc_offset_minutes == minutes {
            return;
        }
        self.utc_offset_minutes = minutes;
        if self.mood_patterns.len() >= MIN_PATTERNS_FOR_TIME_PREFERENCE {
            self.preferred_time_of_day = self.infer_preferred_time();
        }
    }

    /// Hour of day on the user's clock
    fn local_hour(&self, time: DateTime<Utc>) -> u32 {
        match FixedOffset::east_opt(self.utc_offset_minutes * 60) {
            Some(offset) => time.with_timezone(&offset).hour(),
            None => {
                log::warn!("Ignoring out-of-range UTC offset {} min", self.utc_offset_minutes);
                time.hour()
            }
        }
    }

    /// Most common time-of-day bucket across recorded patterns
    fn infer_preferred_time(&self) -> TimeOfDay {
        let mut counts = [0usize; 4];
        for pattern in &self.mood_patterns {
            let bucket = TimeOfDay::from_hour(self.local_hour(pattern.time));
            if let Some(idx) = TimeOfDay::ALL.iter().position(|t| *t == bucket) {
                counts[idx] += 1;
            }
        }

        // First maximum wins so ties resolve in bucket order
        let mut best = 0;
        for idx in 1..counts.len() {
            if counts[idx] > counts[best] {
                best = idx;
            }
        }
        TimeOfDay::ALL[best]
    }

    fn update_engagement(&mut self, now: DateTime<Utc>) {
        let today = now.date_naive();

        self.streak_days = match self.last_active_date.map(|d| d.date_naive()) {
            Some(last) if last == today => self.streak_days.max(1),
            Some(last) if last == today - Duration::days(1) => self.streak_days + 1,
            _ => 1,
        };

        let volume = self.interaction_volume();
        self.engagement_level = if self.streak_days > 7 && volume > 20 {
            EngagementLevel::High
        } else if self.streak_days > 2 && volume > 5 {
            EngagementLevel::Medium
        } else {
            EngagementLevel::Low
        };

        self.last_active_date = Some(now);
    }
}
