//! Metric calculators
//!
//! Each calculator is a pure function of the activity history and the
//! current date. Empty input is treated as zero activity; values are always
//! within 0-100.

use chrono::{Duration, NaiveDate};

use super::models::{MetricResult, Trend};
use crate::activity::{JournalEntry, MindfulnessProgress, MoodEntry};
use crate::behavior::{EngagementLevel, UserBehavior};

/// Number of days in the trailing activity window, today included
pub const WINDOW_DAYS: i64 = 7;

/// Entries considered by the mood score
const MOOD_SAMPLE_SIZE: usize = 7;

/// Entries averaged at each end of the mood sample for the trend
const MOOD_TREND_SPAN: usize = 3;

/// Mood score from the 7 most recent entries
pub fn mood_score(entries: &[MoodEntry]) -> MetricResult {
    if entries.is_empty() {
        return MetricResult::new(
            50,
            Trend::Stable,
            "Start tracking your mood daily to see how you're feeling over time",
        );
    }

    let mut recent: Vec<&MoodEntry> = entries.iter().collect();
    recent.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    recent.truncate(MOOD_SAMPLE_SIZE);

    let anchors: Vec<f64> = recent.iter().map(|e| e.mood.anchor() as f64).collect();
    let value = mean(&anchors).round() as u32;

    let trend = if anchors.len() <= MOOD_TREND_SPAN {
        Trend::Stable
    } else {
        let newer = mean(&anchors[..MOOD_TREND_SPAN]);
        let older = mean(&anchors[anchors.len() - MOOD_TREND_SPAN..]);
        if newer > older {
            Trend::Up
        } else if newer < older {
            Trend::Down
        } else {
            Trend::Stable
        }
    };

    let suggestion = if value < 60 {
        "Your mood has been low lately. Try a breathing exercise or reach out to someone you trust"
    } else {
        "Your mood is looking good. Keep doing what works for you"
    };

    MetricResult::new(value, trend, suggestion)
}

/// Share of the last 7 calendar days with at least one mood entry
pub fn consistency_score(entries: &[MoodEntry], today: NaiveDate) -> MetricResult {
    let tracked_days = (0..WINDOW_DAYS)
        .map(|offset| today - Duration::days(offset))
        .filter(|day| entries.iter().any(|e| e.date == *day))
        .count();

    let value = (tracked_days as f64 / WINDOW_DAYS as f64 * 100.0).round() as u32;

    let trend = if value > 70 {
        Trend::Up
    } else if value > 40 {
        Trend::Stable
    } else {
        Trend::Down
    };

    let suggestion = if value < 70 {
        "Try checking in at the same time each day to build a habit"
    } else {
        "Great consistency! Daily check-ins help you spot patterns"
    };

    MetricResult::new(value, trend, suggestion)
}

/// Engagement from the behavior record's level and feature breadth
pub fn engagement_score(behavior: Option<&UserBehavior>) -> MetricResult {
    let (base, feature_count) = match behavior {
        None => (40, 0),
        Some(b) => {
            let base = match b.engagement_level {
                EngagementLevel::High => 90,
                EngagementLevel::Medium => 70,
                EngagementLevel::Low => 40,
            };
            (base, b.most_used_features.len() as u32)
        }
    };

    let value = (base + (feature_count * 5).min(20)).min(100);
    let trend = if feature_count > 3 {
        Trend::Up
    } else {
        Trend::Stable
    };

    let suggestion = if value < 70 {
        "Explore more features like journaling or mindfulness exercises"
    } else {
        "You're making great use of your wellness tools"
    };

    MetricResult::new(value, trend, suggestion)
}

/// Mindfulness sessions completed in the trailing window
pub fn mindfulness_score(progress: &MindfulnessProgress, today: NaiveDate) -> MetricResult {
    let count = progress
        .sessions
        .iter()
        .filter(|s| in_window(s.date, today))
        .count() as u32;

    let value = (count * 20).min(100);
    let suggestion = if value < 60 {
        "Try a short 5-minute mindfulness session to center yourself"
    } else {
        "Your mindfulness practice is paying off"
    };

    MetricResult::new(value, activity_trend(count), suggestion)
}

/// Journal entries written in the trailing window
pub fn journaling_score(entries: &[JournalEntry], today: NaiveDate) -> MetricResult {
    let count = entries.iter().filter(|e| in_window(e.date, today)).count() as u32;

    let value = (count * 25).min(100);
    let suggestion = if value < 50 {
        "Writing down your thoughts a few times a week can help process emotions"
    } else {
        "Journaling regularly is a great habit for self-reflection"
    };

    MetricResult::new(value, activity_trend(count), suggestion)
}

fn in_window(date: NaiveDate, today: NaiveDate) -> bool {
    date <= today && date > today - Duration::days(WINDOW_DAYS)
}

fn activity_trend(count: u32) -> Trend {
    if count > 2 {
        Trend::Up
    } else if count > 0 {
        Trend::Stable
    } else {
        Trend::Down
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
