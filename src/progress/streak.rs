//! Streak calculation over mood-entry dates
//!
//! All arithmetic is done on `NaiveDate` values so that DST shifts and
//! local-offset changes can't split or merge days.

use std::collections::BTreeSet;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::activity::MoodEntry;

/// Streak statistics derived from a date series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Consecutive days ending today or yesterday
    pub current_streak: u32,
    /// Longest run of consecutive days anywhere in history
    pub longest_streak: u32,
    /// Distinct days with at least one entry
    pub total_days: u32,
}

/// Calculate streak statistics for a set of mood entries
pub fn calculate_streaks(entries: &[MoodEntry], today: NaiveDate) -> StreakSummary {
    let dates: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    streaks_from_dates(&dates, today)
}

/// Calculate streak statistics for an already-distinct date set
pub fn streaks_from_dates(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> StreakSummary {
    if dates.is_empty() {
        return StreakSummary::default();
    }

    StreakSummary {
        current_streak: current_streak(dates, today),
        longest_streak: longest_streak(dates),
        total_days: dates.len() as u32,
    }
}

/// Consecutive days counted backwards from today (or yesterday, since today
/// may simply not be logged yet)
fn current_streak(dates: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let mut check_date = if dates.contains(&today) {
        today
    } else {
        let yesterday = today - Duration::days(1);
        if !dates.contains(&yesterday) {
            return 0;
        }
        yesterday
    };

    let mut streak = 0;
    while dates.contains(&check_date) {
        streak += 1;
        check_date = check_date - Duration::days(1);
    }

    streak
}

fn longest_streak(dates: &BTreeSet<NaiveDate>) -> u32 {
    let mut longest = 0;
    let mut current = 0;
    let mut previous: Option<NaiveDate> = None;

    // BTreeSet iterates ascending
    for &date in dates {
        current = match previous {
            Some(prev) if date - prev == Duration::days(1) => current + 1,
            _ => {
                longest = longest.max(current);
                1
            }
        };
        previous = Some(date);
    }

    longest.max(current)
}
