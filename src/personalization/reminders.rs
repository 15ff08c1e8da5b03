//! Daily reminder schedule built from behavior

use chrono::{Duration, NaiveTime};

use super::models::{Priority, Reminder, ReminderKind};
use crate::behavior::{EngagementLevel, TimeOfDay, UserBehavior};

const RECENT_PATTERN_WINDOW: usize = 5;
const SELF_CARE_NEGATIVE_THRESHOLD: usize = 2;
const STREAK_PROTECTION_MIN: u32 = 3;

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Check-in time for a time-of-day bucket
pub fn anchor_time(time_of_day: TimeOfDay) -> NaiveTime {
    match time_of_day {
        TimeOfDay::Morning => at(9, 0),
        TimeOfDay::Afternoon => at(14, 0),
        TimeOfDay::Evening => at(19, 0),
        TimeOfDay::Night => at(21, 30),
    }
}

/// Build today's reminders, sorted by time. Empty when `enabled` is false.
pub fn generate_reminders(behavior: Option<&UserBehavior>, enabled: bool) -> Vec<Reminder> {
    if !enabled {
        return Vec::new();
    }

    let Some(behavior) = behavior else {
        return vec![mood_check_in(TimeOfDay::Morning)];
    };

    let anchor = anchor_time(behavior.preferred_time_of_day);
    let mut reminders = vec![mood_check_in(behavior.preferred_time_of_day)];

    if !behavior.has_used("mindfulness") {
        reminders.push(Reminder {
            kind: ReminderKind::Mindfulness,
            time: at(12, 30),
            message: "Take a few minutes for a mindful pause".to_string(),
            priority: Priority::Low,
        });
    }

    if !behavior.has_used("journal") {
        reminders.push(Reminder {
            kind: ReminderKind::Journal,
            time: at(20, 30),
            message: "Write down a few thoughts from your day".to_string(),
            priority: Priority::Low,
        });
    }

    if behavior.recent_negative_moods(RECENT_PATTERN_WINDOW) >= SELF_CARE_NEGATIVE_THRESHOLD {
        // NaiveTime addition wraps past midnight
        reminders.push(Reminder {
            kind: ReminderKind::SelfCare,
            time: anchor + Duration::hours(3),
            message: "Things have felt heavy lately. Check in with yourself and do something kind for you"
                .to_string(),
            priority: Priority::High,
        });
    }

    if behavior.streak_days >= STREAK_PROTECTION_MIN {
        reminders.push(Reminder {
            kind: ReminderKind::StreakProtection,
            time: at(20, 0),
            message: format!(
                "You're on a {}-day streak. Log today to keep it going",
                behavior.streak_days
            ),
            priority: Priority::Medium,
        });
    }

    if behavior.engagement_level == EngagementLevel::Low {
        reminders.push(Reminder {
            kind: ReminderKind::ReEngagement,
            time: at(18, 0),
            message: "A quick check-in is all it takes. We're glad you're here".to_string(),
            priority: Priority::Low,
        });
    }

    reminders.sort_by_key(|r| r.time);
    reminders
}

fn mood_check_in(time_of_day: TimeOfDay) -> Reminder {
    Reminder {
        kind: ReminderKind::MoodCheckIn,
        time: anchor_time(time_of_day),
        message: format!("How are you feeling this {}?", time_of_day.as_str()),
        priority: Priority::Medium,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MoodLabel;
    use chrono::{TimeZone, Utc};

    fn kinds(reminders: &[Reminder]) -> Vec<ReminderKind> {
        reminders.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn test_disabled_returns_nothing() {
        assert!(generate_reminders(None, false).is_empty());
        assert!(generate_reminders(Some(&UserBehavior::new()), false).is_empty());
    }

    #[test]
    fn test_no_behavior_single_morning_check_in() {
        let reminders = generate_reminders(None, true);
        assert_eq!(reminders.len(), 1);
        assert_eq!(reminders[0].kind, ReminderKind::MoodCheckIn);
        assert_eq!(reminders[0].time, at(9, 0));
    }

    #[test]
    fn test_fresh_behavior_schedule() {
        let reminders = generate_reminders(Some(&UserBehavior::new()), true);
        assert_eq!(
            kinds(&reminders),
            vec![
                ReminderKind::MoodCheckIn,
                ReminderKind::Mindfulness,
                ReminderKind::ReEngagement,
                ReminderKind::Journal,
            ]
        );
    }

    #[test]
    fn test_evening_user_check_in_time() {
        let mut behavior = UserBehavior::new();
        behavior.preferred_time_of_day = TimeOfDay::Evening;
        behavior.most_used_features = vec!["mindfulness".to_string(), "journal".to_string()];
        behavior.engagement_level = EngagementLevel::Medium;

        let reminders = generate_reminders(Some(&behavior), true);
        assert_eq!(kinds(&reminders), vec![ReminderKind::MoodCheckIn]);
        assert_eq!(reminders[0].time, at(19, 0));
    }

    #[test]
    fn test_self_care_wraps_past_midnight() {
        let mut behavior = UserBehavior::new();
        behavior.preferred_time_of_day = TimeOfDay::Night;
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        behavior.track_mood_entry(MoodLabel::Sad, vec![], start);
        behavior.track_mood_entry(MoodLabel::Angry, vec![], start);

        let reminders = generate_reminders(Some(&behavior), true);
        let self_care = reminders
            .iter()
            .find(|r| r.kind == ReminderKind::SelfCare)
            .unwrap();
        assert_eq!(self_care.time, at(0, 30));
        assert_eq!(self_care.priority, Priority::High);
        // 00:30 sorts first
        assert_eq!(reminders[0].kind, ReminderKind::SelfCare);
    }

    #[test]
    fn test_streak_protection() {
        let mut behavior = UserBehavior::new();
        behavior.streak_days = 3;

        let reminders = generate_reminders(Some(&behavior), true);
        let streak = reminders
            .iter()
            .find(|r| r.kind == ReminderKind::StreakProtection)
            .unwrap();
        assert_eq!(streak.time, at(20, 0));
        assert!(streak.message.contains("3-day"));
    }

    #[test]
    fn test_sorted_by_time() {
        let mut behavior = UserBehavior::new();
        behavior.streak_days = 5;
        let reminders = generate_reminders(Some(&behavior), true);
        assert!(reminders.windows(2).all(|w| w[0].time <= w[1].time));
    }
}
