//! Ranked suggestions for features the user has not tried yet

use super::models::FeatureRecommendation;
use crate::behavior::{EngagementLevel, TimeOfDay, UserBehavior};

const BASE_RELEVANCE: f64 = 0.5;
const RECENT_PATTERN_WINDOW: usize = 5;
const SAFETY_PLAN_NEGATIVE_THRESHOLD: usize = 3;

/// Feature catalog: (name, title, default reason)
const FEATURES: [(&str, &str, &str); 7] = [
    ("mood", "Mood Tracking", "Track how you feel to spot patterns over time"),
    ("journal", "Journal", "Writing helps you process your day"),
    ("mindfulness", "Mindfulness", "Short sessions build calm and focus"),
    ("breathing", "Breathing Exercises", "Slow breathing can ease stress quickly"),
    ("cbt", "Thought Records", "Reframe unhelpful thoughts step by step"),
    ("safety_plan", "Safety Plan", "Prepare for difficult moments ahead of time"),
    ("gratitude", "Gratitude", "Noticing good things lifts your mood"),
];

/// A boost applied to one feature, with the reason it explains
struct Boost {
    amount: f64,
    reason: &'static str,
}

/// The boost a feature earns from the user's behavior, if any
fn boost(feature: &str, behavior: &UserBehavior) -> Option<Boost> {
    let negatives = behavior.recent_negative_moods(RECENT_PATTERN_WINDOW);

    let (amount, reason) = match feature {
        "breathing" if negatives > 0 => (
            0.3,
            "Your recent moods suggest stress; breathing exercises can help",
        ),
        "cbt" if negatives > 0 => (
            0.2,
            "Thought records can help with the difficult feelings you've logged",
        ),
        "safety_plan" if negatives >= SAFETY_PLAN_NEGATIVE_THRESHOLD => (
            0.3,
            "You've had several hard days; a safety plan gives you a place to turn",
        ),
        "mood" if behavior.engagement_level == EngagementLevel::Low => {
            (0.3, "A quick mood check-in is an easy way to get started")
        }
        "journal"
            if matches!(
                behavior.preferred_time_of_day,
                TimeOfDay::Evening | TimeOfDay::Night
            ) =>
        {
            (0.2, "Evenings are a good time to reflect in your journal")
        }
        "mindfulness" if behavior.preferred_time_of_day == TimeOfDay::Morning => {
            (0.2, "A morning mindfulness session sets the tone for your day")
        }
        "gratitude" if behavior.engagement_level != EngagementLevel::Low => (
            0.1,
            "You're building momentum; gratitude practice can deepen it",
        ),
        _ => return None,
    };

    Some(Boost { amount, reason })
}

/// Recommend up to `limit` unused features, most relevant first. Without a
/// behavior record every feature is unused and unboosted.
pub fn recommend_features(
    behavior: Option<&UserBehavior>,
    limit: usize,
) -> Vec<FeatureRecommendation> {
    let fallback = UserBehavior::default();
    let behavior = behavior.unwrap_or(&fallback);

    let mut recommendations: Vec<FeatureRecommendation> = FEATURES
        .iter()
        .filter(|(name, _, _)| !behavior.has_used(name))
        .map(|(name, title, default_reason)| {
            let applied = boost(name, behavior);
            let score = BASE_RELEVANCE + applied.as_ref().map_or(0.0, |b| b.amount);
            let reason = applied.map_or(*default_reason, |b| b.reason);

            FeatureRecommendation {
                feature: name.to_string(),
                title: title.to_string(),
                reason: reason.to_string(),
                relevance_score: score.clamp(0.0, 1.0),
            }
        })
        .collect();

    // Stable: equal scores keep catalog order
    recommendations.sort_by(|a, b| b.relevance_score.total_cmp(&a.relevance_score));
    recommendations.truncate(limit);
    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MoodLabel;
    use chrono::{TimeZone, Utc};

    fn features(recs: &[FeatureRecommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.feature.as_str()).collect()
    }

    #[test]
    fn test_no_behavior_low_engagement_favors_mood() {
        let recs = recommend_features(None, 3);
        // Default behavior: low engagement, morning preference
        assert_eq!(features(&recs), vec!["mood", "mindfulness", "journal"]);
        assert!((recs[0].relevance_score - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_used_features_excluded() {
        let mut behavior = UserBehavior::new();
        behavior.most_used_features = vec!["mood".to_string(), "mindfulness".to_string()];

        let recs = recommend_features(Some(&behavior), 10);
        assert_eq!(recs.len(), 5);
        assert!(recs.iter().all(|r| r.feature != "mood" && r.feature != "mindfulness"));
    }

    #[test]
    fn test_negative_moods_favor_coping_tools() {
        let mut behavior = UserBehavior::new();
        behavior.most_used_features = vec!["mood".to_string(), "mindfulness".to_string()];
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap();
        for mood in [MoodLabel::Sad, MoodLabel::Angry, MoodLabel::Sad] {
            behavior.track_mood_entry(mood, vec![], start);
        }

        let recs = recommend_features(Some(&behavior), 3);
        assert_eq!(features(&recs), vec!["breathing", "safety_plan", "cbt"]);
        assert!(recs[0].reason.contains("breathing"));
    }

    #[test]
    fn test_evening_user_gets_journal() {
        let mut behavior = UserBehavior::new();
        behavior.preferred_time_of_day = TimeOfDay::Evening;
        behavior.engagement_level = EngagementLevel::Medium;

        let recs = recommend_features(Some(&behavior), 2);
        assert_eq!(features(&recs), vec!["journal", "gratitude"]);
        assert!((recs[1].relevance_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_unboosted_feature_keeps_default_reason() {
        let mut behavior = UserBehavior::new();
        behavior.engagement_level = EngagementLevel::Medium;

        let recs = recommend_features(Some(&behavior), 10);
        let breathing = recs.iter().find(|r| r.feature == "breathing").unwrap();
        assert_eq!(breathing.reason, "Slow breathing can ease stress quickly");
        assert!((breathing.relevance_score - BASE_RELEVANCE).abs() < 1e-9);

        assert!(boost("breathing", &behavior).is_none());
        assert!(boost("unknown", &behavior).is_none());
        assert!((boost("mindfulness", &behavior).unwrap().amount - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_limit_and_bounds() {
        let recs = recommend_features(None, 0);
        assert!(recs.is_empty());

        let recs = recommend_features(None, 100);
        assert_eq!(recs.len(), 7);
        assert!(recs
            .iter()
            .all(|r| (0.0..=1.0).contains(&r.relevance_score)));
        assert!(recs
            .windows(2)
            .all(|w| w[0].relevance_score >= w[1].relevance_score));
    }
}
