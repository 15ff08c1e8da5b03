//! Composite wellness score

use chrono::{DateTime, NaiveDate, Utc};

use super::metrics::*;
use super::models::*;
use crate::activity::{JournalEntry, MindfulnessProgress, MoodEntry};
use crate::behavior::UserBehavior;

/// Metrics below this value produce an improvement suggestion
const IMPROVEMENT_THRESHOLD: u32 = 70;

/// Metrics at or above this value are listed as strengths
const STRENGTH_THRESHOLD: u32 = 80;

const MAX_IMPROVEMENTS: usize = 3;

/// Raw stores the score is derived from; absent stores are empty
#[derive(Debug, Clone, Copy, Default)]
pub struct WellnessInputs<'a> {
    pub moods: &'a [MoodEntry],
    pub journal: &'a [JournalEntry],
    pub mindfulness: Option<&'a MindfulnessProgress>,
    pub behavior: Option<&'a UserBehavior>,
}

/// Calculate the wellness score as of `today`, stamped with `now`
pub fn calculate_wellness_score(
    inputs: &WellnessInputs<'_>,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> WellnessScore {
    let empty_mindfulness = MindfulnessProgress::default();
    let mindfulness = inputs.mindfulness.unwrap_or(&empty_mindfulness);

    let metrics: Vec<WellnessMetric> = MetricKind::ALL
        .iter()
        .map(|kind| {
            let result = match kind {
                MetricKind::Mood => mood_score(inputs.moods),
                MetricKind::Consistency => consistency_score(inputs.moods, today),
                MetricKind::Engagement => engagement_score(inputs.behavior),
                MetricKind::Mindfulness => mindfulness_score(mindfulness, today),
                MetricKind::Journaling => journaling_score(inputs.journal, today),
            };
            WellnessMetric::from_result(*kind, result)
        })
        .collect();

    debug_assert!(
        (metrics.iter().map(|m| m.weight).sum::<f64>() - 1.0).abs() < 1e-9,
        "metric weights must sum to 1.0"
    );

    let overall = overall_score(&metrics);
    let improvements = improvements(&metrics);
    let strengths = strengths(&metrics);

    log::debug!(
        "Wellness score {} (improvements: {}, strengths: {})",
        overall,
        improvements.len(),
        strengths.len()
    );

    WellnessScore {
        overall,
        metrics,
        calculated_at: now,
        improvements,
        strengths,
    }
}

/// Calculate the wellness score using the current UTC clock
pub fn calculate_wellness_score_now(inputs: &WellnessInputs<'_>) -> WellnessScore {
    let now = Utc::now();
    calculate_wellness_score(inputs, now.date_naive(), now)
}

fn overall_score(metrics: &[WellnessMetric]) -> u32 {
    let weighted: f64 = metrics.iter().map(|m| m.value as f64 * m.weight).sum();
    (weighted.round() as u32).min(100)
}

fn improvements(metrics: &[WellnessMetric]) -> Vec<String> {
    let mut weak: Vec<&WellnessMetric> = metrics
        .iter()
        .filter(|m| m.value < IMPROVEMENT_THRESHOLD)
        .collect();
    // Stable sort keeps catalog order for equal values
    weak.sort_by_key(|m| m.value);

    weak.into_iter()
        .take(MAX_IMPROVEMENTS)
        .map(|m| m.suggestion.clone())
        .collect()
}

fn strengths(metrics: &[WellnessMetric]) -> Vec<String> {
    metrics
        .iter()
        .filter(|m| m.value >= STRENGTH_THRESHOLD)
        .map(|m| format!("Strong {}", m.name.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::{MindfulnessSession, MoodLabel, SessionType};
    use crate::behavior::EngagementLevel;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 5, 20, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        now().date_naive()
    }

    fn expected_overall(score: &WellnessScore) -> u32 {
        score
            .metrics
            .iter()
            .map(|m| m.value as f64 * m.weight)
            .sum::<f64>()
            .round() as u32
    }

    #[test]
    fn test_empty_inputs() {
        let score = calculate_wellness_score(&WellnessInputs::default(), today(), now());

        let values: Vec<u32> = score.metrics.iter().map(|m| m.value).collect();
        assert_eq!(values, vec![50, 0, 40, 0, 0]);
        // 50*0.30 + 40*0.20
        assert_eq!(score.overall, 23);
        assert_eq!(score.calculated_at, now());
        assert!(score.strengths.is_empty());

        // Consistency, mindfulness and journaling are all 0; catalog order wins
        assert_eq!(score.improvements.len(), 3);
        assert_eq!(score.improvements[0], score.metrics[1].suggestion);
        assert_eq!(score.improvements[1], score.metrics[3].suggestion);
        assert_eq!(score.improvements[2], score.metrics[4].suggestion);
    }

    #[test]
    fn test_seven_happy_days() {
        let moods: Vec<MoodEntry> = (0..7)
            .map(|i| MoodEntry::new(MoodLabel::Happy, 7, now() - Duration::days(i)))
            .collect();
        let inputs = WellnessInputs {
            moods: &moods,
            ..Default::default()
        };

        let score = calculate_wellness_score(&inputs, today(), now());
        let mood = &score.metrics[0];
        let consistency = &score.metrics[1];
        let engagement = &score.metrics[2];

        assert_eq!((mood.value, mood.trend), (80, Trend::Stable));
        assert_eq!((consistency.value, consistency.trend), (100, Trend::Up));
        assert_eq!((engagement.value, engagement.trend), (40, Trend::Stable));
        assert_eq!(score.metrics[3].trend, Trend::Down);
        assert_eq!(score.metrics[4].trend, Trend::Down);
        assert_eq!(score.overall, 57);
        assert_eq!(score.strengths, vec!["Strong mood", "Strong consistency"]);
    }

    #[test]
    fn test_overall_matches_weighted_sum() {
        let moods: Vec<MoodEntry> = (0..5)
            .map(|i| MoodEntry::new(MoodLabel::Neutral, 5, now() - Duration::days(i * 2)))
            .collect();
        let journal = vec![JournalEntry::new("Today".to_string(), now())];
        let mindfulness = MindfulnessProgress {
            sessions: vec![
                MindfulnessSession::new(SessionType::Breathing, 5, now()),
                MindfulnessSession::new(SessionType::BodyScan, 15, now() - Duration::days(1)),
            ],
        };
        let mut behavior = UserBehavior::new();
        behavior.engagement_level = EngagementLevel::Medium;
        behavior.most_used_features = vec!["mood".to_string(), "journal".to_string()];

        let inputs = WellnessInputs {
            moods: &moods,
            journal: &journal,
            mindfulness: Some(&mindfulness),
            behavior: Some(&behavior),
        };
        let score = calculate_wellness_score(&inputs, today(), now());

        assert_eq!(score.overall, expected_overall(&score));
        assert!(score.metrics.iter().all(|m| m.value <= 100));
    }

    #[test]
    fn test_improvements_ascending_and_capped() {
        let score = calculate_wellness_score(&WellnessInputs::default(), today(), now());
        assert!(score.improvements.len() <= 3);

        let weak: Vec<&WellnessMetric> = score
            .improvements
            .iter()
            .map(|s| score.metrics.iter().find(|m| &m.suggestion == s).unwrap())
            .collect();
        assert!(weak.iter().all(|m| m.value < 70));
        assert!(weak.windows(2).all(|w| w[0].value <= w[1].value));
    }

    #[test]
    fn test_deterministic_apart_from_timestamp() {
        let moods = vec![MoodEntry::new(MoodLabel::Sad, 3, now())];
        let inputs = WellnessInputs {
            moods: &moods,
            ..Default::default()
        };

        let first = calculate_wellness_score(&inputs, today(), now());
        let second = calculate_wellness_score(&inputs, today(), now() + Duration::minutes(5));

        assert_eq!(first.overall, second.overall);
        assert_eq!(first.metrics, second.metrics);
        assert_ne!(first.calculated_at, second.calculated_at);
    }
}
