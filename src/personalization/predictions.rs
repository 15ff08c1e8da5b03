//! Mood predictions from intensity trends
//!
//! Trend checks compare the average intensity of the 7 newest entries with
//! the 7 before them. A weekday check looks at how the user usually feels on
//! tomorrow's day of the week.

use std::collections::HashMap;

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::models::{Prediction, PredictionType};
use crate::activity::MoodEntry;

const TREND_WINDOW: usize = 7;
const MIN_ENTRIES_FOR_TRENDS: usize = 7;
const MIN_ENTRIES_FOR_WEEKDAYS: usize = 14;
const MIN_WEEKDAY_SAMPLES: usize = 2;
const WEEKDAY_CONFIDENCE: u32 = 65;
const MAINTENANCE_CONFIDENCE: u32 = 75;

/// Generate predictions as of `today`; risk/improvement/maintenance come
/// first, the weekday prediction last
pub fn generate_predictions(entries: &[MoodEntry], today: NaiveDate) -> Vec<Prediction> {
    let mut predictions = Vec::new();
    if entries.len() < MIN_ENTRIES_FOR_TRENDS {
        return predictions;
    }

    let mut sorted: Vec<&MoodEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));

    let recent: Vec<f64> = sorted
        .iter()
        .take(TREND_WINDOW)
        .map(|e| e.intensity as f64)
        .collect();
    let previous: Vec<f64> = sorted
        .iter()
        .skip(TREND_WINDOW)
        .take(TREND_WINDOW)
        .map(|e| e.intensity as f64)
        .collect();

    if !previous.is_empty() {
        let recent_avg = mean(&recent);
        let previous_avg = mean(&previous);
        predictions.extend(trend_predictions(recent_avg, previous_avg));
    }

    if entries.len() >= MIN_ENTRIES_FOR_WEEKDAYS {
        if let Some(prediction) = weekday_prediction(entries, today) {
            predictions.push(prediction);
        }
    }

    log::debug!("Generated {} mood predictions", predictions.len());
    predictions
}

fn trend_predictions(recent_avg: f64, previous_avg: f64) -> Vec<Prediction> {
    let trend = recent_avg - previous_avg;
    let mut predictions = Vec::new();

    if trend < -1.5 && recent_avg < 5.0 {
        predictions.push(Prediction {
            prediction_type: PredictionType::Risk,
            confidence: (trend.abs() * 30.0).min(90.0).round() as u32,
            timeframe: "Next 3-5 days".to_string(),
            factors: vec![
                "Declining mood trend".to_string(),
                format!("Recent average intensity {:.1}", recent_avg),
            ],
            recommendation:
                "Consider reaching out to your support network and reviewing your safety plan"
                    .to_string(),
            description: format!(
                "Your mood has dropped by {:.1} points compared to the week before",
                trend.abs()
            ),
        });
    }

    if trend > 1.0 && recent_avg > 6.0 {
        predictions.push(Prediction {
            prediction_type: PredictionType::Improvement,
            confidence: (trend * 25.0).min(85.0).round() as u32,
            timeframe: "Next week".to_string(),
            factors: vec![
                "Rising mood trend".to_string(),
                format!("Recent average intensity {:.1}", recent_avg),
            ],
            recommendation: "Keep up the habits that have been helping you".to_string(),
            description: format!(
                "Your mood has improved by {:.1} points compared to the week before",
                trend
            ),
        });
    }

    if trend.abs() < 0.5 && (5.0..=7.0).contains(&recent_avg) {
        predictions.push(Prediction {
            prediction_type: PredictionType::Maintenance,
            confidence: MAINTENANCE_CONFIDENCE,
            timeframe: "Ongoing".to_string(),
            factors: vec!["Stable mood".to_string()],
            recommendation: "Maintain your current routine and self-care practices".to_string(),
            description: "Your mood has been steady over the past two weeks".to_string(),
        });
    }

    predictions
}

fn weekday_prediction(entries: &[MoodEntry], today: NaiveDate) -> Option<Prediction> {
    let mut buckets: HashMap<Weekday, Vec<f64>> = HashMap::new();
    for entry in entries {
        buckets
            .entry(entry.date.weekday())
            .or_default()
            .push(entry.intensity as f64);
    }

    let all: Vec<f64> = entries.iter().map(|e| e.intensity as f64).collect();
    let overall_avg = mean(&all);

    let tomorrow = (today + Duration::days(1)).weekday();
    let samples = buckets.get(&tomorrow)?;
    if samples.len() < MIN_WEEKDAY_SAMPLES {
        return None;
    }

    let day_avg = mean(samples);
    let diff = day_avg - overall_avg;
    if diff.abs() <= 1.0 {
        return None;
    }

    let day_name = weekday_name(tomorrow);
    let prediction = if diff < 0.0 {
        Prediction {
            prediction_type: PredictionType::Risk,
            confidence: WEEKDAY_CONFIDENCE,
            timeframe: "Tomorrow".to_string(),
            factors: vec![format!("{} pattern", day_name)],
            recommendation: format!(
                "Plan something restorative for {} and check in early",
                day_name
            ),
            description: format!("Your mood tends to be lower on {}s", day_name),
        }
    } else {
        Prediction {
            prediction_type: PredictionType::Improvement,
            confidence: WEEKDAY_CONFIDENCE,
            timeframe: "Tomorrow".to_string(),
            factors: vec![format!("{} pattern", day_name)],
            recommendation: format!("Make the most of {} with an activity you enjoy", day_name),
            description: format!("Your mood tends to be higher on {}s", day_name),
        }
    };

    Some(prediction)
}

fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activity::MoodLabel;
    use chrono::{DateTime, TimeZone, Utc};

    /// 2024-03-06 is a Wednesday
    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap()
    }

    /// One entry per day, newest first, with the given intensities
    fn daily(intensities: &[u8]) -> Vec<MoodEntry> {
        intensities
            .iter()
            .enumerate()
            .map(|(i, intensity)| {
                MoodEntry::new(MoodLabel::Neutral, *intensity, now() - Duration::days(i as i64))
            })
            .collect()
    }

    #[test]
    fn test_needs_seven_entries() {
        assert!(generate_predictions(&daily(&[5; 6]), now().date_naive()).is_empty());
    }

    #[test]
    fn test_seven_entries_have_no_previous_window() {
        assert!(generate_predictions(&daily(&[2; 7]), now().date_naive()).is_empty());
    }

    #[test]
    fn test_risk_prediction() {
        let mut intensities = vec![3; 7];
        intensities.extend(vec![6; 7]);
        // Intensities are uniform across weekdays, so no weekday prediction
        let predictions = generate_predictions(&daily(&intensities[..13]), now().date_naive());

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].prediction_type, PredictionType::Risk);
        // trend -3 -> min(90, 90)
        assert_eq!(predictions[0].confidence, 90);
    }

    #[test]
    fn test_improvement_prediction() {
        let mut intensities = vec![8; 7];
        intensities.extend(vec![6; 6]);
        let predictions = generate_predictions(&daily(&intensities), now().date_naive());

        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].prediction_type, PredictionType::Improvement);
        assert_eq!(predictions[0].confidence, 50);
    }

    #[test]
    fn test_maintenance_prediction() {
        let predictions = generate_predictions(&daily(&[6; 10]), now().date_naive());
        assert_eq!(predictions.len(), 1);
        assert_eq!(predictions[0].prediction_type, PredictionType::Maintenance);
        assert_eq!(predictions[0].confidence, 75);
    }

    #[test]
    fn test_unsorted_input_is_sorted() {
        let mut intensities = vec![8; 7];
        intensities.extend(vec![6; 6]);
        let mut entries = daily(&intensities);
        entries.reverse();

        let predictions = generate_predictions(&entries, now().date_naive());
        assert_eq!(predictions[0].prediction_type, PredictionType::Improvement);
    }

    #[test]
    fn test_weekday_prediction_appended_last() {
        // 21 days, newest first; Thursdays (tomorrow) are consistently low
        let entries: Vec<MoodEntry> = (0..21)
            .map(|i| {
                let at = now() - Duration::days(i);
                let intensity = if at.weekday() == Weekday::Thu { 2 } else { 6 };
                MoodEntry::new(MoodLabel::Neutral, intensity, at)
            })
            .collect();

        let predictions = generate_predictions(&entries, now().date_naive());
        let last = predictions.last().unwrap();
        assert_eq!(last.prediction_type, PredictionType::Risk);
        assert_eq!(last.confidence, 65);
        assert_eq!(last.timeframe, "Tomorrow");
        assert!(last.description.contains("Thursday"));
    }

    #[test]
    fn test_weekday_prediction_needs_fourteen_entries() {
        let entries: Vec<MoodEntry> = (0..13)
            .map(|i| {
                let at = now() - Duration::days(i);
                let intensity = if at.weekday() == Weekday::Thu { 1 } else { 6 };
                MoodEntry::new(MoodLabel::Neutral, intensity, at)
            })
            .collect();

        let predictions = generate_predictions(&entries, now().date_naive());
        assert!(predictions
            .iter()
            .all(|p| p.timeframe != "Tomorrow"));
    }
}
