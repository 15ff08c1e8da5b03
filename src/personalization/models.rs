//! Personalization data models

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Quote grouping used for relevance boosts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum QuoteCategory {
    Motivation,
    Mindfulness,
    SelfCare,
    Resilience,
    Gratitude,
}

/// Catalog quote
#[derive(Debug, Clone, Copy)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
    pub category: QuoteCategory,
}

/// Quote picked for the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizedContent {
    pub quote: String,
    pub author: String,
    pub category: QuoteCategory,
    /// 0.0 - 1.0
    pub relevance_score: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PredictionType {
    Risk,
    Improvement,
    Maintenance,
}

/// Forecast derived from mood-intensity trends (not stored)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(rename = "type")]
    pub prediction_type: PredictionType,
    /// 0-100
    pub confidence: u32,
    pub timeframe: String,
    pub factors: Vec<String>,
    pub recommendation: String,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReminderKind {
    MoodCheckIn,
    Mindfulness,
    Journal,
    SelfCare,
    StreakProtection,
    ReEngagement,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A daily reminder slot
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub kind: ReminderKind,
    /// Time of day (HH:MM)
    #[serde(with = "hh_mm")]
    pub time: NaiveTime,
    pub message: String,
    pub priority: Priority,
}

/// A feature suggested to the user with the reason it was picked
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeatureRecommendation {
    pub feature: String,
    pub title: String,
    pub reason: String,
    /// 0.0 - 1.0
    pub relevance_score: f64,
}

mod hh_mm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, FORMAT).map_err(serde::de::Error::custom)
    }
}
