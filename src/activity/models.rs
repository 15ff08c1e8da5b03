//! Activity record data models

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Categorical mood label picked by the user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum MoodLabel {
    Ecstatic,
    Happy,
    Neutral,
    Sad,
    Angry,
    /// Any label the scoring rules don't know about
    Other(String),
}

impl MoodLabel {
    /// Numeric anchor (0-100) used by the mood score
    pub fn anchor(&self) -> u32 {
        match self {
            MoodLabel::Ecstatic => 100,
            MoodLabel::Happy => 80,
            MoodLabel::Neutral => 60,
            MoodLabel::Sad => 30,
            MoodLabel::Angry => 20,
            MoodLabel::Other(_) => 50,
        }
    }

    /// Sad and Angry count as negative moods
    pub fn is_negative(&self) -> bool {
        matches!(self, MoodLabel::Sad | MoodLabel::Angry)
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoodLabel::Ecstatic => "Ecstatic",
            MoodLabel::Happy => "Happy",
            MoodLabel::Neutral => "Neutral",
            MoodLabel::Sad => "Sad",
            MoodLabel::Angry => "Angry",
            MoodLabel::Other(label) => label,
        }
    }
}

impl From<String> for MoodLabel {
    fn from(label: String) -> Self {
        match label.to_lowercase().as_str() {
            "ecstatic" => MoodLabel::Ecstatic,
            "happy" => MoodLabel::Happy,
            "neutral" => MoodLabel::Neutral,
            "sad" => MoodLabel::Sad,
            "angry" => MoodLabel::Angry,
            _ => MoodLabel::Other(label),
        }
    }
}

impl From<&str> for MoodLabel {
    fn from(label: &str) -> Self {
        MoodLabel::from(label.to_string())
    }
}

impl From<MoodLabel> for String {
    fn from(label: MoodLabel) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for MoodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single mood check-in
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    /// Unique identifier
    pub id: Uuid,
    /// Calendar date of the entry (YYYY-MM-DD, UTC)
    pub date: NaiveDate,
    /// Epoch milliseconds
    pub timestamp: i64,
    pub mood: MoodLabel,
    /// Intensity 1-10
    pub intensity: u8,
    /// Things the user tagged as affecting their mood
    #[serde(default)]
    pub factors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl MoodEntry {
    /// Create an entry stamped at `at`
    pub fn new(mood: MoodLabel, intensity: u8, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: at.date_naive(),
            timestamp: at.timestamp_millis(),
            mood,
            intensity,
            factors: Vec::new(),
            notes: None,
        }
    }

    /// Builder method to add factors
    pub fn with_factors(mut self, factors: Vec<String>) -> Self {
        self.factors = factors;
        self
    }
}

/// A free-text journal entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl JournalEntry {
    pub fn new(content: String, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: at.date_naive(),
            timestamp: at.timestamp_millis(),
            title: None,
            content,
        }
    }
}

/// Kind of mindfulness practice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum SessionType {
    Meditation,
    Breathing,
    BodyScan,
    Grounding,
    #[serde(other)]
    Other,
}

/// A completed mindfulness or breathing session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindfulnessSession {
    pub id: Uuid,
    pub date: NaiveDate,
    pub timestamp: i64,
    pub session_type: SessionType,
    /// Duration in minutes
    pub duration: u32,
}

impl MindfulnessSession {
    pub fn new(session_type: SessionType, duration: u32, at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: at.date_naive(),
            timestamp: at.timestamp_millis(),
            session_type,
            duration,
        }
    }
}

/// Container the mindfulness feature stores its sessions in
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MindfulnessProgress {
    #[serde(default)]
    pub sessions: Vec<MindfulnessSession>,
}

impl MindfulnessProgress {
    /// Total practiced minutes across all sessions
    pub fn total_minutes(&self) -> u32 {
        self.sessions.iter().map(|s| s.duration).sum()
    }
}

/// Request to log a new mood entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMoodRequest {
    pub mood: String,
    pub intensity: u8,
    #[serde(default)]
    pub factors: Vec<String>,
    pub notes: Option<String>,
}
