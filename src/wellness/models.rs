//! Wellness score data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Short-term direction of a metric
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

/// The five sub-metrics of the wellness score
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum MetricKind {
    Mood,
    Consistency,
    Engagement,
    Mindfulness,
    Journaling,
}

impl MetricKind {
    /// Catalog order, also the order metrics appear in a score
    pub const ALL: [MetricKind; 5] = [
        MetricKind::Mood,
        MetricKind::Consistency,
        MetricKind::Engagement,
        MetricKind::Mindfulness,
        MetricKind::Journaling,
    ];

    /// Fixed weight; the five weights sum to 1.0
    pub fn weight(&self) -> f64 {
        match self {
            MetricKind::Mood => 0.30,
            MetricKind::Consistency => 0.25,
            MetricKind::Engagement => 0.20,
            MetricKind::Mindfulness => 0.15,
            MetricKind::Journaling => 0.10,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::Mood => "Mood",
            MetricKind::Consistency => "Consistency",
            MetricKind::Engagement => "Engagement",
            MetricKind::Mindfulness => "Mindfulness",
            MetricKind::Journaling => "Journaling",
        }
    }
}

/// Output of a single metric calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricResult {
    /// 0-100
    pub value: u32,
    pub trend: Trend,
    pub suggestion: String,
}

impl MetricResult {
    pub fn new(value: u32, trend: Trend, suggestion: &str) -> Self {
        Self {
            value: value.min(100),
            trend,
            suggestion: suggestion.to_string(),
        }
    }
}

/// A weighted sub-metric of the wellness score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessMetric {
    pub name: String,
    pub value: u32,
    pub weight: f64,
    pub trend: Trend,
    pub suggestion: String,
}

impl WellnessMetric {
    pub fn from_result(kind: MetricKind, result: MetricResult) -> Self {
        Self {
            name: kind.name().to_string(),
            value: result.value.min(100),
            weight: kind.weight(),
            trend: result.trend,
            suggestion: result.suggestion,
        }
    }
}

/// Composite wellness score (computed on demand, optionally archived)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessScore {
    /// Weighted sum of the metric values, rounded
    pub overall: u32,
    pub metrics: Vec<WellnessMetric>,
    pub calculated_at: DateTime<Utc>,
    /// Suggestions for the weakest metrics, weakest first
    pub improvements: Vec<String>,
    /// Labels for metrics scoring 80 or more
    pub strengths: Vec<String>,
}
