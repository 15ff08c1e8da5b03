//! Archive of past wellness scores

use serde::{Deserialize, Serialize};

use super::models::WellnessScore;

/// Snapshots ordered oldest to newest, keyed by `calculated_at`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WellnessHistory {
    snapshots: Vec<WellnessScore>,
}

impl WellnessHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive a snapshot, replacing one with the same timestamp and dropping
    /// the oldest snapshots beyond `limit`
    pub fn archive(&mut self, score: WellnessScore, limit: usize) {
        self.snapshots
            .retain(|s| s.calculated_at != score.calculated_at);
        self.snapshots.push(score);
        self.snapshots.sort_by_key(|s| s.calculated_at);

        if self.snapshots.len() > limit {
            let excess = self.snapshots.len() - limit;
            self.snapshots.drain(..excess);
        }
    }

    pub fn latest(&self) -> Option<&WellnessScore> {
        self.snapshots.last()
    }

    pub fn snapshots(&self) -> &[WellnessScore] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Change in overall score between the two newest snapshots
    pub fn overall_change(&self) -> Option<i64> {
        match self.snapshots.as_slice() {
            [.., previous, latest] => Some(latest.overall as i64 - previous.overall as i64),
            _ => None,
        }
    }
}
