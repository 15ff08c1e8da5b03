//! Personalization service
//!
//! One engine per session, constructed by the caller with the store that owns
//! the behavior record. The record is loaded once and written back after every
//! mutation.

use chrono::{DateTime, Utc};

use super::models::{FeatureRecommendation, PersonalizedContent, Reminder};
use super::quotes::select_quote;
use super::recommendations::recommend_features;
use super::reminders::generate_reminders;
use crate::activity::MoodLabel;
use crate::behavior::UserBehavior;
use crate::storage::{BehaviorStore, Result};

pub struct PersonalizationEngine<S: BehaviorStore> {
    store: S,
    behavior: Option<UserBehavior>,
    reminders_enabled: bool,
    utc_offset_minutes: i32,
}

impl<S: BehaviorStore> PersonalizationEngine<S> {
    pub fn new(store: S) -> Result<Self> {
        let behavior = store.load_behavior()?;
        if behavior.is_none() {
            log::debug!("No behavior record yet, using defaults");
        }

        Ok(Self {
            store,
            utc_offset_minutes: behavior.as_ref().map_or(0, |b| b.utc_offset_minutes),
            behavior,
            reminders_enabled: true,
        })
    }

    /// Turn reminder generation on or off
    pub fn with_reminders(mut self, enabled: bool) -> Self {
        self.reminders_enabled = enabled;
        self
    }

    /// Read pattern times on the user's clock. Applied to the loaded record
    /// right away and persisted with its next mutation.
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        if let Some(behavior) = self.behavior.as_mut() {
            behavior.set_utc_offset(minutes);
        }
        self
    }

    /// `None` until the first tracked interaction
    pub fn behavior(&self) -> Option<&UserBehavior> {
        self.behavior.as_ref()
    }

    pub fn track_feature_usage(&mut self, feature: &str, now: DateTime<Utc>) -> Result<()> {
        let behavior = record(&mut self.behavior, self.utc_offset_minutes);
        behavior.track_feature_usage(feature, now);
        self.store.save_behavior(behavior)
    }

    pub fn track_mood_entry(
        &mut self,
        mood: MoodLabel,
        factors: Vec<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        let behavior = record(&mut self.behavior, self.utc_offset_minutes);
        behavior.track_mood_entry(mood, factors, now);
        self.store.save_behavior(behavior)
    }

    /// Forget everything learned about the user
    pub fn reset_preferences(&mut self) -> Result<()> {
        log::info!("Resetting personalization preferences");
        self.behavior = None;
        self.store.clear_behavior()
    }

    pub fn personalized_quote(&self) -> PersonalizedContent {
        select_quote(self.behavior())
    }

    pub fn reminders(&self) -> Vec<Reminder> {
        generate_reminders(self.behavior(), self.reminders_enabled)
    }

    pub fn recommendations(&self, limit: usize) -> Vec<FeatureRecommendation> {
        recommend_features(self.behavior(), limit)
    }
}

/// The loaded record, or a fresh one on the user's clock
fn record(slot: &mut Option<UserBehavior>, utc_offset_minutes: i32) -> &mut UserBehavior {
    slot.get_or_insert_with(|| UserBehavior {
        utc_offset_minutes,
        ..UserBehavior::default()
    })
}
