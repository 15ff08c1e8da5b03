//! Achievement progress engine
//!
//! Recomputes every achievement from a `UserProgress` snapshot. Completion is
//! one-way: a completed achievement stays completed and pinned at its
//! requirement even if the counters behind it shrink. Unlock notifications are
//! left to the caller, which receives the ids unlocked by each pass.

use chrono::{NaiveDate, Utc};

use super::catalog::{all_definitions, default_achievements, definition};
use super::models::*;
use crate::progress::UserProgress;
use crate::storage::{AchievementStore, Result};

pub struct AchievementEngine<S: AchievementStore> {
    store: S,
    achievements: Vec<Achievement>,
}

impl<S: AchievementStore> AchievementEngine<S> {
    /// Load the persisted catalog, creating and saving a fresh one on first run
    pub fn initialize(store: S) -> Result<Self> {
        let achievements = match store.load_achievements()? {
            Some(mut existing) => {
                // Definitions added since the catalog was created
                let mut added = false;
                for def in all_definitions() {
                    if !existing.iter().any(|a| a.id == def.id) {
                        existing.push(def.instantiate());
                        added = true;
                    }
                }
                if added {
                    store.save_achievements(&existing)?;
                }
                existing
            }
            None => {
                log::info!("Creating achievement catalog");
                let fresh = default_achievements();
                store.save_achievements(&fresh)?;
                fresh
            }
        };

        Ok(Self {
            store,
            achievements,
        })
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn get(&self, id: AchievementId) -> Option<&Achievement> {
        self.achievements.iter().find(|a| a.id == id)
    }

    /// Recompute progress as of `today` and persist the catalog. Returns the
    /// ids that became completed during this pass.
    pub fn update(&mut self, progress: &UserProgress, today: NaiveDate) -> Result<Vec<AchievementId>> {
        let mut unlocked = Vec::new();

        for achievement in &mut self.achievements {
            debug_assert!(achievement.requirement > 0, "requirement must be positive");

            if achievement.completed {
                achievement.current_progress = achievement.requirement;
                continue;
            }

            let value = achievement.id.progress_value(progress);
            if value >= achievement.requirement {
                achievement.completed = true;
                achievement.unlocked_date = Some(today);
                achievement.current_progress = achievement.requirement;
                log::info!("Achievement unlocked: {}", achievement.id.as_str());
                unlocked.push(achievement.id);
            } else {
                achievement.current_progress = value;
            }
        }

        self.store.save_achievements(&self.achievements)?;
        Ok(unlocked)
    }

    /// Recompute progress using the current UTC date
    pub fn update_now(&mut self, progress: &UserProgress) -> Result<Vec<AchievementId>> {
        self.update(progress, Utc::now().date_naive())
    }

    pub fn summary(&self) -> AchievementSummary {
        let total = self.achievements.len();
        let completed = self.achievements.iter().filter(|a| a.completed).count();
        let completion_percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u32
        };

        AchievementSummary {
            completed,
            total,
            completion_percent,
        }
    }
}

/// User-facing messages for freshly unlocked achievements
pub fn unlock_notices(ids: &[AchievementId]) -> Vec<UnlockNotice> {
    ids.iter()
        .map(|id| {
            let def = definition(*id);
            UnlockNotice {
                id: *id,
                title: def.title.to_string(),
                message: format!("Achievement unlocked: {}! {}", def.title, def.description),
            }
        })
        .collect()
}
