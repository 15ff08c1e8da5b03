use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use haven_lib::achievements::{AchievementEngine, AchievementId};
use haven_lib::activity::{JournalEntry, MindfulnessProgress, MoodEntry};
use haven_lib::behavior::UserBehavior;
use haven_lib::config::Config;
use haven_lib::personalization::PersonalizationEngine;
use haven_lib::progress::UserProgress;
use haven_lib::storage::FileStorage;
use haven_lib::wellness::WellnessInputs;

/// Shared application state for CLI commands
pub struct App {
    pub storage: FileStorage,
    pub config: Config,
}

/// Activity records loaded from storage
pub struct Activity {
    pub moods: Vec<MoodEntry>,
    pub journal: Vec<JournalEntry>,
    pub mindfulness: MindfulnessProgress,
}

impl Activity {
    pub fn inputs<'a>(&'a self, behavior: Option<&'a UserBehavior>) -> WellnessInputs<'a> {
        WellnessInputs {
            moods: &self.moods,
            journal: &self.journal,
            mindfulness: Some(&self.mindfulness),
            behavior,
        }
    }
}

impl App {
    /// Load config and open the data directory. `--data-dir` beats the config
    /// file, which beats the platform default.
    pub fn new(data_dir: Option<&Path>, config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load(config_path).context("Failed to load config")?;

        let data_dir = match data_dir.map(Path::to_path_buf).or_else(|| config.data_dir.clone()) {
            Some(dir) => dir,
            None => FileStorage::default_data_dir().context("Failed to get data directory")?,
        };

        let storage = FileStorage::new(data_dir);
        storage
            .init()
            .context("Failed to initialize data directory")?;

        Ok(Self { storage, config })
    }

    pub fn activity(&self) -> Result<Activity> {
        Ok(Activity {
            moods: self
                .storage
                .list_mood_entries()
                .context("Failed to load mood entries")?,
            journal: self
                .storage
                .list_journal_entries()
                .context("Failed to load journal entries")?,
            mindfulness: self
                .storage
                .get_mindfulness_progress()
                .context("Failed to load mindfulness progress")?,
        })
    }

    pub fn personalization(&self) -> Result<PersonalizationEngine<&FileStorage>> {
        let engine = PersonalizationEngine::new(&self.storage)
            .context("Failed to load behavior record")?
            .with_reminders(self.config.reminders.enabled)
            .with_utc_offset(self.utc_offset_minutes());
        Ok(engine)
    }

    /// Configured offset, or the system's local one
    pub fn utc_offset_minutes(&self) -> i32 {
        self.config
            .utc_offset_minutes
            .unwrap_or_else(|| Local::now().offset().local_minus_utc() / 60)
    }

    /// Recompute achievements from the stored activity. Returns the engine and
    /// the ids unlocked by this pass.
    pub fn refresh_achievements(
        &self,
        today: NaiveDate,
    ) -> Result<(AchievementEngine<&FileStorage>, Vec<AchievementId>)> {
        let activity = self.activity()?;
        let personalization = self.personalization()?;
        let features_used = personalization
            .behavior()
            .map(|b| b.most_used_features.clone())
            .unwrap_or_default();

        let progress = UserProgress::from_activity(
            &activity.moods,
            &activity.journal,
            &activity.mindfulness,
            &features_used,
            today,
        );

        let mut engine = AchievementEngine::initialize(&self.storage)
            .context("Failed to load achievements")?;
        let unlocked = engine
            .update(&progress, today)
            .context("Failed to save achievements")?;

        Ok((engine, unlocked))
    }
}
