use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::stores::{AchievementStore, BehaviorStore};
use crate::achievements::Achievement;
use crate::activity::{
    CreateMoodRequest, JournalEntry, MindfulnessProgress, MoodEntry, MoodLabel,
};
use crate::behavior::UserBehavior;
use crate::wellness::{WellnessHistory, WellnessScore};

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

const MOODS_FILE: &str = "moods.json";
const JOURNAL_FILE: &str = "journal.json";
const MINDFULNESS_FILE: &str = "mindfulness.json";
const ACHIEVEMENTS_FILE: &str = "achievements.json";
const BEHAVIOR_FILE: &str = "behavior.json";
const HISTORY_FILE: &str = "wellness_history.json";

/// JSON file store for activity records and computed state
///
/// Reads never fail on bad data: a missing file yields the empty shape and a
/// corrupt file is logged and treated as missing.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("haven"))
            .ok_or(StorageError::DataDirNotFound)
    }

    /// Initialize the data directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    fn path(&self, file: &str) -> PathBuf {
        self.base_path.join(file)
    }

    /// Read a JSON file, falling back to `None` when missing or malformed
    fn read_json<T: DeserializeOwned>(&self, file: &str) -> Result<Option<T>> {
        let path = self.path(file);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                // Move it aside so the next write does not destroy it
                let backup = path.with_extension("json.bak");
                log::warn!("Malformed {:?} ({}), moving it to {:?}", path, e, backup);
                fs::rename(&path, &backup)?;
                Ok(None)
            }
        }
    }

    fn write_json<T: Serialize + ?Sized>(&self, file: &str, value: &T) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.path(file), json)?;
        Ok(())
    }

    // ===== Activity Records =====

    /// List mood entries, newest first
    pub fn list_mood_entries(&self) -> Result<Vec<MoodEntry>> {
        let mut entries: Vec<MoodEntry> = self.read_json(MOODS_FILE)?.unwrap_or_default();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(entries)
    }

    pub fn list_journal_entries(&self) -> Result<Vec<JournalEntry>> {
        Ok(self.read_json(JOURNAL_FILE)?.unwrap_or_default())
    }

    pub fn get_mindfulness_progress(&self) -> Result<MindfulnessProgress> {
        Ok(self.read_json(MINDFULNESS_FILE)?.unwrap_or_default())
    }

    /// Log a new mood entry stamped with the current time
    pub fn add_mood_entry(&self, request: CreateMoodRequest) -> Result<MoodEntry> {
        if !(1..=10).contains(&request.intensity) {
            return Err(StorageError::InvalidOperation(
                "Intensity must be between 1 and 10".to_string(),
            ));
        }
        if request.mood.trim().is_empty() {
            return Err(StorageError::InvalidOperation(
                "Mood label must not be empty".to_string(),
            ));
        }

        let mut entry = MoodEntry::new(
            MoodLabel::from(request.mood.trim()),
            request.intensity,
            Utc::now(),
        )
        .with_factors(request.factors);
        entry.notes = request.notes;

        let mut entries = self.list_mood_entries()?;
        entries.insert(0, entry.clone());
        self.write_json(MOODS_FILE, &entries)?;

        Ok(entry)
    }

    // ===== Wellness History =====

    pub fn load_wellness_history(&self) -> Result<WellnessHistory> {
        Ok(self.read_json(HISTORY_FILE)?.unwrap_or_default())
    }

    /// Archive a score snapshot, keeping at most `limit` snapshots
    pub fn archive_wellness_score(&self, score: WellnessScore, limit: usize) -> Result<()> {
        let mut history = self.load_wellness_history()?;
        log::info!(
            "Archiving wellness score {} calculated at {}",
            score.overall,
            score.calculated_at
        );
        history.archive(score, limit);
        self.write_json(HISTORY_FILE, &history)
    }
}

impl AchievementStore for FileStorage {
    fn load_achievements(&self) -> Result<Option<Vec<Achievement>>> {
        self.read_json(ACHIEVEMENTS_FILE)
    }

    fn save_achievements(&self, achievements: &[Achievement]) -> Result<()> {
        self.write_json(ACHIEVEMENTS_FILE, achievements)
    }
}

impl BehaviorStore for FileStorage {
    fn load_behavior(&self) -> Result<Option<UserBehavior>> {
        self.read_json(BEHAVIOR_FILE)
    }

    fn save_behavior(&self, behavior: &UserBehavior) -> Result<()> {
        self.write_json(BEHAVIOR_FILE, behavior)
    }

    fn clear_behavior(&self) -> Result<()> {
        let path = self.path(BEHAVIOR_FILE);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::achievements::default_achievements;
    use tempfile::TempDir;

    fn create_test_storage() -> (FileStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().to_path_buf());
        storage.init().unwrap();
        (storage, temp_dir)
    }

    fn mood_request(mood: &str, intensity: u8) -> CreateMoodRequest {
        CreateMoodRequest {
            mood: mood.to_string(),
            intensity,
            factors: vec!["sleep".to_string()],
            notes: None,
        }
    }

    #[test]
    fn test_missing_files_are_empty() {
        let (storage, _temp) = create_test_storage();

        assert!(storage.list_mood_entries().unwrap().is_empty());
        assert!(storage.list_journal_entries().unwrap().is_empty());
        assert!(storage.get_mindfulness_progress().unwrap().sessions.is_empty());
        assert!(storage.load_achievements().unwrap().is_none());
        assert!(storage.load_behavior().unwrap().is_none());
        assert!(storage.load_wellness_history().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_falls_back_to_default() {
        let (storage, temp) = create_test_storage();
        fs::write(temp.path().join(MOODS_FILE), "{not json").unwrap();
        fs::write(temp.path().join(BEHAVIOR_FILE), "[1, 2").unwrap();

        assert!(storage.list_mood_entries().unwrap().is_empty());
        assert!(storage.load_behavior().unwrap().is_none());
        assert!(temp.path().join("behavior.json.bak").exists());
    }

    #[test]
    fn test_write_after_corrupt_file_keeps_backup() {
        let (storage, temp) = create_test_storage();
        let moods = temp.path().join(MOODS_FILE);
        fs::write(&moods, "[{\"mood\": \"Happy\"").unwrap();

        storage.add_mood_entry(mood_request("Happy", 5)).unwrap();

        let backup = fs::read_to_string(temp.path().join("moods.json.bak")).unwrap();
        assert_eq!(backup, "[{\"mood\": \"Happy\"");
        assert_eq!(storage.list_mood_entries().unwrap().len(), 1);
    }

    #[test]
    fn test_add_mood_entry() {
        let (storage, _temp) = create_test_storage();

        let first = storage.add_mood_entry(mood_request("Happy", 7)).unwrap();
        let second = storage.add_mood_entry(mood_request("sad", 3)).unwrap();
        assert_eq!(first.mood, MoodLabel::Happy);
        assert_eq!(second.mood, MoodLabel::Sad);

        let entries = storage.list_mood_entries().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].factors, vec!["sleep"]);
    }

    #[test]
    fn test_add_mood_entry_validates_intensity() {
        let (storage, _temp) = create_test_storage();

        assert!(storage.add_mood_entry(mood_request("Happy", 0)).is_err());
        assert!(storage.add_mood_entry(mood_request("Happy", 11)).is_err());
        assert!(storage.add_mood_entry(mood_request("  ", 5)).is_err());
        assert!(storage.list_mood_entries().unwrap().is_empty());
    }

    #[test]
    fn test_achievements_round_trip() {
        let (storage, _temp) = create_test_storage();
        let catalog = default_achievements();

        storage.save_achievements(&catalog).unwrap();
        let loaded = storage.load_achievements().unwrap().unwrap();
        assert_eq!(loaded, catalog);
    }

    #[test]
    fn test_behavior_save_and_clear() {
        let (storage, _temp) = create_test_storage();
        let mut behavior = UserBehavior::new();
        behavior.track_feature_usage("mood", Utc::now());

        storage.save_behavior(&behavior).unwrap();
        assert_eq!(storage.load_behavior().unwrap(), Some(behavior));

        storage.clear_behavior().unwrap();
        assert!(storage.load_behavior().unwrap().is_none());
    }

    #[test]
    fn test_archive_wellness_score() {
        let (storage, _temp) = create_test_storage();
        let now = Utc::now();

        for i in 0..4 {
            let score = WellnessScore {
                overall: 40 + i,
                metrics: Vec::new(),
                calculated_at: now + chrono::Duration::seconds(i as i64),
                improvements: Vec::new(),
                strengths: Vec::new(),
            };
            storage.archive_wellness_score(score, 3).unwrap();
        }

        let history = storage.load_wellness_history().unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().overall, 43);
    }
}
