mod file_storage;
mod stores;

pub use file_storage::{FileStorage, Result, StorageError};
pub use stores::{AchievementStore, BehaviorStore, MemoryStore};
