//! Persistence seams for computed state

use std::cell::RefCell;

use super::file_storage::Result;
use crate::achievements::Achievement;
use crate::behavior::UserBehavior;

/// Where the achievement catalog is persisted
pub trait AchievementStore {
    /// `None` when no catalog has been persisted yet
    fn load_achievements(&self) -> Result<Option<Vec<Achievement>>>;
    fn save_achievements(&self, achievements: &[Achievement]) -> Result<()>;
}

/// Where the user behavior record is persisted
pub trait BehaviorStore {
    fn load_behavior(&self) -> Result<Option<UserBehavior>>;
    fn save_behavior(&self, behavior: &UserBehavior) -> Result<()>;
    fn clear_behavior(&self) -> Result<()>;
}

impl<T: AchievementStore + ?Sized> AchievementStore for &T {
    fn load_achievements(&self) -> Result<Option<Vec<Achievement>>> {
        (**self).load_achievements()
    }

    fn save_achievements(&self, achievements: &[Achievement]) -> Result<()> {
        (**self).save_achievements(achievements)
    }
}

impl<T: BehaviorStore + ?Sized> BehaviorStore for &T {
    fn load_behavior(&self) -> Result<Option<UserBehavior>> {
        (**self).load_behavior()
    }

    fn save_behavior(&self, behavior: &UserBehavior) -> Result<()> {
        (**self).save_behavior(behavior)
    }

    fn clear_behavior(&self) -> Result<()> {
        (**self).clear_behavior()
    }
}

/// In-memory store for embedding and tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    achievements: RefCell<Option<Vec<Achievement>>>,
    behavior: RefCell<Option<UserBehavior>>,
    writes: RefCell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of save calls received
    pub fn write_count(&self) -> usize {
        *self.writes.borrow()
    }
}

impl AchievementStore for MemoryStore {
    fn load_achievements(&self) -> Result<Option<Vec<Achievement>>> {
        Ok(self.achievements.borrow().clone())
    }

    fn save_achievements(&self, achievements: &[Achievement]) -> Result<()> {
        *self.achievements.borrow_mut() = Some(achievements.to_vec());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}

impl BehaviorStore for MemoryStore {
    fn load_behavior(&self) -> Result<Option<UserBehavior>> {
        Ok(self.behavior.borrow().clone())
    }

    fn save_behavior(&self, behavior: &UserBehavior) -> Result<()> {
        *self.behavior.borrow_mut() = Some(behavior.clone());
        *self.writes.borrow_mut() += 1;
        Ok(())
    }

    fn clear_behavior(&self) -> Result<()> {
        *self.behavior.borrow_mut() = None;
        *self.writes.borrow_mut() += 1;
        Ok(())
    }
}
