//! Achievements and badge progress module

pub mod catalog;
pub mod engine;
pub mod models;

pub use catalog::{all_definitions, default_achievements, AchievementDefinition};
pub use engine::{unlock_notices, AchievementEngine};
pub use models::*;
