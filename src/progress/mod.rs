//! Streak and progress tracking module

pub mod models;
pub mod streak;

pub use models::*;
pub use streak::{calculate_streaks, StreakSummary};
