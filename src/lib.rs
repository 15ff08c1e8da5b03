//! Haven wellness core
//!
//! Wellness scoring, streak and achievement tracking, behavior tracking and
//! personalization for a mental-wellness companion. Everything is computed on
//! demand from the activity records held by [`storage::FileStorage`].

pub mod achievements;
pub mod activity;
pub mod behavior;
pub mod config;
pub mod personalization;
pub mod progress;
pub mod storage;
pub mod wellness;
