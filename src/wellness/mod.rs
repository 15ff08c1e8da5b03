//! Wellness scoring module

pub mod aggregator;
pub mod history;
pub mod metrics;
pub mod models;

pub use aggregator::{calculate_wellness_score, calculate_wellness_score_now, WellnessInputs};
pub use history::WellnessHistory;
pub use models::*;
