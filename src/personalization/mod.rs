//! Personalized quotes, reminders, feature recommendations and mood predictions

pub mod engine;
pub mod models;
pub mod predictions;
pub mod quotes;
pub mod recommendations;
pub mod reminders;

pub use engine::PersonalizationEngine;
pub use models::*;
pub use predictions::generate_predictions;
pub use quotes::{quote_relevance, select_quote, QUOTES};
pub use recommendations::recommend_features;
pub use reminders::{anchor_time, generate_reminders};
