pub mod achievements;
pub mod history;
pub mod predict;
pub mod quote;
pub mod recommend;
pub mod reminders;
pub mod reset;
pub mod score;
pub mod streak;
pub mod track;
