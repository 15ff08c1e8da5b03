//! Activity records supplied by the app's data layer

pub mod models;

pub use models::*;
