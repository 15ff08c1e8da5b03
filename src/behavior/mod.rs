//! User behavior tracking module

pub mod models;
pub mod queue;
pub mod tracker;

pub use models::*;
pub use queue::BoundedQueue;
