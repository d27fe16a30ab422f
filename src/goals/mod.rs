//! Fitness goals.
//!
//! A goal sets a target for one of:
//! - calories burned
//! - minutes exercised
//! - number of workouts
//!
//! over an inclusive date range. Progress is derived from the workout log on demand.

pub mod types;

// Re-exports for convenience
pub use types::{Goal, GoalError, TargetType};
