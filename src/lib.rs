//! FitLog - Personal Fitness Log
//!
//! Records workouts, tracks goals over date ranges and reports summary metrics.
//! State lives in a single JSON file that is rewritten atomically after every change.

pub mod goals;
pub mod storage;
pub mod tracker;
pub mod workouts;

// Re-export commonly used types
pub use goals::{Goal, GoalError, TargetType};
pub use storage::{AppConfig, StoreError};
pub use tracker::FitnessTracker;
pub use workouts::Workout;
