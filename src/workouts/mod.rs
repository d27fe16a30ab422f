//! Workout log records.

pub mod types;

pub use types::{Workout, PRESET_ACTIVITIES};
