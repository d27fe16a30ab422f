//! Fitness tracker: the workout log, goals and the queries over them.

pub mod manager;
pub mod summary;

pub use manager::FitnessTracker;
pub use summary::{ActivityShare, DashboardSummary, GoalProgress, SummaryTable};
