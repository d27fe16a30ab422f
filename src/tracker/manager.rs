//! In-memory workout log and goals, flushed to a JSON file on every change.

use chrono::NaiveDate;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::summary::{
    ActivityShare, DashboardSummary, GoalProgress, SummaryTable, GOAL_COLUMNS, WORKOUT_COLUMNS,
};
use crate::goals::{Goal, TargetType};
use crate::storage::{JsonStore, StoreDocument, StoreError};
use crate::workouts::Workout;

/// Holds workouts and goals in insertion order and answers range queries.
///
/// Only one tracker should operate on a given data file at a time.
#[derive(Debug)]
pub struct FitnessTracker {
    store: Option<JsonStore>,
    workouts: Vec<Workout>,
    goals: Vec<Goal>,
}

impl FitnessTracker {
    /// Open the tracker backed by `path`.
    ///
    /// A missing file is an empty log. A malformed file is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = JsonStore::new(path);
        let document = store.load()?;
        tracing::info!(
            path = %store.path().display(),
            workouts = document.workouts.len(),
            goals = document.goals.len(),
            "Loaded fitness log"
        );
        Ok(Self {
            store: Some(store),
            workouts: document.workouts,
            goals: document.goals,
        })
    }

    /// Open the tracker, starting empty if the file cannot be parsed.
    ///
    /// The malformed file stays on disk until the next write replaces it.
    pub fn open_or_reset(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = JsonStore::new(path);
        let document = match store.load() {
            Ok(document) => document,
            Err(e @ StoreError::Corrupt { .. }) => {
                tracing::warn!(error = %e, "Discarding unreadable fitness log, starting empty");
                StoreDocument::default()
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            store: Some(store),
            workouts: document.workouts,
            goals: document.goals,
        })
    }

    /// A tracker with no backing file.
    pub fn in_memory() -> Self {
        Self {
            store: None,
            workouts: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Path of the backing file, if any.
    pub fn data_file(&self) -> Option<&Path> {
        self.store.as_ref().map(JsonStore::path)
    }

    /// All workouts in insertion order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// All goals in insertion order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Append a workout and persist.
    pub fn add_workout(&mut self, workout: Workout) -> Result<(), StoreError> {
        tracing::debug!(date = %workout.date, activity = %workout.activity_type, "Adding workout");
        self.workouts.push(workout);
        self.persist()
    }

    /// Append a goal and persist. The date range is not checked here.
    pub fn add_goal(&mut self, goal: Goal) -> Result<(), StoreError> {
        tracing::debug!(target_type = %goal.target_type, "Adding goal");
        self.goals.push(goal);
        self.persist()
    }

    /// Write the full state to the backing file.
    pub fn persist(&self) -> Result<(), StoreError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        store.save(&StoreDocument {
            workouts: self.workouts.clone(),
            goals: self.goals.clone(),
        })
    }

    /// Re-read the backing file. In-memory state is kept if loading fails.
    pub fn reload(&mut self) -> Result<(), StoreError> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        let document = store.load()?;
        self.workouts = document.workouts;
        self.goals = document.goals;
        Ok(())
    }

    /// Workouts dated within `[start, end]`, in insertion order.
    pub fn get_workouts_by_date_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Workout> {
        self.workouts
            .iter()
            .filter(|w| w.is_within(start, end))
            .collect()
    }

    /// Total calories burned within `[start, end]`.
    pub fn get_total_calories_burned(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        self.get_workouts_by_date_range(start, end)
            .iter()
            .map(|w| u64::from(w.calories_burned))
            .sum()
    }

    /// Total minutes within `[start, end]`.
    pub fn get_total_duration(&self, start: NaiveDate, end: NaiveDate) -> u64 {
        self.get_workouts_by_date_range(start, end)
            .iter()
            .map(|w| u64::from(w.duration))
            .sum()
    }

    /// All workouts, newest first. Workouts on the same day keep insertion order.
    pub fn workouts_newest_first(&self) -> Vec<&Workout> {
        let mut sorted: Vec<&Workout> = self.workouts.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }

    /// All workouts as a table, in `workouts_newest_first` order.
    pub fn get_workout_summary(&self) -> SummaryTable {
        let mut table = SummaryTable::new(&WORKOUT_COLUMNS);
        for workout in self.workouts_newest_first() {
            table.push_row(vec![
                workout.date.to_string(),
                workout.activity_type.clone(),
                workout.duration.to_string(),
                workout.calories_burned.to_string(),
                workout.notes.clone(),
            ]);
        }
        table
    }

    /// All goals in insertion order.
    pub fn get_goals_summary(&self) -> SummaryTable {
        let mut table = SummaryTable::new(&GOAL_COLUMNS);
        for goal in &self.goals {
            table.push_row(vec![
                goal.target_type.to_string(),
                goal.target_value.to_string(),
                goal.start_date.to_string(),
                goal.end_date.to_string(),
                goal.description.clone(),
            ]);
        }
        table
    }

    /// Amount achieved toward `goal` over its date range.
    pub fn goal_actual(&self, goal: &Goal) -> u64 {
        match goal.target_type {
            TargetType::Calories => self.get_total_calories_burned(goal.start_date, goal.end_date),
            TargetType::Duration => self.get_total_duration(goal.start_date, goal.end_date),
            TargetType::Workouts => {
                self.get_workouts_by_date_range(goal.start_date, goal.end_date)
                    .len() as u64
            }
        }
    }

    /// Percentage of the goal's target achieved, capped at 100.
    ///
    /// A zero target counts as already complete.
    pub fn calculate_goal_progress(&self, goal: &Goal) -> f64 {
        if goal.target_value == 0 {
            return 100.0;
        }
        let actual = self.goal_actual(goal) as f64;
        (actual * 100.0 / f64::from(goal.target_value)).min(100.0)
    }

    /// Every stored goal with its progress, in insertion order.
    pub fn goal_progress_report(&self) -> Vec<GoalProgress> {
        self.goals
            .iter()
            .map(|goal| GoalProgress {
                goal: goal.clone(),
                progress: self.calculate_goal_progress(goal),
            })
            .collect()
    }

    /// Workout count per activity label over the whole log.
    ///
    /// Most frequent first; ties ordered by label.
    pub fn activity_breakdown(&self) -> Vec<ActivityShare> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for workout in &self.workouts {
            *counts.entry(workout.activity_type.as_str()).or_default() += 1;
        }

        let mut shares: Vec<ActivityShare> = counts
            .into_iter()
            .map(|(activity, count)| ActivityShare {
                activity: activity.to_string(),
                count,
            })
            .collect();
        shares.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.activity.cmp(&b.activity)));
        shares
    }

    /// Dashboard figures for `[start, end]`.
    pub fn dashboard(&self, start: NaiveDate, end: NaiveDate) -> DashboardSummary {
        DashboardSummary {
            start,
            end,
            total_workouts: self.get_workouts_by_date_range(start, end).len(),
            total_minutes: self.get_total_duration(start, end),
            total_calories: self.get_total_calories_burned(start, end),
            activity_breakdown: self.activity_breakdown(),
            goals: self.goal_progress_report(),
        }
    }
}

impl Default for FitnessTracker {
    fn default() -> Self {
        Self::in_memory()
    }
}
