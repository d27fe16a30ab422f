//! Goal type definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// What a goal counts toward its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetType {
    /// Total calories burned
    Calories,
    /// Total minutes exercised
    Duration,
    /// Number of workouts logged
    Workouts,
}

impl TargetType {
    /// All target types, in display order.
    pub const ALL: [TargetType; 3] = [
        TargetType::Calories,
        TargetType::Duration,
        TargetType::Workouts,
    ];

    /// Label used in storage and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetType::Calories => "calories",
            TargetType::Duration => "duration",
            TargetType::Workouts => "workouts",
        }
    }

    /// Unit the target value is expressed in.
    pub fn unit(&self) -> &'static str {
        match self {
            TargetType::Calories => "kcal",
            TargetType::Duration => "min",
            TargetType::Workouts => "workouts",
        }
    }
}

impl std::fmt::Display for TargetType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = GoalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TargetType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| GoalError::UnknownTargetType(s.to_string()))
    }
}

/// A target to reach within a date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Goal {
    /// What is being counted
    pub target_type: TargetType,
    /// Amount to reach, in the target type's unit
    pub target_value: u32,
    /// First day counted
    pub start_date: NaiveDate,
    /// Last day counted
    pub end_date: NaiveDate,
    /// Free-text description
    #[serde(default)]
    pub description: String,
}

impl Goal {
    /// Create a new goal. No range check is performed here.
    pub fn new(
        target_type: TargetType,
        target_value: u32,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            target_type,
            target_value,
            start_date,
            end_date,
            description: String::new(),
        }
    }

    /// Attach a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Check that the end date is strictly after the start date.
    pub fn validate_range(&self) -> Result<(), GoalError> {
        if self.end_date <= self.start_date {
            return Err(GoalError::InvalidRange {
                start: self.start_date,
                end: self.end_date,
            });
        }
        Ok(())
    }

    /// Convert to a field-name → value mapping with dates as `YYYY-MM-DD`.
    pub fn to_record(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(record) => Ok(record),
            _ => Err(serde::ser::Error::custom("goal did not serialize to an object")),
        }
    }

    /// Rebuild a goal from a field-name → value mapping.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record))
    }
}

/// Goal errors.
#[derive(Debug, thiserror::Error)]
pub enum GoalError {
    #[error("End date must be after start date (start {start}, end {end})")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Unknown target type: {0} (expected calories, duration or workouts)")]
    UnknownTargetType(String),
}
