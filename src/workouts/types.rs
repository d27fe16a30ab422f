//! Workout record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Activity labels offered when logging a workout.
///
/// The stored label is free-form; these are only suggestions.
pub const PRESET_ACTIVITIES: [&str; 6] = [
    "Running",
    "Cycling",
    "Swimming",
    "Weight Training",
    "Yoga",
    "Other",
];

/// A single logged exercise session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Calendar day of the session
    pub date: NaiveDate,
    /// Free-form activity label
    pub activity_type: String,
    /// Duration in minutes
    pub duration: u32,
    /// Calories burned
    pub calories_burned: u32,
    /// Optional notes (empty when none)
    #[serde(default)]
    pub notes: String,
}

impl Workout {
    /// Create a workout without notes.
    pub fn new(
        date: NaiveDate,
        activity_type: impl Into<String>,
        duration: u32,
        calories_burned: u32,
    ) -> Self {
        Self {
            date,
            activity_type: activity_type.into(),
            duration,
            calories_burned,
            notes: String::new(),
        }
    }

    /// Attach notes to the workout.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Convert to a field-name → value mapping with dates as `YYYY-MM-DD`.
    pub fn to_record(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(record) => Ok(record),
            _ => Err(serde::ser::Error::custom("workout did not serialize to an object")),
        }
    }

    /// Rebuild a workout from a field-name → value mapping.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(record))
    }

    /// Whether the workout falls within `[start, end]`, both inclusive.
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        start <= self.date && self.date <= end
    }
}
