//! Tabular summaries and dashboard figures.

use crate::goals::Goal;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write as _;

/// Column headings of the workout summary.
pub const WORKOUT_COLUMNS: [&str; 5] = [
    "Date",
    "Activity",
    "Duration (mins)",
    "Calories Burned",
    "Notes",
];

/// Column headings of the goals summary.
pub const GOAL_COLUMNS: [&str; 5] = [
    "Target Type",
    "Target Value",
    "Start Date",
    "End Date",
    "Description",
];

/// A table of string cells with fixed column headings.
///
/// An empty log still yields a table with headings and zero rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Create an empty table with the given headings.
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Its length must match the column count.
    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the named column, top to bottom. Short rows yield empty cells.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(
            self.rows
                .iter()
                .map(|r| r.get(index).map_or("", String::as_str))
                .collect(),
        )
    }

    /// Render as CSV with a header line.
    pub fn to_csv(&self) -> String {
        let mut output = String::new();
        write_csv_line(&mut output, &self.columns);
        for row in &self.rows {
            write_csv_line(&mut output, row);
        }
        output
    }
}

fn write_csv_line(output: &mut String, cells: &[String]) {
    let line = cells
        .iter()
        .map(|cell| escape_csv(cell))
        .collect::<Vec<_>>()
        .join(",");
    output.push_str(&line);
    output.push('\n');
}

fn escape_csv(cell: &str) -> String {
    if cell.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

impl std::fmt::Display for SummaryTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut widths: Vec<usize> = self.columns.iter().map(|c| c.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render = |cells: &[String]| {
            let mut line = String::new();
            for (i, (cell, width)) in cells.iter().zip(&widths).enumerate() {
                if i > 0 {
                    line.push_str("  ");
                }
                let _ = write!(line, "{:<width$}", cell, width = *width);
            }
            line.trim_end().to_string()
        };

        writeln!(f, "{}", render(&self.columns[..]))?;
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        write!(f, "{}", render(&rule[..]))?;
        for row in &self.rows {
            write!(f, "\n{}", render(&row[..]))?;
        }
        Ok(())
    }
}

/// Number of workouts logged for one activity label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityShare {
    pub activity: String,
    pub count: usize,
}

/// A goal together with its current progress percentage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal: Goal,
    /// 0.0 to 100.0
    pub progress: f64,
}

impl GoalProgress {
    /// Whether the target has been reached.
    pub fn is_complete(&self) -> bool {
        self.progress >= 100.0
    }
}

/// Figures shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub start: NaiveDate,
    pub end: NaiveDate,
    /// Workouts within the range
    pub total_workouts: usize,
    /// Minutes within the range
    pub total_minutes: u64,
    /// Calories within the range
    pub total_calories: u64,
    /// Distribution over the whole log, most frequent first
    pub activity_breakdown: Vec<ActivityShare>,
    /// Progress of every stored goal, in insertion order
    pub goals: Vec<GoalProgress>,
}
