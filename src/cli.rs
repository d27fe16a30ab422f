use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use fitlog::workouts::PRESET_ACTIVITIES;
use fitlog::TargetType;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitlog", version, about = "Personal fitness log")]
pub struct Cli {
    #[arg(long, global = true, help = "Config file (defaults to the data directory)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Data file, overriding the config")]
    pub data_file: Option<PathBuf>,
    #[arg(
        long,
        global = true,
        help = "Start with an empty log if the data file cannot be parsed"
    )]
    pub reset_on_corrupt: bool,
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a workout
    Log {
        #[arg(long, help = activity_help())]
        activity: String,
        #[arg(long, help = "Minutes", value_parser = clap::value_parser!(u32).range(1..))]
        duration: u32,
        #[arg(long, default_value_t = 100)]
        calories: u32,
        #[arg(long, help = "YYYY-MM-DD (defaults to today)")]
        date: Option<NaiveDate>,
        #[arg(long, default_value = "")]
        notes: String,
    },
    /// Set a goal over a date range
    Goal {
        #[arg(long = "type", help = "calories, duration or workouts")]
        target_type: TargetType,
        #[arg(
            long,
            help = "Calories, minutes, or number of workouts",
            value_parser = clap::value_parser!(u32).range(1..)
        )]
        target: u32,
        #[arg(long, help = "YYYY-MM-DD")]
        start: NaiveDate,
        #[arg(long, help = "YYYY-MM-DD, after the start date")]
        end: NaiveDate,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Show all workouts, newest first
    Workouts {
        #[arg(long, help = "Print as CSV")]
        csv: bool,
    },
    /// Show all goals
    Goals {
        #[arg(long, help = "Print as CSV")]
        csv: bool,
    },
    /// Totals, activity distribution and goal progress
    Dashboard {
        #[arg(long, help = "YYYY-MM-DD (defaults to the configured window before --end)")]
        start: Option<NaiveDate>,
        #[arg(long, help = "YYYY-MM-DD (defaults to today)")]
        end: Option<NaiveDate>,
    },
}

fn activity_help() -> String {
    format!("{}, ... (any label)", PRESET_ACTIVITIES.join(", "))
}
