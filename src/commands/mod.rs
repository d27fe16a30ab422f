//! Command handler layer.
//!
//! Parses CLI input into records, applies the form-level checks (goal date
//! ranges) and delegates everything else to `FitnessTracker`.

mod output;

use anyhow::Context;
use chrono::{Days, Local, NaiveDate};
use fitlog::storage::{load_config, AppConfig};
use fitlog::{FitnessTracker, Goal, Workout};

use crate::cli::{Cli, Commands};
use output::{print_dashboard, print_json, print_table};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = load_config(cli.config.as_deref()).context("failed to load config")?;
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }
    if cli.reset_on_corrupt {
        config.reset_on_corrupt = true;
    }

    let mut tracker = open_tracker(&config)?;
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Log {
            activity,
            duration,
            calories,
            date,
            notes,
        } => {
            let workout =
                Workout::new(date.unwrap_or(today), activity, duration, calories).with_notes(notes);
            tracker.add_workout(workout.clone())?;
            if cli.json {
                print_json(&workout)?;
            } else {
                println!("Workout logged successfully!");
            }
        }
        Commands::Goal {
            target_type,
            target,
            start,
            end,
            description,
        } => {
            let goal = Goal::new(target_type, target, start, end).with_description(description);
            goal.validate_range()?;
            tracker.add_goal(goal.clone())?;
            if cli.json {
                print_json(&goal)?;
            } else {
                println!("Goal set successfully!");
            }
        }
        Commands::Workouts { csv } => {
            if cli.json {
                print_json(tracker.workouts_newest_first())?;
            } else {
                print_table(
                    &tracker.get_workout_summary(),
                    csv,
                    "No workouts logged yet. Start by adding a workout!",
                );
            }
        }
        Commands::Goals { csv } => {
            if cli.json {
                print_json(tracker.goal_progress_report())?;
            } else {
                print_table(
                    &tracker.get_goals_summary(),
                    csv,
                    "No goals set yet. Add some goals to track your progress!",
                );
            }
        }
        Commands::Dashboard { start, end } => {
            let end = end.unwrap_or(today);
            let start = start.unwrap_or_else(|| window_start(end, config.dashboard_days));
            let dashboard = tracker.dashboard(start, end);
            if cli.json {
                print_json(&dashboard)?;
            } else {
                print_dashboard(&tracker, &dashboard);
            }
        }
    }

    Ok(())
}

fn open_tracker(config: &AppConfig) -> anyhow::Result<FitnessTracker> {
    let path = &config.data_file;
    let tracker = if config.reset_on_corrupt {
        FitnessTracker::open_or_reset(path)
    } else {
        FitnessTracker::open(path)
    };
    tracker.with_context(|| {
        format!(
            "failed to open {} (use --reset-on-corrupt to start over)",
            path.display()
        )
    })
}

fn window_start(end: NaiveDate, days: u32) -> NaiveDate {
    end.checked_sub_days(Days::new(u64::from(days)))
        .unwrap_or(NaiveDate::MIN)
}
