use fitlog::tracker::{DashboardSummary, FitnessTracker, SummaryTable};
use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T: Serialize> {
    ok: bool,
    data: T,
}

pub fn print_json<T: Serialize>(data: T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&JsonOut { ok: true, data })?
    );
    Ok(())
}

pub fn print_table(table: &SummaryTable, csv: bool, empty_hint: &str) {
    if csv {
        print!("{}", table.to_csv());
    } else if table.is_empty() {
        println!("{}", empty_hint);
    } else {
        println!("{}", table);
    }
}

pub fn print_dashboard(tracker: &FitnessTracker, dashboard: &DashboardSummary) {
    println!(
        "Fitness Dashboard ({} to {})",
        dashboard.start, dashboard.end
    );
    println!("  Total Workouts   {}", dashboard.total_workouts);
    println!("  Total Minutes    {}", dashboard.total_minutes);
    println!("  Calories Burned  {}", dashboard.total_calories);

    println!();
    println!("Recent Workouts");
    let summary = tracker.get_workout_summary();
    if summary.is_empty() {
        println!("  No workouts logged yet. Start by adding a workout!");
    } else {
        println!("{}", summary);
    }

    println!();
    println!("Workout Distribution");
    let total: usize = dashboard.activity_breakdown.iter().map(|s| s.count).sum();
    for share in &dashboard.activity_breakdown {
        let percent = share.count as f64 * 100.0 / total as f64;
        println!("  {:<16} {:>4}  {:>5.1}%", share.activity, share.count, percent);
    }

    println!();
    println!("Goals Progress");
    if dashboard.goals.is_empty() {
        println!("  No goals set yet. Add some goals to track your progress!");
    }
    for entry in &dashboard.goals {
        let goal = &entry.goal;
        let title = if goal.description.is_empty() {
            format!("{} goal", goal.target_type)
        } else {
            goal.description.clone()
        };
        println!(
            "  {} ({} to {}): {}/{} {}",
            title,
            goal.start_date,
            goal.end_date,
            tracker.goal_actual(goal),
            goal.target_value,
            goal.target_type.unit()
        );
        println!("  {}  Progress: {:.1}%", progress_bar(entry.progress), entry.progress);
    }
}

fn progress_bar(percent: f64) -> String {
    const WIDTH: usize = 20;
    let filled = ((percent / 100.0) * WIDTH as f64).round() as usize;
    let filled = filled.min(WIDTH);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(WIDTH - filled))
}
