//! Integration tests for the data file across tracker restarts.

use chrono::NaiveDate;
use fitlog::{FitnessTracker, Goal, StoreError, TargetType, Workout};
use tempfile::TempDir;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_restart_reproduces_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fitness_data.json");

    {
        let mut tracker = FitnessTracker::open(&path).unwrap();
        tracker
            .add_workout(Workout::new(day(2024, 1, 5), "Cycling", 45, 400))
            .unwrap();
        tracker
            .add_workout(Workout::new(day(2024, 1, 1), "Running", 30, 300).with_notes("cold"))
            .unwrap();
        tracker
            .add_goal(
                Goal::new(TargetType::Calories, 1000, day(2024, 1, 1), day(2024, 1, 5))
                    .with_description("Burn 1000"),
            )
            .unwrap();
        tracker
            .add_goal(Goal::new(TargetType::Workouts, 3, day(2024, 1, 1), day(2024, 1, 7)))
            .unwrap();
    }

    let tracker = FitnessTracker::open(&path).unwrap();
    let activities: Vec<&str> = tracker
        .workouts()
        .iter()
        .map(|w| w.activity_type.as_str())
        .collect();
    assert_eq!(activities, vec!["Cycling", "Running"]);
    assert_eq!(tracker.workouts()[1].notes, "cold");
    assert_eq!(tracker.goals().len(), 2);
    assert_eq!(tracker.goals()[0].description, "Burn 1000");

    let report = tracker.goal_progress_report();
    assert_eq!(report[0].progress, 70.0);
    assert!((report[1].progress - 200.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_every_add_is_flushed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    let mut tracker = FitnessTracker::open(&path).unwrap();

    for i in 1..=5 {
        tracker
            .add_workout(Workout::new(day(2024, 2, i), "Swimming", 20, 150))
            .unwrap();
        let on_disk = FitnessTracker::open(&path).unwrap();
        assert_eq!(on_disk.workouts().len(), i as usize);
    }
}

#[test]
fn test_corrupt_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"workouts": [{"date": "yesterday"}]}"#).unwrap();

    let err = FitnessTracker::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }));
    assert!(err.to_string().contains("data.json"));
}

#[test]
fn test_write_failure_propagates() {
    let dir = TempDir::new().unwrap();
    let parent = dir.path().join("store");
    let mut tracker = FitnessTracker::open(parent.join("data.json")).unwrap();

    // A regular file where the data directory should be blocks every write.
    std::fs::write(&parent, "").unwrap();

    let result = tracker.add_workout(Workout::new(day(2024, 1, 1), "Yoga", 30, 90));
    assert!(matches!(result, Err(StoreError::Io(_))));
    assert_eq!(tracker.workouts().len(), 1);
}
