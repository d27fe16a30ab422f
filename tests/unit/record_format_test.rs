//! Unit tests for the storage representation of workouts and goals.

use chrono::NaiveDate;
use fitlog::storage::StoreDocument;
use fitlog::{Goal, TargetType, Workout};
use serde_json::json;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn test_workout_record_matches_file_layout() {
    let workout = Workout::new(day(2024, 1, 1), "Running", 30, 300).with_notes("easy pace");

    assert_eq!(
        serde_json::Value::Object(workout.to_record().unwrap()),
        json!({
            "date": "2024-01-01",
            "activity_type": "Running",
            "duration": 30,
            "calories_burned": 300,
            "notes": "easy pace"
        })
    );
}

#[test]
fn test_goal_record_matches_file_layout() {
    let goal = Goal::new(TargetType::Workouts, 12, day(2024, 6, 1), day(2024, 6, 30))
        .with_description("Three a week");

    assert_eq!(
        serde_json::Value::Object(goal.to_record().unwrap()),
        json!({
            "target_type": "workouts",
            "target_value": 12,
            "start_date": "2024-06-01",
            "end_date": "2024-06-30",
            "description": "Three a week"
        })
    );
}

#[test]
fn test_records_survive_storage_round_trip() {
    let workouts = vec![
        Workout::new(day(2023, 12, 31), "Weight Training", 50, 350),
        Workout::new(day(2024, 1, 1), "Other", 0, 0).with_notes("stretching, \"light\""),
    ];
    let goals = vec![
        Goal::new(TargetType::Calories, 1000, day(2024, 1, 1), day(2024, 1, 5)),
        Goal::new(TargetType::Duration, 0, day(2024, 1, 1), day(2024, 1, 2)),
    ];

    for workout in &workouts {
        assert_eq!(&Workout::from_record(workout.to_record().unwrap()).unwrap(), workout);
    }
    for goal in &goals {
        assert_eq!(&Goal::from_record(goal.to_record().unwrap()).unwrap(), goal);
    }
}

#[test]
fn test_document_accepts_hand_written_file() {
    let raw = r#"{
        "workouts": [
            {"date": "2024-01-05", "activity_type": "Cycling", "duration": 45, "calories_burned": 400}
        ],
        "goals": [
            {"target_type": "duration", "target_value": 50,
             "start_date": "2024-01-01", "end_date": "2024-01-05"}
        ]
    }"#;

    let document: StoreDocument = serde_json::from_str(raw).unwrap();
    assert_eq!(document.workouts[0].notes, "");
    assert_eq!(document.goals[0].target_type, TargetType::Duration);
    assert_eq!(document.goals[0].description, "");
}

#[test]
fn test_document_rejects_unknown_target_type() {
    let raw = r#"{
        "workouts": [],
        "goals": [
            {"target_type": "steps", "target_value": 10000,
             "start_date": "2024-01-01", "end_date": "2024-01-05", "description": ""}
        ]
    }"#;

    assert!(serde_json::from_str::<StoreDocument>(raw).is_err());
}
