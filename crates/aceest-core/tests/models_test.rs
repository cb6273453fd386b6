// ABOUTME: Unit tests for core domain models and workout input validation
// ABOUTME: Covers category parsing, MET defaults, gender parsing, and validation messages
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 ACEest Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use aceest_core::errors::ValidationError;
use aceest_core::models::{validate_workout_input, Gender, WorkoutCategory};

#[test]
fn test_category_parse_and_display() {
    assert_eq!(
        "Warm-up".parse::<WorkoutCategory>().unwrap(),
        WorkoutCategory::WarmUp
    );
    assert_eq!(
        "Workout".parse::<WorkoutCategory>().unwrap(),
        WorkoutCategory::Workout
    );
    assert_eq!(
        "Cool-down".parse::<WorkoutCategory>().unwrap(),
        WorkoutCategory::CoolDown
    );
    assert_eq!(WorkoutCategory::WarmUp.to_string(), "Warm-up");

    let err = "Stretching".parse::<WorkoutCategory>().unwrap_err();
    assert_eq!(err.to_string(), "Invalid workout category");
    assert_eq!(
        err,
        ValidationError::UnknownCategory {
            category: "Stretching".into()
        }
    );
}

#[test]
fn test_category_met_defaults() {
    assert!((WorkoutCategory::WarmUp.default_met() - 3.0).abs() < f64::EPSILON);
    assert!((WorkoutCategory::Workout.default_met() - 6.0).abs() < f64::EPSILON);
    assert!((WorkoutCategory::CoolDown.default_met() - 2.5).abs() < f64::EPSILON);
}

#[test]
fn test_gender_lossy_parse() {
    assert_eq!(Gender::from_str_lossy("M"), Gender::Male);
    assert_eq!(Gender::from_str_lossy("male"), Gender::Male);
    assert_eq!(Gender::from_str_lossy("f"), Gender::Female);
    assert_eq!(Gender::from_str_lossy("Female"), Gender::Female);
    assert_eq!(Gender::from_str_lossy("nonbinary"), Gender::Other);
    assert_eq!(Gender::from_str_lossy(""), Gender::Other);
}

#[test]
fn test_validate_workout_input_accepts_valid_input() {
    assert!(validate_workout_input("Treadmill", 30).is_ok());
    assert!(validate_workout_input("Plank", 1).is_ok());
    assert!(validate_workout_input("Century ride", 1440).is_ok());
}

#[test]
fn test_validate_workout_input_rejects_bad_names() {
    assert_eq!(
        validate_workout_input("", 30),
        Err(ValidationError::MissingExerciseName)
    );
    assert_eq!(
        validate_workout_input("   ", 30),
        Err(ValidationError::MissingExerciseName)
    );

    let long_name = "x".repeat(101);
    let err = validate_workout_input(&long_name, 30).unwrap_err();
    assert_eq!(
        err,
        ValidationError::ExerciseNameTooLong {
            length: 101,
            max: 100
        }
    );
    assert_eq!(err.to_string(), "Exercise name is too long (max 100 characters)");
}

#[test]
fn test_validate_workout_input_rejects_bad_durations() {
    assert_eq!(
        validate_workout_input("Treadmill", 0),
        Err(ValidationError::NonPositiveDuration { minutes: 0 })
    );
    assert_eq!(
        validate_workout_input("Treadmill", -5),
        Err(ValidationError::NonPositiveDuration { minutes: -5 })
    );
    assert_eq!(
        validate_workout_input("Treadmill", 1441),
        Err(ValidationError::DurationTooLong { minutes: 1441 })
    );

    assert_eq!(
        ValidationError::NonPositiveDuration { minutes: 0 }.to_string(),
        "Duration must be a positive number"
    );
    assert_eq!(
        ValidationError::DurationTooLong { minutes: 1441 }.to_string(),
        "Duration cannot exceed 24 hours"
    );
}

#[test]
fn test_category_wire_names() {
    let json = serde_json::to_string(&WorkoutCategory::CoolDown).unwrap();
    assert_eq!(json, "\"Cool-down\"");
}
