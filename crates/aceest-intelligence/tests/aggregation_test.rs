// ABOUTME: Unit tests for the workout aggregation engine
// ABOUTME: Covers dense category views, sparse date views, and rolling-window boundaries
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright (c) 2025 ACEest Fitness

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use aceest_core::models::{Workout, WorkoutCategory};
use aceest_intelligence::aggregation::{
    overall_summary, summarize_by_category, summarize_by_date, weekly_summary, window_ending,
};
use chrono::{NaiveDate, Utc};
use uuid::Uuid;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn workout(
    category: WorkoutCategory,
    duration_minutes: u32,
    calories_burned: Option<f64>,
    workout_date: NaiveDate,
) -> Workout {
    Workout {
        id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        category,
        exercise_name: "Treadmill".into(),
        duration_minutes,
        calories_burned,
        notes: None,
        intensity: None,
        workout_date,
        created_at: Utc::now(),
    }
}

#[test]
fn test_empty_records_yield_dense_zero_summaries() {
    let summaries = summarize_by_category(&[], &WorkoutCategory::ALL);

    assert_eq!(summaries.len(), 3);
    let order: Vec<WorkoutCategory> = summaries.iter().map(|s| s.category).collect();
    assert_eq!(order, WorkoutCategory::ALL.to_vec());

    for entry in &summaries {
        assert_eq!(entry.summary.count, 0);
        assert_eq!(entry.summary.total_duration_minutes, 0);
        assert!((entry.summary.total_calories - 0.0).abs() < f64::EPSILON);
        assert!((entry.summary.average_duration_minutes - 0.0).abs() < f64::EPSILON);
    }
}

#[test]
fn test_category_rollup() {
    let day = date(2024, 6, 10);
    let records = vec![
        workout(WorkoutCategory::Workout, 30, Some(70.0), day),
        workout(WorkoutCategory::Workout, 45, Some(90.0), day),
        workout(WorkoutCategory::WarmUp, 10, Some(25.0), day),
    ];

    let summaries = summarize_by_category(&records, &WorkoutCategory::ALL);

    let main = summaries
        .iter()
        .find(|s| s.category == WorkoutCategory::Workout)
        .unwrap();
    assert_eq!(main.summary.count, 2);
    assert_eq!(main.summary.total_duration_minutes, 75);
    assert!((main.summary.total_calories - 160.0).abs() < 1e-9);
    assert!((main.summary.average_duration_minutes - 37.5).abs() < 1e-9);

    let cool = summaries
        .iter()
        .find(|s| s.category == WorkoutCategory::CoolDown)
        .unwrap();
    assert_eq!(cool.summary.count, 0);
}

#[test]
fn test_absent_calories_count_as_zero() {
    let day = date(2024, 6, 10);
    let records = vec![
        workout(WorkoutCategory::Workout, 30, Some(70.0), day),
        workout(WorkoutCategory::Workout, 45, None, day),
    ];

    let summaries = summarize_by_category(&records, &[WorkoutCategory::Workout]);
    assert_eq!(summaries[0].summary.count, 2);
    assert!((summaries[0].summary.total_calories - 70.0).abs() < 1e-9);
}

#[test]
fn test_unconfigured_categories_are_excluded_from_category_view() {
    let day = date(2024, 6, 10);
    let records = vec![
        workout(WorkoutCategory::Workout, 30, Some(70.0), day),
        workout(WorkoutCategory::CoolDown, 15, Some(20.0), day),
    ];
    let configured = [WorkoutCategory::WarmUp, WorkoutCategory::Workout];

    let summaries = summarize_by_category(&records, &configured);
    assert_eq!(summaries.len(), 2);
    assert!(summaries
        .iter()
        .all(|s| s.category != WorkoutCategory::CoolDown));

    // The all-up total is computed from the raw snapshot and still counts
    // the record outside the configured list
    let overall = overall_summary(&records);
    assert_eq!(overall.count, 2);
    assert_eq!(overall.total_duration_minutes, 45);
    assert!((overall.total_calories - 90.0).abs() < 1e-9);
    assert!((overall.average_duration_minutes - 22.5).abs() < 1e-9);
}

#[test]
fn test_summarize_by_date_window_and_ordering() {
    let records = vec![
        workout(WorkoutCategory::Workout, 40, Some(95.0), date(2024, 6, 12)),
        workout(WorkoutCategory::WarmUp, 10, Some(26.25), date(2024, 6, 10)),
        workout(WorkoutCategory::Workout, 30, Some(70.0), date(2024, 6, 10)),
        // Outside the window on both sides
        workout(WorkoutCategory::Workout, 60, Some(150.0), date(2024, 5, 31)),
        workout(WorkoutCategory::Workout, 60, Some(150.0), date(2024, 6, 20)),
    ];

    let days = summarize_by_date(&records, date(2024, 6, 1), date(2024, 6, 15));

    // Sparse: only dates with records, sorted ascending
    assert_eq!(days.len(), 2);
    assert_eq!(days[0].date, date(2024, 6, 10));
    assert_eq!(days[1].date, date(2024, 6, 12));

    assert_eq!(days[0].total_duration_minutes, 40);
    assert!((days[0].total_calories - 96.25).abs() < 1e-9);
    assert_eq!(days[0].categories.len(), 2);
    assert_eq!(days[0].categories[0].category, WorkoutCategory::WarmUp);
    assert_eq!(days[0].categories[0].duration_minutes, 10);
    assert_eq!(days[0].categories[1].category, WorkoutCategory::Workout);
    assert!((days[0].categories[1].calories - 70.0).abs() < 1e-9);

    assert_eq!(days[1].total_duration_minutes, 40);
    assert_eq!(days[1].categories.len(), 1);
}

#[test]
fn test_summarize_by_date_empty_window() {
    let records = vec![workout(
        WorkoutCategory::Workout,
        30,
        Some(70.0),
        date(2024, 6, 10),
    )];

    let days = summarize_by_date(&records, date(2024, 7, 1), date(2024, 7, 31));
    assert!(days.is_empty());
}

#[test]
fn test_weekly_window_is_inclusive() {
    let today = date(2024, 6, 15);
    let records = vec![
        workout(WorkoutCategory::Workout, 30, Some(70.0), today),
        // Exactly on the window start: included
        workout(WorkoutCategory::Workout, 45, Some(90.0), date(2024, 6, 8)),
        // One day before the window start: excluded
        workout(WorkoutCategory::Workout, 60, Some(150.0), date(2024, 6, 7)),
    ];

    let weekly = weekly_summary(&records, today, &WorkoutCategory::ALL);

    assert_eq!(weekly.start_date, date(2024, 6, 8));
    assert_eq!(weekly.end_date, today);
    assert_eq!(weekly.summary.count, 2);
    assert_eq!(weekly.summary.total_duration_minutes, 75);
    assert!((weekly.summary.total_calories - 160.0).abs() < 1e-9);
    assert!((weekly.summary.average_duration_minutes - 37.5).abs() < 1e-9);

    // Dense over the configured list even inside the window
    assert_eq!(weekly.categories.len(), 3);
    let warm_up = weekly
        .categories
        .iter()
        .find(|s| s.category == WorkoutCategory::WarmUp)
        .unwrap();
    assert_eq!(warm_up.summary.count, 0);
}

#[test]
fn test_window_ending_spans_inclusive_range() {
    let (start, end) = window_ending(date(2024, 6, 15), 30);
    assert_eq!(start, date(2024, 5, 16));
    assert_eq!(end, date(2024, 6, 15));
}

#[test]
fn test_aggregation_is_idempotent() {
    let records = vec![
        workout(WorkoutCategory::Workout, 30, Some(70.0), date(2024, 6, 10)),
        workout(WorkoutCategory::WarmUp, 10, None, date(2024, 6, 11)),
    ];

    assert_eq!(
        summarize_by_category(&records, &WorkoutCategory::ALL),
        summarize_by_category(&records, &WorkoutCategory::ALL)
    );
    assert_eq!(
        summarize_by_date(&records, date(2024, 6, 1), date(2024, 6, 30)),
        summarize_by_date(&records, date(2024, 6, 1), date(2024, 6, 30))
    );
}

#[test]
fn test_chart_payload_shape() {
    let records = vec![workout(
        WorkoutCategory::Workout,
        30,
        Some(70.0),
        date(2024, 6, 10),
    )];

    let days = summarize_by_date(&records, date(2024, 6, 1), date(2024, 6, 30));
    let payload = serde_json::to_value(&days).unwrap();

    assert_eq!(payload[0]["date"], "2024-06-10");
    assert_eq!(payload[0]["categories"][0]["category"], "Workout");
    assert_eq!(payload[0]["categories"][0]["duration_minutes"], 30);
    assert_eq!(payload[0]["total_duration_minutes"], 30);
}
