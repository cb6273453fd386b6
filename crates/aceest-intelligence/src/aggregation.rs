// ABOUTME: Workout aggregation engine for category, date, and rolling-window summaries
// ABOUTME: Pure rollups over an immutable snapshot of one user's workout records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Workout aggregation over snapshot collections
//!
//! Every function here consumes a caller-supplied slice of one user's
//! workout records plus static category configuration, and returns derived
//! summaries without mutating or retaining anything. Empty input never
//! fails: category-keyed views are dense (zero-valued summaries for every
//! configured category) while date-keyed views are sparse (dates without
//! records are omitted), and callers must handle both shapes.

use std::collections::{BTreeMap, HashMap};

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use aceest_core::constants::windows::WEEKLY_WINDOW_DAYS;
use aceest_core::models::{Workout, WorkoutCategory};

/// Round to two decimal places, half away from zero
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to one decimal place, half away from zero
#[inline]
fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Aggregate figures for one grouping key (a category, a window, or "all")
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AggregateSummary {
    /// Number of matching workouts
    pub count: u64,
    /// Summed duration in minutes
    pub total_duration_minutes: u64,
    /// Summed calories, absent per-record values counted as 0, rounded to
    /// 2 decimals
    pub total_calories: f64,
    /// Mean duration in minutes rounded to 1 decimal, 0 when count is 0
    pub average_duration_minutes: f64,
}

/// Aggregate summary for one workout category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategorySummary {
    /// The category this summary covers
    pub category: WorkoutCategory,
    /// Aggregate figures for the category
    pub summary: AggregateSummary,
}

/// Per-category figures within a single calendar date
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryDayBreakdown {
    /// The category this breakdown covers
    pub category: WorkoutCategory,
    /// Summed duration in minutes for the category on this date
    pub duration_minutes: u64,
    /// Summed calories for the category on this date, rounded to 2 decimals
    pub calories: f64,
}

/// Aggregate figures for a single calendar date
///
/// Emitted only for dates that have at least one record in the window; the
/// per-date category breakdown likewise lists only categories present on
/// that date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DailySummary {
    /// The calendar date
    pub date: NaiveDate,
    /// Per-category breakdown, canonical category order, present categories
    /// only
    pub categories: Vec<CategoryDayBreakdown>,
    /// Summed duration across all categories on this date
    pub total_duration_minutes: u64,
    /// Summed calories across all categories on this date, rounded to 2
    /// decimals
    pub total_calories: f64,
}

/// Rolling-window summary with per-category breakdown
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeeklySummary {
    /// First date of the window (inclusive)
    pub start_date: NaiveDate,
    /// Last date of the window (inclusive)
    pub end_date: NaiveDate,
    /// Aggregate figures across every record in the window
    pub summary: AggregateSummary,
    /// Dense per-category breakdown over the configured category list
    pub categories: Vec<CategorySummary>,
}

/// Fold a record iterator into an aggregate summary
fn summarize<'a, I>(records: I) -> AggregateSummary
where
    I: IntoIterator<Item = &'a Workout>,
{
    let mut count: u64 = 0;
    let mut total_duration: u64 = 0;
    let mut total_calories: f64 = 0.0;

    for workout in records {
        count += 1;
        total_duration += u64::from(workout.duration_minutes);
        total_calories += workout.calories_burned.unwrap_or(0.0);
    }

    let average_duration_minutes = if count == 0 {
        0.0
    } else {
        round1(total_duration as f64 / count as f64)
    };

    AggregateSummary {
        count,
        total_duration_minutes: total_duration,
        total_calories: round2(total_calories),
        average_duration_minutes,
    }
}

/// Summarize records per category, dense over the configured list
///
/// Emits one entry per configured category in caller-supplied order, with a
/// zero-valued summary when no records match. Records whose category is not
/// in the configured list are silently excluded; use [`overall_summary`]
/// for an all-up total that still counts them.
#[must_use]
pub fn summarize_by_category(
    records: &[Workout],
    categories: &[WorkoutCategory],
) -> Vec<CategorySummary> {
    debug!(
        record_count = records.len(),
        category_count = categories.len(),
        "summarizing workouts by category"
    );

    categories
        .iter()
        .map(|&category| CategorySummary {
            category,
            summary: summarize(records.iter().filter(|w| w.category == category)),
        })
        .collect()
}

/// All-up summary across every record in the snapshot
///
/// Computed independently from the record collection, not from per-category
/// sums, so records outside any configured category list still count.
#[must_use]
pub fn overall_summary(records: &[Workout]) -> AggregateSummary {
    summarize(records)
}

/// Summarize records per calendar date within an inclusive window
///
/// Returns one entry per date that has at least one record in
/// `[start_date, end_date]`, sorted ascending by date. Dates without
/// records are omitted (sparse), a deliberate asymmetry versus the dense
/// [`summarize_by_category`] view. Each entry nests per-category duration
/// and calorie figures plus per-date totals.
#[must_use]
pub fn summarize_by_date(
    records: &[Workout],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<DailySummary> {
    debug!(
        record_count = records.len(),
        %start_date,
        %end_date,
        "summarizing workouts by date"
    );

    let mut days: BTreeMap<NaiveDate, HashMap<WorkoutCategory, (u64, f64)>> = BTreeMap::new();
    for workout in records
        .iter()
        .filter(|w| w.workout_date >= start_date && w.workout_date <= end_date)
    {
        let (duration, calories) = days
            .entry(workout.workout_date)
            .or_default()
            .entry(workout.category)
            .or_insert((0, 0.0));
        *duration += u64::from(workout.duration_minutes);
        *calories += workout.calories_burned.unwrap_or(0.0);
    }

    days.into_iter()
        .map(|(date, by_category)| {
            let mut categories = Vec::with_capacity(by_category.len());
            let mut total_duration: u64 = 0;
            let mut total_calories: f64 = 0.0;

            for category in WorkoutCategory::ALL {
                if let Some(&(duration, calories)) = by_category.get(&category) {
                    total_duration += duration;
                    total_calories += calories;
                    categories.push(CategoryDayBreakdown {
                        category,
                        duration_minutes: duration,
                        calories: round2(calories),
                    });
                }
            }

            DailySummary {
                date,
                categories,
                total_duration_minutes: total_duration,
                total_calories: round2(total_calories),
            }
        })
        .collect()
}

/// Summarize the rolling week ending at `today`
///
/// The window is `[today - 7 days, today]` inclusive. The per-category
/// breakdown follows the same dense shape and rounding rules as
/// [`summarize_by_category`], scoped to the window; the overall figures are
/// computed independently from the windowed records.
#[must_use]
pub fn weekly_summary(
    records: &[Workout],
    today: NaiveDate,
    categories: &[WorkoutCategory],
) -> WeeklySummary {
    let (start_date, end_date) = window_ending(today, WEEKLY_WINDOW_DAYS);

    let in_window: Vec<&Workout> = records
        .iter()
        .filter(|w| w.workout_date >= start_date && w.workout_date <= end_date)
        .collect();

    debug!(
        record_count = records.len(),
        window_count = in_window.len(),
        %start_date,
        %end_date,
        "summarizing rolling week"
    );

    let category_summaries = categories
        .iter()
        .map(|&category| CategorySummary {
            category,
            summary: summarize(
                in_window
                    .iter()
                    .copied()
                    .filter(|w| w.category == category),
            ),
        })
        .collect();

    WeeklySummary {
        start_date,
        end_date,
        summary: summarize(in_window.iter().copied()),
        categories: category_summaries,
    }
}

/// Inclusive date window of the last `days` days ending at `end`
///
/// Mirrors the dashboard's 7-day and 30-day ranges: the returned window
/// spans `days + 1` calendar dates including `end` itself.
#[must_use]
pub fn window_ending(end: NaiveDate, days: i64) -> (NaiveDate, NaiveDate) {
    (end - Duration::days(days), end)
}
