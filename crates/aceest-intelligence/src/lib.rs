// ABOUTME: Health metrics and workout aggregation engines for the ACEest fitness platform
// ABOUTME: Pure, synchronous calculators over profile attributes and workout snapshots
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

#![deny(unsafe_code)]

//! # ACEest Intelligence
//!
//! The derived-metrics and aggregation core of the ACEest fitness platform.
//! Both engines are pure, side-effect-free computations over
//! already-materialized input data, invoked synchronously per request:
//!
//! - **metrics**: BMI, BMR (Mifflin-St Jeor), TDEE, and MET-based calorie
//!   estimation from a user's profile attributes
//! - **insights**: BMI classification and the health recommendation table
//! - **aggregation**: category, date, and rolling-window rollups over a
//!   snapshot of one user's workout records
//!
//! Missing or invalid numeric inputs yield absent results, never errors;
//! degenerate aggregation input yields zero-valued or empty results.

/// Health metric calculators (BMI, BMR, TDEE, MET calories)
pub mod metrics;

/// BMI classification and health recommendations
pub mod insights;

/// Workout aggregation (category, date, and rolling-window summaries)
pub mod aggregation;

pub use aggregation::{
    overall_summary, summarize_by_category, summarize_by_date, weekly_summary, window_ending,
    AggregateSummary, CategoryDayBreakdown, CategorySummary, DailySummary, WeeklySummary,
};
pub use insights::BmiCategory;
pub use metrics::{
    calculate_bmi, calculate_bmr, calculate_met_calories, calculate_tdee,
    estimate_workout_calories, HealthCalculator, HealthMetrics,
};
