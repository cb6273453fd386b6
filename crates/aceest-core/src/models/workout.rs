// ABOUTME: Workout session model and category enumeration
// ABOUTME: Workout, WorkoutCategory, Intensity definitions plus input validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{limits, met_values};
use crate::errors::ValidationError;

/// Enumeration of workout session categories
///
/// The category determines the MET coefficient used for calorie estimation
/// and is the primary grouping key for aggregate views. The set is closed:
/// input carrying any other category string is rejected at validation time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum WorkoutCategory {
    /// Warm-up session preceding the main workout
    #[serde(rename = "Warm-up")]
    WarmUp,
    /// Main workout session
    #[serde(rename = "Workout")]
    Workout,
    /// Cool-down session following the main workout
    #[serde(rename = "Cool-down")]
    CoolDown,
}

impl WorkoutCategory {
    /// All categories in canonical display order
    pub const ALL: [Self; 3] = [Self::WarmUp, Self::Workout, Self::CoolDown];

    /// Built-in MET coefficient for this category
    ///
    /// `FitnessConfig` may override these per deployment; this is the
    /// fallback used when no override is configured.
    #[must_use]
    pub const fn default_met(self) -> f64 {
        match self {
            Self::WarmUp => met_values::WARM_UP_MET,
            Self::Workout => met_values::WORKOUT_MET,
            Self::CoolDown => met_values::COOL_DOWN_MET,
        }
    }

    /// Stable name used in stored records and API payloads
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::WarmUp => "Warm-up",
            Self::Workout => "Workout",
            Self::CoolDown => "Cool-down",
        }
    }
}

impl fmt::Display for WorkoutCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutCategory {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Warm-up" => Ok(Self::WarmUp),
            "Workout" => Ok(Self::Workout),
            "Cool-down" => Ok(Self::CoolDown),
            other => Err(ValidationError::unknown_category(other)),
        }
    }
}

/// Self-reported intensity of a workout session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Light effort
    Low,
    /// Moderate effort
    Medium,
    /// Hard effort
    High,
}

/// A single logged exercise session
///
/// Created by the (excluded) logging flow, optionally enriched with a
/// calorie estimate at creation time, and owned by exactly one user for its
/// lifetime. The aggregation engine consumes immutable snapshots of these
/// records; nothing in this workspace mutates them after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique identifier for this workout
    pub id: Uuid,
    /// Owning user
    pub user_id: Uuid,
    /// Session category
    pub category: WorkoutCategory,
    /// Name of the exercise performed
    pub exercise_name: String,
    /// Duration in minutes (always positive)
    pub duration_minutes: u32,
    /// Estimated calories burned, when the owner's weight was known at
    /// creation time
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories_burned: Option<f64>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Self-reported intensity
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Calendar date the session took place
    pub workout_date: NaiveDate,
    /// When the record was created; secondary ordering key for same-date
    /// display
    pub created_at: DateTime<Utc>,
}

/// Validate workout input before a record is created
///
/// Enforces the request-level rules the presentation layer applies when a
/// user logs a session: a non-empty exercise name of at most 100 characters
/// and a duration between 1 minute and 24 hours. Category validity is
/// enforced separately by [`WorkoutCategory::from_str`].
///
/// # Errors
/// Returns the first violated rule as a [`ValidationError`] carrying the
/// user-facing message.
pub fn validate_workout_input(exercise_name: &str, duration_minutes: i64) -> Result<(), ValidationError> {
    if exercise_name.trim().is_empty() {
        return Err(ValidationError::MissingExerciseName);
    }
    if exercise_name.chars().count() > limits::MAX_EXERCISE_NAME_LENGTH {
        return Err(ValidationError::ExerciseNameTooLong {
            length: exercise_name.chars().count(),
            max: limits::MAX_EXERCISE_NAME_LENGTH,
        });
    }
    if duration_minutes <= 0 {
        return Err(ValidationError::NonPositiveDuration {
            minutes: duration_minutes,
        });
    }
    if duration_minutes > limits::MAX_WORKOUT_DURATION_MINUTES {
        return Err(ValidationError::DurationTooLong {
            minutes: duration_minutes,
        });
    }
    Ok(())
}
