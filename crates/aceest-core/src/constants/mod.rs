// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants for physiology formulas, MET coefficients, and input limits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Constants module
//!
//! This module organizes application constants by domain rather than keeping
//! them in a single large file.

/// Physiology formula coefficients (Mifflin-St Jeor, TDEE, MET)
pub mod physiology {
    /// Mifflin-St Jeor weight coefficient (kcal per kg)
    pub const BMR_WEIGHT_COEFFICIENT: f64 = 10.0;
    /// Mifflin-St Jeor height coefficient (kcal per cm)
    pub const BMR_HEIGHT_COEFFICIENT: f64 = 6.25;
    /// Mifflin-St Jeor age coefficient (kcal per year)
    pub const BMR_AGE_COEFFICIENT: f64 = 5.0;
    /// Mifflin-St Jeor constant offset for men
    pub const BMR_MALE_OFFSET: f64 = 5.0;
    /// Mifflin-St Jeor constant offset for women
    pub const BMR_FEMALE_OFFSET: f64 = -161.0;
    /// Offset applied for unspecified/other genders.
    ///
    /// Policy midpoint of the male (+5) and female (-161) offsets, not a
    /// physiological formula.
    pub const BMR_OTHER_OFFSET: f64 = -78.0;
    /// TDEE activity multiplier for moderate activity (exercise 3-5 days/week)
    pub const MODERATE_ACTIVITY_MULTIPLIER: f64 = 1.55;
    /// Resting oxygen uptake factor in the MET calorie formula (ml/kg/min)
    pub const MET_OXYGEN_FACTOR: f64 = 3.5;
    /// Divisor converting MET oxygen uptake to kcal/min in the MET formula
    pub const MET_CALORIE_DIVISOR: f64 = 200.0;
    /// Centimeters per meter, for BMI height conversion
    pub const CM_PER_METER: f64 = 100.0;
}

/// Default MET coefficients per workout category
pub mod met_values {
    /// MET coefficient for warm-up sessions
    pub const WARM_UP_MET: f64 = 3.0;
    /// MET coefficient for main workout sessions
    pub const WORKOUT_MET: f64 = 6.0;
    /// MET coefficient for cool-down sessions
    pub const COOL_DOWN_MET: f64 = 2.5;
}

/// BMI classification boundaries (lower bound inclusive, upper exclusive)
pub mod bmi {
    /// Below this value: severely underweight
    pub const SEVERELY_UNDERWEIGHT_MAX: f64 = 16.0;
    /// Below this value (and >= 16): underweight
    pub const UNDERWEIGHT_MAX: f64 = 18.5;
    /// Below this value (and >= 18.5): normal weight
    pub const NORMAL_WEIGHT_MAX: f64 = 25.0;
    /// Below this value (and >= 25): overweight
    pub const OVERWEIGHT_MAX: f64 = 30.0;
    /// Below this value (and >= 30): obese class I
    pub const OBESE_CLASS_I_MAX: f64 = 35.0;
    /// Below this value (and >= 35): obese class II; at or above: class III
    pub const OBESE_CLASS_II_MAX: f64 = 40.0;
}

/// Input validation limits
pub mod limits {
    /// Maximum accepted exercise name length in characters
    pub const MAX_EXERCISE_NAME_LENGTH: usize = 100;
    /// Maximum accepted workout duration in minutes (24 hours)
    pub const MAX_WORKOUT_DURATION_MINUTES: i64 = 1440;
    /// Minutes per hour, for duration formatting
    pub const MINUTES_PER_HOUR: u64 = 60;
}

/// Dashboard time windows
pub mod windows {
    /// Rolling window for the weekly summary (days)
    pub const WEEKLY_WINDOW_DAYS: i64 = 7;
    /// Rolling window for the progress chart (days)
    pub const CHART_WINDOW_DAYS: i64 = 30;
}
