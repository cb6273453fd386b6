// ABOUTME: Health metric calculators for BMI, BMR, TDEE, and MET-based calorie estimation
// ABOUTME: Total functions over optional profile attributes, absent results instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness
//! Health metric calculation from user profile attributes

use serde::{Deserialize, Serialize};

use aceest_core::config::FitnessConfig;
use aceest_core::constants::physiology::{
    BMR_AGE_COEFFICIENT, BMR_FEMALE_OFFSET, BMR_HEIGHT_COEFFICIENT, BMR_MALE_OFFSET,
    BMR_OTHER_OFFSET, BMR_WEIGHT_COEFFICIENT, CM_PER_METER, MET_CALORIE_DIVISOR,
    MET_OXYGEN_FACTOR, MODERATE_ACTIVITY_MULTIPLIER,
};
use aceest_core::models::{Gender, UserProfile, WorkoutCategory};

use crate::insights::BmiCategory;

/// Round to two decimal places, half away from zero
#[inline]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derived health metrics for one user profile
///
/// Produced in one pass by [`HealthCalculator::snapshot`] for dashboard
/// rendering. Each metric is absent when the profile lacks the fields it
/// requires.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthMetrics {
    /// Body Mass Index, kg/m² rounded to 2 decimals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmi: Option<f64>,
    /// Classification of the BMI value
    pub bmi_category: BmiCategory,
    /// Basal Metabolic Rate (Mifflin-St Jeor), kcal/day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Total Daily Energy Expenditure at moderate activity, kcal/day
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<f64>,
}

/// Metrics calculator over one user's profile attributes
///
/// Stateless: holds only the optional inputs and recomputes on every call.
/// Incomplete profiles are accepted; every metric that cannot be derived is
/// absent, never zero or `NaN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthCalculator {
    /// User's weight in kg
    pub weight_kg: Option<f64>,
    /// User's height in cm
    pub height_cm: Option<f64>,
    /// User's age in years
    pub age: Option<u32>,
    /// User's gender
    pub gender: Option<Gender>,
}

impl HealthCalculator {
    /// Create an empty calculator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            weight_kg: None,
            height_cm: None,
            age: None,
            gender: None,
        }
    }

    /// Set user attributes for calculations
    #[must_use]
    pub const fn with_user_data(
        mut self,
        weight_kg: Option<f64>,
        height_cm: Option<f64>,
        age: Option<u32>,
        gender: Option<Gender>,
    ) -> Self {
        self.weight_kg = weight_kg;
        self.height_cm = height_cm;
        self.age = age;
        self.gender = gender;
        self
    }

    /// Body Mass Index, rounded to 2 decimals
    #[must_use]
    pub fn bmi(&self) -> Option<f64> {
        calculate_bmi(self.height_cm, self.weight_kg)
    }

    /// Classification of the current BMI value
    #[must_use]
    pub fn bmi_category(&self) -> BmiCategory {
        BmiCategory::from_bmi(self.bmi())
    }

    /// Basal Metabolic Rate via Mifflin-St Jeor
    #[must_use]
    pub fn bmr(&self) -> Option<f64> {
        calculate_bmr(self.weight_kg, self.height_cm, self.age, self.gender)
    }

    /// Total Daily Energy Expenditure at the fixed moderate activity level
    #[must_use]
    pub fn tdee(&self) -> Option<f64> {
        calculate_tdee(self.bmr())
    }

    /// Materialize every derived metric in one pass
    #[must_use]
    pub fn snapshot(&self) -> HealthMetrics {
        let bmi = self.bmi();
        HealthMetrics {
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
            bmr: self.bmr(),
            tdee: self.tdee(),
        }
    }
}

impl From<&UserProfile> for HealthCalculator {
    fn from(profile: &UserProfile) -> Self {
        Self {
            weight_kg: profile.weight_kg,
            height_cm: profile.height_cm,
            age: profile.age,
            gender: profile.gender,
        }
    }
}

/// Calculate Body Mass Index: weight(kg) / height(m)²
///
/// Returns the value rounded to 2 decimals when both inputs are present and
/// positive; `None` otherwise. Non-positive height or weight is treated the
/// same as a missing field.
#[must_use]
pub fn calculate_bmi(height_cm: Option<f64>, weight_kg: Option<f64>) -> Option<f64> {
    let (height_cm, weight_kg) = (height_cm?, weight_kg?);
    if height_cm <= 0.0 || weight_kg <= 0.0 {
        return None;
    }
    let height_m = height_cm / CM_PER_METER;
    Some(round2(weight_kg / height_m.powi(2)))
}

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// `BMR = 10 x weight(kg) + 6.25 x height(cm) - 5 x age(years)`, plus `+5`
/// for men and `-161` for women. Unspecified/other genders use `-78`, the
/// midpoint of the two offsets (a policy choice, not a physiological
/// formula). The result is rounded to the nearest integer, half away from
/// zero.
///
/// Returns `None` unless all four attributes are present, with weight,
/// height, and age positive.
#[must_use]
pub fn calculate_bmr(
    weight_kg: Option<f64>,
    height_cm: Option<f64>,
    age: Option<u32>,
    gender: Option<Gender>,
) -> Option<f64> {
    let (weight_kg, height_cm, age, gender) = (weight_kg?, height_cm?, age?, gender?);
    if weight_kg <= 0.0 || height_cm <= 0.0 || age == 0 {
        return None;
    }

    let base = BMR_WEIGHT_COEFFICIENT * weight_kg + BMR_HEIGHT_COEFFICIENT * height_cm
        - BMR_AGE_COEFFICIENT * f64::from(age);

    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
        Gender::Other => BMR_OTHER_OFFSET,
    };

    Some((base + offset).round())
}

/// Calculate Total Daily Energy Expenditure from a BMR value
///
/// Applies the fixed moderate-activity multiplier (1.55); no other activity
/// levels are modeled. Absent in, absent out.
#[must_use]
pub fn calculate_tdee(bmr: Option<f64>) -> Option<f64> {
    bmr.map(|bmr| (bmr * MODERATE_ACTIVITY_MULTIPLIER).round())
}

/// Calculate calories burned using the MET formula
///
/// `Calories = (MET x 3.5 x weight_kg / 200) x duration_minutes`, rounded
/// to 2 decimals.
///
/// Returns `0.0` when any input is absent or non-positive. This lenient
/// default is deliberate and distinct from the absent-returning calculators
/// above: callers must not conflate "zero calories" with "unknown".
#[must_use]
pub fn calculate_met_calories(
    met_value: Option<f64>,
    weight_kg: Option<f64>,
    duration_minutes: Option<u32>,
) -> f64 {
    let (Some(met_value), Some(weight_kg), Some(duration_minutes)) =
        (met_value, weight_kg, duration_minutes)
    else {
        return 0.0;
    };
    if met_value <= 0.0 || weight_kg <= 0.0 || duration_minutes == 0 {
        return 0.0;
    }

    let kcal_per_minute = met_value * MET_OXYGEN_FACTOR * weight_kg / MET_CALORIE_DIVISOR;
    round2(kcal_per_minute * f64::from(duration_minutes))
}

/// Estimate calories for a workout at record-creation time
///
/// Looks the category's MET coefficient up in the process-wide
/// [`FitnessConfig`] and applies the MET formula. Returns `0.0` when the
/// owner's weight is unknown, matching [`calculate_met_calories`].
#[must_use]
pub fn estimate_workout_calories(
    category: WorkoutCategory,
    weight_kg: Option<f64>,
    duration_minutes: u32,
) -> f64 {
    let met_value = FitnessConfig::global().met_for(category);
    calculate_met_calories(Some(met_value), weight_kg, Some(duration_minutes))
}
