// ABOUTME: BMI classification and the static health recommendation table
// ABOUTME: Maps BMI values onto half-open category intervals with per-category advice text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! BMI classification and health recommendations

use std::fmt;

use serde::{Deserialize, Serialize};

use aceest_core::constants::bmi::{
    NORMAL_WEIGHT_MAX, OBESE_CLASS_II_MAX, OBESE_CLASS_I_MAX, OVERWEIGHT_MAX,
    SEVERELY_UNDERWEIGHT_MAX, UNDERWEIGHT_MAX,
};

/// BMI classification
///
/// Categories partition the BMI range into half-open intervals, inclusive
/// on the lower bound and exclusive on the upper bound:
///
/// | Interval     | Category             |
/// |--------------|----------------------|
/// | `< 16`       | Severely Underweight |
/// | `[16, 18.5)` | Underweight          |
/// | `[18.5, 25)` | Normal weight        |
/// | `[25, 30)`   | Overweight           |
/// | `[30, 35)`   | Obese Class I        |
/// | `[35, 40)`   | Obese Class II       |
/// | `>= 40`      | Obese Class III      |
///
/// An absent BMI (incomplete profile) classifies as `Unknown`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 16
    SeverelyUnderweight,
    /// BMI in [16, 18.5)
    Underweight,
    /// BMI in [18.5, 25)
    NormalWeight,
    /// BMI in [25, 30)
    Overweight,
    /// BMI in [30, 35)
    ObeseClassI,
    /// BMI in [35, 40)
    ObeseClassII,
    /// BMI of 40 or above
    ObeseClassIII,
    /// BMI not computable from the profile
    Unknown,
}

impl BmiCategory {
    /// Classify a BMI value
    #[must_use]
    pub fn from_bmi(bmi: Option<f64>) -> Self {
        let Some(bmi) = bmi else {
            return Self::Unknown;
        };

        if bmi < SEVERELY_UNDERWEIGHT_MAX {
            Self::SeverelyUnderweight
        } else if bmi < UNDERWEIGHT_MAX {
            Self::Underweight
        } else if bmi < NORMAL_WEIGHT_MAX {
            Self::NormalWeight
        } else if bmi < OVERWEIGHT_MAX {
            Self::Overweight
        } else if bmi < OBESE_CLASS_I_MAX {
            Self::ObeseClassI
        } else if bmi < OBESE_CLASS_II_MAX {
            Self::ObeseClassII
        } else {
            Self::ObeseClassIII
        }
    }

    /// Health recommendation text for this category
    ///
    /// A static one-to-one lookup; `Unknown` carries the
    /// complete-your-profile prompt rather than dietary advice.
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => {
                "Consult a healthcare provider immediately for nutritional guidance."
            }
            Self::Underweight => "Consider increasing calorie intake and strength training.",
            Self::NormalWeight => {
                "Maintain current weight with balanced diet and regular exercise."
            }
            Self::Overweight => "Focus on cardio exercises and calorie deficit diet.",
            Self::ObeseClassI => "Consult a fitness trainer for personalized weight loss plan.",
            Self::ObeseClassII => "Medical supervision recommended for weight management.",
            Self::ObeseClassIII => "Immediate medical consultation required for health assessment.",
            Self::Unknown => "Please update your profile with height and weight information.",
        }
    }

    /// Display label used on dashboards
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SeverelyUnderweight => "Severely Underweight",
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::ObeseClassIII => "Obese Class III",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
