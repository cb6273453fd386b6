// ABOUTME: User profile model feeding the health metrics engine
// ABOUTME: UserProfile and Gender definitions with lossy gender parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Gender as recorded on a user profile
///
/// Drives the constant offset in the Mifflin-St Jeor BMR equation. Profiles
/// may leave gender unset, in which case BMR is not computable.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Any other or unspecified gender
    Other,
}

impl Gender {
    /// Parse gender from a stored string
    ///
    /// Accepts the single-letter codes used by legacy records (`"M"`, `"F"`)
    /// as well as full words; anything unrecognized maps to `Other`.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "m" | "male" => Self::Male,
            "f" | "female" => Self::Female,
            _ => Self::Other,
        }
    }
}

/// User account profile
///
/// Carries the attributes the metrics engine derives BMI, BMR, and TDEE
/// from. All physiological fields are optional: a freshly registered user
/// has none of them, and every derived metric is simply absent until the
/// profile is completed.
///
/// # Examples
///
/// ```rust
/// use aceest_core::models::{Gender, UserProfile};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let profile = UserProfile {
///     id: Uuid::new_v4(),
///     username: "runner123".into(),
///     full_name: Some("Jamie Doe".into()),
///     age: Some(25),
///     gender: Some(Gender::Female),
///     height_cm: Some(175.0),
///     weight_kg: Some(70.0),
///     created_at: Utc::now(),
/// };
/// assert!(profile.is_complete());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    /// Unique identifier for the user
    pub id: Uuid,
    /// Public username/handle
    pub username: String,
    /// Display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Gender, if recorded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// When the account was created
    pub created_at: DateTime<Utc>,
}

impl UserProfile {
    /// Whether every field the metrics engine needs is present
    ///
    /// The presentation layer uses this as its precondition check before
    /// rendering metric dashboards; the engine itself accepts incomplete
    /// profiles and returns absent metrics.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.height_cm.is_some()
            && self.weight_kg.is_some()
            && self.age.is_some()
            && self.gender.is_some()
    }
}
