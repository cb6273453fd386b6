// ABOUTME: Input validation error types surfaced to the presentation layer
// ABOUTME: Structured errors carrying the user-facing messages for workout logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! # Validation Errors
//!
//! The metrics and aggregation engines are total functions and never fail;
//! the only error surface in this workspace is validation of workout input
//! before a record is created. Messages are worded for direct display to an
//! end user.

use thiserror::Error;

/// Errors produced when validating workout input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The submitted category string does not name a known workout category
    #[error("Invalid workout category")]
    UnknownCategory {
        /// The rejected category string
        category: String,
    },
    /// The exercise name was empty or whitespace-only
    #[error("Exercise name is required")]
    MissingExerciseName,
    /// The exercise name exceeds the maximum accepted length
    #[error("Exercise name is too long (max {max} characters)")]
    ExerciseNameTooLong {
        /// Length of the rejected name in characters
        length: usize,
        /// Maximum accepted length
        max: usize,
    },
    /// The duration was zero or negative
    #[error("Duration must be a positive number")]
    NonPositiveDuration {
        /// The rejected duration in minutes
        minutes: i64,
    },
    /// The duration exceeds 24 hours
    #[error("Duration cannot exceed 24 hours")]
    DurationTooLong {
        /// The rejected duration in minutes
        minutes: i64,
    },
}

impl ValidationError {
    /// Create an "unknown category" error
    #[must_use]
    pub fn unknown_category(category: impl Into<String>) -> Self {
        Self::UnknownCategory {
            category: category.into(),
        }
    }
}
