// ABOUTME: Core data models for the ACEest fitness platform
// ABOUTME: Re-exports UserProfile, Workout, WorkoutCategory and related types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! # Data Models
//!
//! Core data structures shared across the ACEest workspace.
//!
//! ## Design Principles
//!
//! - **Storage Agnostic**: models are plain values; the persistence layer is
//!   an external collaborator that supplies already-materialized snapshots
//! - **Optional Profile Fields**: profile attributes are optional; derived
//!   metrics are absent rather than erroneous when fields are missing
//! - **Serializable**: all models support JSON serialization for API output
//!
//! ## Core Models
//!
//! - `UserProfile`: account profile attributes feeding the metrics engine
//! - `Workout`: a single logged exercise session
//! - `WorkoutCategory`: the closed set of session categories

// Domain modules
mod user;
mod workout;

// Re-export all public types for convenience
pub use user::{Gender, UserProfile};
pub use workout::{validate_workout_input, Intensity, Workout, WorkoutCategory};
