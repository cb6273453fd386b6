// ABOUTME: Configuration module for the aceest-core crate
// ABOUTME: Re-exports the fitness configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

/// Fitness configuration (workout categories, MET coefficients)
pub mod fitness;

pub use fitness::FitnessConfig;
