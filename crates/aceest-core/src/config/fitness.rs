// ABOUTME: Fitness-specific configuration for workout categories and MET coefficients
// ABOUTME: Loads built-in defaults with environment variable overrides, memoized per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Fitness configuration for workout categories and calorie estimation

use std::collections::HashMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::models::WorkoutCategory;

static GLOBAL_CONFIG: OnceLock<FitnessConfig> = OnceLock::new();

/// Main fitness configuration structure
///
/// Holds the configured workout category list (the grouping order of every
/// category-keyed aggregate view) and the MET coefficient per category.
/// Immutable for the process lifetime once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitnessConfig {
    /// Workout categories in display/grouping order
    pub categories: Vec<WorkoutCategory>,
    /// MET coefficient overrides per category
    pub met_values: HashMap<WorkoutCategory, f64>,
}

impl Default for FitnessConfig {
    fn default() -> Self {
        Self {
            categories: WorkoutCategory::ALL.to_vec(),
            met_values: WorkoutCategory::ALL
                .iter()
                .map(|&category| (category, category.default_met()))
                .collect(),
        }
    }
}

impl FitnessConfig {
    /// Load fitness configuration from built-in defaults plus environment
    /// variable overrides
    ///
    /// Environment variables follow the pattern `MET_VALUE_{CATEGORY}`,
    /// e.g. `MET_VALUE_WARM_UP=3.5`. A value that fails to parse as a
    /// positive number is logged and ignored.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::default();
        Self::apply_met_override(&mut config, "MET_VALUE_WARM_UP", WorkoutCategory::WarmUp);
        Self::apply_met_override(&mut config, "MET_VALUE_WORKOUT", WorkoutCategory::Workout);
        Self::apply_met_override(&mut config, "MET_VALUE_COOL_DOWN", WorkoutCategory::CoolDown);
        config
    }

    /// Shared configuration instance, loaded on first access
    pub fn global() -> &'static Self {
        GLOBAL_CONFIG.get_or_init(Self::load)
    }

    /// MET coefficient for a category
    ///
    /// Falls back to the built-in coefficient for categories without a
    /// configured override.
    #[must_use]
    pub fn met_for(&self, category: WorkoutCategory) -> f64 {
        self.met_values
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.default_met())
    }

    fn apply_met_override(config: &mut Self, env_key: &str, category: WorkoutCategory) {
        let Ok(raw) = std::env::var(env_key) else {
            return;
        };
        match raw.parse::<f64>() {
            Ok(met) if met > 0.0 => {
                config.met_values.insert(category, met);
            }
            Ok(met) => {
                warn!(
                    env_key,
                    met,
                    "Ignoring non-positive MET override from environment"
                );
            }
            Err(e) => {
                warn!(
                    env_key,
                    value = %raw,
                    error = %e,
                    "Failed to parse MET override from environment, using default"
                );
            }
        }
    }
}
