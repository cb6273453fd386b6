// ABOUTME: Display formatting helpers for dashboard rendering
// ABOUTME: Formats minute durations as human-readable hour/minute strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 ACEest Fitness

//! Display formatting helpers

use crate::constants::limits::MINUTES_PER_HOUR;

/// Format a duration in minutes as a human-readable string
///
/// Durations under an hour render as `"45 min"`; whole hours as `"2 hr"`;
/// everything else as `"1 hr 30 min"`.
#[must_use]
pub fn format_duration(minutes: u64) -> String {
    if minutes < MINUTES_PER_HOUR {
        return format!("{minutes} min");
    }

    let hours = minutes / MINUTES_PER_HOUR;
    let mins = minutes % MINUTES_PER_HOUR;

    if mins == 0 {
        format!("{hours} hr")
    } else {
        format!("{hours} hr {mins} min")
    }
}
