// ABOUTME: Insight threshold configuration for weekly volume and consistency bands
// ABOUTME: Defaults come from tracker-core constants and are validated for ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight Configuration
//!
//! Thresholds that split a week into volume bands (total minutes) and
//! consistency bands (longest minus shortest workout).

use thiserror::Error;
use tracker_core::constants::{consistency_thresholds, volume_thresholds};
use tracker_core::TrackerError;

/// Configuration-related errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Thresholds are not in strictly increasing order
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Threshold is zero, negative, or not finite
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl From<ConfigError> for TrackerError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}

/// Weekly volume band upper bounds, in minutes
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeThresholds {
    /// Totals below this are a great start
    pub great_start_max: f64,
    /// Totals below this are a good pace
    pub good_pace_max: f64,
    /// Totals below this are excellent, anything above is outstanding
    pub excellent_max: f64,
}

impl Default for VolumeThresholds {
    fn default() -> Self {
        Self {
            great_start_max: volume_thresholds::GREAT_START_MAX_MINUTES,
            good_pace_max: volume_thresholds::GOOD_PACE_MAX_MINUTES,
            excellent_max: volume_thresholds::EXCELLENT_MAX_MINUTES,
        }
    }
}

/// Consistency band upper bounds on the workout spread, in minutes
#[derive(Debug, Clone, PartialEq)]
pub struct ConsistencyThresholds {
    /// Spreads below this are very consistent
    pub very_consistent_max: f64,
    /// Spreads below this show some variety, anything above is a wide range
    pub some_variety_max: f64,
}

impl Default for ConsistencyThresholds {
    fn default() -> Self {
        Self {
            very_consistent_max: consistency_thresholds::VERY_CONSISTENT_MAX_SPREAD,
            some_variety_max: consistency_thresholds::SOME_VARIETY_MAX_SPREAD,
        }
    }
}

/// Configuration for insight generation
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsightConfig {
    /// Volume band thresholds
    pub volume: VolumeThresholds,
    /// Consistency band thresholds
    pub consistency: ConsistencyThresholds,
}

impl InsightConfig {
    /// Validate that every threshold is positive and bands are ordered
    ///
    /// # Errors
    ///
    /// Returns `ValueOutOfRange` for a non-positive or non-finite threshold
    /// and `InvalidRange` when thresholds are not strictly increasing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let all = [
            self.volume.great_start_max,
            self.volume.good_pace_max,
            self.volume.excellent_max,
            self.consistency.very_consistent_max,
            self.consistency.some_variety_max,
        ];
        if all.iter().any(|t| !t.is_finite() || *t <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "thresholds must be positive finite minutes",
            ));
        }

        if self.volume.great_start_max >= self.volume.good_pace_max
            || self.volume.good_pace_max >= self.volume.excellent_max
        {
            return Err(ConfigError::InvalidRange(
                "volume thresholds must be strictly increasing",
            ));
        }

        if self.consistency.very_consistent_max >= self.consistency.some_variety_max {
            return Err(ConfigError::InvalidRange(
                "consistency thresholds must be strictly increasing",
            ));
        }

        Ok(())
    }
}
