// ABOUTME: Weekly running insight engine
// ABOUTME: Maps weekly aggregates and the runner's goal to motivational feedback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Intelligence
//!
//! Pure functions from a week's aggregates to canned feedback text. Nothing
//! in this crate performs I/O.

/// Threshold configuration and validation
pub mod config;

/// Volume and consistency bands plus insight generation
pub mod insights;

pub use config::{ConfigError, InsightConfig};
pub use insights::{
    insight_lines, ConsistencyBand, Insight, InsightGenerator, InsightType, VolumeBand,
};
