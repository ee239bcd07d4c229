// ABOUTME: Main library entry point for the running tracker
// ABOUTME: Interactive weekly running workout collection, summary, and insights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Running Tracker
//!
//! Console tool that asks a runner for a weekly goal and seven daily workout
//! durations, then prints total, average, longest and shortest workouts
//! followed by feedback chosen from fixed thresholds.
//!
//! ## Architecture
//!
//! - **`tracker_core`**: `WeekData` and its aggregates, errors, constants
//! - **`tracker_intelligence`**: volume and consistency bands, insight text
//! - **collector**: token-oriented input loop with re-prompting
//! - **formatters**: report section writers
//! - **app**: one interactive session wired end to end
//!
//! ## Example Usage
//!
//! ```rust
//! use running_tracker::app::run_session;
//! use tracker_intelligence::InsightGenerator;
//!
//! let input = "Run 150 minutes\n30 0 45 20 0 60 15\n";
//! let mut out = Vec::new();
//! let outcome = run_session(input.as_bytes(), &mut out, &InsightGenerator::new()).unwrap();
//!
//! assert!((outcome.week.total() - 170.0).abs() < f64::EPSILON);
//! ```

/// Interactive session orchestration
pub mod app;

/// Goal and daily value collection from a line-oriented reader
pub mod collector;

/// Console report formatting
pub mod formatters;

/// Logging configuration and initialization
pub mod logging;

pub use tracker_core::{TrackerError, TrackerResult, WeekData, WeeklySummary};
pub use tracker_intelligence::{InsightConfig, InsightGenerator};
