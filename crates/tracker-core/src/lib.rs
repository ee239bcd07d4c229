// ABOUTME: Core types and constants for the running tracker
// ABOUTME: Foundation crate with error handling, weekday labels, thresholds, and the week model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tracker Core
//!
//! Foundation crate providing shared types and constants for the running
//! tracker. It has no I/O of its own, so everything here is unit-testable
//! with plain values.
//!
//! ## Modules
//!
//! - **errors**: `TrackerError` and the `TrackerResult` alias
//! - **constants**: day labels, insight thresholds, and report layout values
//! - **models**: `WeekData`, `DailyEntry`, and `WeeklySummary`

/// Error types shared by every crate in the workspace
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Weekly workout data models
pub mod models;

pub use errors::{TrackerError, TrackerResult};
pub use models::{DailyEntry, WeekData, WeeklySummary};
