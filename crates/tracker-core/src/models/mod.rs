// ABOUTME: Data models for a week of running workouts
// ABOUTME: Re-exports the week container, per-day entries, and summary snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Seven-day workout container and derived statistics
pub mod week;

pub use week::{DailyBreakdown, DailyEntry, WeekData, WeeklySummary};
