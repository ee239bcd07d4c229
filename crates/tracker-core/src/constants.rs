// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Weekday labels, insight thresholds, and console report layout values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! flat list.

/// Week shape and weekday labels
pub mod week {
    use chrono::Weekday;

    /// Number of daily readings in a week
    pub const DAYS_PER_WEEK: usize = 7;

    /// Days in collection order, Monday first
    pub const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// Full English name for a weekday
    ///
    /// `chrono` only renders the three-letter abbreviation.
    #[must_use]
    pub const fn day_name(day: Weekday) -> &'static str {
        match day {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }
}

/// Weekly volume thresholds in minutes
pub mod volume_thresholds {
    /// Below this total the week is a "great start"
    pub const GREAT_START_MAX_MINUTES: f64 = 60.0;
    /// Below this total the runner is on a "good pace"
    pub const GOOD_PACE_MAX_MINUTES: f64 = 150.0;
    /// Below this total the week is "excellent"; at or above it is "outstanding"
    pub const EXCELLENT_MAX_MINUTES: f64 = 300.0;
}

/// Longest-minus-shortest workout thresholds in minutes
pub mod consistency_thresholds {
    /// Spread below this is "very consistent"
    pub const VERY_CONSISTENT_MAX_SPREAD: f64 = 5.0;
    /// Spread below this is "some variety"; at or above it is a wide range
    pub const SOME_VARIETY_MAX_SPREAD: f64 = 15.0;
}

/// Console report layout
pub mod report {
    /// Width of the `=` and `-` rules around report sections
    pub const RULE_WIDTH: usize = 49;
    /// Column where summary values start
    pub const SUMMARY_LABEL_WIDTH: usize = 31;
    /// Program name used in the closing banner
    pub const PROGRAM_NAME: &str = "Running Tracker";
    /// Left indent of the closing banner title, which is not centered
    pub const CLOSING_TITLE_INDENT: usize = 10;
}

/// Service identity for structured logging
pub mod service_names {
    /// Service name reported in log events
    pub const RUNNING_TRACKER: &str = "running-tracker";
}
