// ABOUTME: Week of running workout minutes with aggregate statistics
// ABOUTME: Validated seven-value container exposing total, average, max, min, and daily breakdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! `WeekData` holds one workout duration per weekday, Monday through Sunday.
//!
//! Values are validated once at construction (finite, non-negative, exactly
//! seven of them) so every accessor is a plain computation with no error
//! path.

use crate::constants::week::{day_name, DAYS_PER_WEEK, WEEKDAYS};
use crate::errors::{TrackerError, TrackerResult};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Zip;
use std::slice;

static WEEK_ORDER: [Weekday; DAYS_PER_WEEK] = WEEKDAYS;

/// Seven days of workout minutes, Monday first
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct WeekData {
    values: [f64; DAYS_PER_WEEK],
}

impl WeekData {
    /// Build a week from one value per day
    ///
    /// # Errors
    ///
    /// Returns `NonFiniteValue` for NaN or infinite values and
    /// `NegativeValue` for values below zero.
    pub fn new(values: [f64; DAYS_PER_WEEK]) -> TrackerResult<Self> {
        for &value in &values {
            validate_minutes(value)?;
        }
        // Negative zero passes validation but would print as "-0.00"
        Ok(Self {
            values: values.map(f64::abs),
        })
    }

    /// Build a week from a slice that must hold exactly seven values
    ///
    /// # Errors
    ///
    /// Returns `WrongLength` when the slice is not seven long, otherwise the
    /// same errors as [`WeekData::new`].
    pub fn from_slice(values: &[f64]) -> TrackerResult<Self> {
        let week: [f64; DAYS_PER_WEEK] =
            values.try_into().map_err(|_| TrackerError::WrongLength {
                expected: DAYS_PER_WEEK,
                actual: values.len(),
            })?;
        Self::new(week)
    }

    /// Raw values in week order
    #[must_use]
    pub const fn values(&self) -> &[f64; DAYS_PER_WEEK] {
        &self.values
    }

    /// Sum of all seven values
    #[must_use]
    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Mean minutes per day, always over seven days
    #[must_use]
    pub fn average(&self) -> f64 {
        self.total() / DAYS_PER_WEEK as f64
    }

    /// Longest workout of the week
    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Shortest workout of the week
    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Per-day entries in week order
    ///
    /// Each call returns a fresh iterator.
    #[must_use]
    pub fn daily_breakdown(&self) -> DailyBreakdown<'_> {
        DailyBreakdown {
            inner: WEEK_ORDER.iter().zip(self.values.iter()),
        }
    }

    /// Snapshot of the four aggregates
    #[must_use]
    pub fn summary(&self) -> WeeklySummary {
        WeeklySummary {
            total: self.total(),
            average: self.average(),
            max: self.max(),
            min: self.min(),
        }
    }
}

fn validate_minutes(value: f64) -> TrackerResult<()> {
    if !value.is_finite() {
        return Err(TrackerError::NonFiniteValue { value });
    }
    if value < 0.0 {
        return Err(TrackerError::NegativeValue { value });
    }
    Ok(())
}

impl TryFrom<Vec<f64>> for WeekData {
    type Error = TrackerError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<WeekData> for Vec<f64> {
    fn from(week: WeekData) -> Self {
        week.values.to_vec()
    }
}

impl fmt::Display for WeekData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.daily_breakdown() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// One line of the daily breakdown
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyEntry {
    /// Day of the week
    pub day: Weekday,
    /// Workout minutes recorded for the day
    pub minutes: f64,
}

impl DailyEntry {
    /// Full English day name
    #[must_use]
    pub const fn day_name(&self) -> &'static str {
        day_name(self.day)
    }
}

impl fmt::Display for DailyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}", self.day_name(), self.minutes)
    }
}

/// Iterator over a week's [`DailyEntry`] values
#[derive(Debug, Clone)]
pub struct DailyBreakdown<'a> {
    inner: Zip<slice::Iter<'static, Weekday>, slice::Iter<'a, f64>>,
}

impl Iterator for DailyBreakdown<'_> {
    type Item = DailyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&day, &minutes)| DailyEntry { day, minutes })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for DailyBreakdown<'_> {}

/// Aggregate statistics for one week
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeeklySummary {
    /// Total minutes run
    pub total: f64,
    /// Average minutes per day
    pub average: f64,
    /// Longest workout in minutes
    pub max: f64,
    /// Shortest workout in minutes
    pub min: f64,
}
