// ABOUTME: Weekly insight generation from total, longest, and shortest workout minutes
// ABOUTME: Selects canned feedback by volume band, consistency band, and echoes the runner's goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Insight generation for a week of running

use crate::config::{ConsistencyThresholds, InsightConfig, VolumeThresholds};
use serde::Serialize;
use tracing::debug;
use tracker_core::{TrackerResult, WeeklySummary};

/// Categories of weekly insights, in report order
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsightType {
    /// Feedback on total weekly minutes
    Volume,
    /// Feedback on the spread between longest and shortest workout
    Consistency,
    /// Closing reminder of the runner's goal
    Goal,
}

/// An insight made of one or more console lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    /// Type of insight
    pub insight_type: InsightType,
    /// Message lines, printed one per line
    pub lines: Vec<String>,
}

impl Insight {
    fn new(insight_type: InsightType, lines: &[&str]) -> Self {
        Self {
            insight_type,
            lines: lines.iter().map(|&line| line.to_owned()).collect(),
        }
    }
}

/// Weekly volume classification by total minutes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VolumeBand {
    /// No running at all
    NoActivity,
    /// Some running, below the first threshold
    GreatStart,
    /// Moderate weekly volume
    GoodPace,
    /// High weekly volume
    Excellent,
    /// Very high weekly volume
    Outstanding,
}

impl VolumeBand {
    /// Classify a weekly total
    #[must_use]
    pub fn from_total(total: f64, thresholds: &VolumeThresholds) -> Self {
        // Totals are sums of non-negative values, so <= 0 means exactly zero
        if total <= 0.0 {
            Self::NoActivity
        } else if total < thresholds.great_start_max {
            Self::GreatStart
        } else if total < thresholds.good_pace_max {
            Self::GoodPace
        } else if total < thresholds.excellent_max {
            Self::Excellent
        } else {
            Self::Outstanding
        }
    }

    /// Feedback lines for this band
    #[must_use]
    pub fn lines(self, total: f64) -> Vec<String> {
        match self {
            Self::NoActivity => vec![
                "It looks like you didn't run this week.".to_owned(),
                "Next week, try to get moving! Even short runs count!".to_owned(),
            ],
            Self::GreatStart => vec![
                format!("You ran a total of {total:.2} minutes this week."),
                "That's a great start! Try to increase your volume".to_owned(),
                "by 10% next week for better fitness gains.".to_owned(),
            ],
            Self::GoodPace => vec![
                format!("Nice effort! You got in {total:.2} minutes of running."),
                "You're on a good pace. Keep up the consistency!".to_owned(),
            ],
            Self::Excellent => vec![
                format!("Excellent work! You logged {total:.2} minutes this week."),
                "You're maintaining great fitness levels.".to_owned(),
                "Consider varying your training intensity next week.".to_owned(),
            ],
            Self::Outstanding => vec![
                format!("Outstanding dedication! You ran {total:.2} minutes this week."),
                "Make sure to balance hard workouts with proper recovery!".to_owned(),
            ],
        }
    }
}

/// Workout-to-workout consistency classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsistencyBand {
    /// Longest and shortest workouts are close together
    VeryConsistent,
    /// Moderate spread
    SomeVariety,
    /// Large spread between workouts
    WideRange,
}

impl ConsistencyBand {
    /// Classify the spread between the longest and shortest workout
    ///
    /// Returns `None` unless both are positive: a rest day makes the spread
    /// meaningless.
    #[must_use]
    pub fn from_range(max: f64, min: f64, thresholds: &ConsistencyThresholds) -> Option<Self> {
        if max <= 0.0 || min <= 0.0 {
            return None;
        }

        let spread = max - min;
        Some(if spread < thresholds.very_consistent_max {
            Self::VeryConsistent
        } else if spread < thresholds.some_variety_max {
            Self::SomeVariety
        } else {
            Self::WideRange
        })
    }

    /// Feedback lines for this band
    #[must_use]
    pub fn lines(self) -> Vec<String> {
        let lines: &[&str] = match self {
            Self::VeryConsistent => &["Your workouts were very consistent this week - great!"],
            Self::SomeVariety => &["Your training had some variety, which is healthy."],
            Self::WideRange => &[
                "You had quite a range in workout times. Consider",
                "building a more structured training plan.",
            ],
        };
        lines.iter().map(|&line| line.to_owned()).collect()
    }
}

/// Insight generator for a week of running
#[derive(Debug, Clone, Default)]
pub struct InsightGenerator {
    config: InsightConfig,
}

impl InsightGenerator {
    /// Create a generator with the default thresholds
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a generator with custom thresholds
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if the thresholds fail
    /// [`InsightConfig::validate`].
    pub fn with_config(config: InsightConfig) -> TrackerResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Generate insights in report order: volume, optional consistency, goal
    #[must_use]
    pub fn generate(&self, total: f64, max: f64, min: f64, goal: &str) -> Vec<Insight> {
        let volume = VolumeBand::from_total(total, &self.config.volume);
        let consistency = ConsistencyBand::from_range(max, min, &self.config.consistency);
        debug!(?volume, ?consistency, total, max, min, "Classified week");

        let mut insights = vec![Insight {
            insight_type: InsightType::Volume,
            lines: volume.lines(total),
        }];

        if let Some(band) = consistency {
            insights.push(Insight {
                insight_type: InsightType::Consistency,
                lines: band.lines(),
            });
        }

        let goal_line = format!("Your goal was: {goal}");
        insights.push(Insight::new(
            InsightType::Goal,
            &[goal_line.as_str(), "Keep pushing toward that goal next week!"],
        ));

        insights
    }

    /// Generate insights from a precomputed summary
    #[must_use]
    pub fn generate_for_summary(&self, summary: &WeeklySummary, goal: &str) -> Vec<Insight> {
        self.generate(summary.total, summary.max, summary.min, goal)
    }
}

/// Ordered insight lines for a week using the default thresholds
#[must_use]
pub fn insight_lines(total: f64, max: f64, min: f64, goal: &str) -> Vec<String> {
    InsightGenerator::new()
        .generate(total, max, min, goal)
        .into_iter()
        .flat_map(|insight| insight.lines)
        .collect()
}
